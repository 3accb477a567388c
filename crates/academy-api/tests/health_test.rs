//! Health endpoint integration tests.

mod helpers;

use helpers::{setup_failing_app, setup_test_app};
use serde_json::Value;

#[tokio::test]
async fn test_liveness() {
    let app = setup_test_app(&[]);

    let response = app.client().get("/health").await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_readiness_with_healthy_stores() {
    let app = setup_test_app(&[]);

    let response = app.client().get("/health/ready").await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["media_store"], "ready");
    assert_eq!(body["config_store"], "ready");
}

#[tokio::test]
async fn test_readiness_reports_failing_media_store() {
    let server = setup_failing_app();

    let response = server.get("/health/ready").await;
    assert_eq!(response.status_code(), 503);
    let body: Value = response.json();
    assert_eq!(body["status"], "not_ready");
    assert!(body["media_store"]
        .as_str()
        .unwrap()
        .starts_with("not_ready"));
    assert_eq!(body["config_store"], "disabled");
}
