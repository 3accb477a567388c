//! Health check handlers and response types.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Run an async check with timeout; returns "ready", "timeout", or "not_ready: {error}".
async fn run_check<F, E>(timeout: Duration, f: F) -> String
where
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    match tokio::time::timeout(timeout, f).await {
        Ok(Ok(())) => "ready".to_string(),
        Ok(Err(e)) => format!("not_ready: {}", e),
        Err(_) => "timeout".to_string(),
    }
}

#[derive(serde::Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub media_store: String,
    pub config_store: String,
}

/// Liveness probe - process is running.
pub async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Readiness probe - both stores reachable.
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let media_store = run_check(CHECK_TIMEOUT, state.media_store.ping()).await;

    let config_store = match state.config_store {
        Some(ref store) => run_check(CHECK_TIMEOUT, store.ping()).await,
        None => "disabled".to_string(),
    };

    let ready = media_store == "ready" && matches!(config_store.as_str(), "ready" | "disabled");
    if !ready {
        tracing::error!(
            media_store = %media_store,
            config_store = %config_store,
            "Readiness check failed"
        );
    }

    let response = ReadinessResponse {
        status: if ready { "ready" } else { "not_ready" }.to_string(),
        media_store,
        config_store,
    };
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
