//! Test helpers: build AppState and router around in-memory stores.
//!
//! Run from workspace root: `cargo test -p academy-api`.
#![allow(dead_code)]

use academy_api::setup::routes;
use academy_api::AppState;
use academy_core::{AcademyRecord, Config, StoredObject};
use academy_storage::{ConfigStore, InMemoryConfigStore, InMemoryMediaStore, MediaStore};
use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Arc;

pub const TEST_BUCKET: &str = "signage-media";

/// Build a Config from explicit variables, never from the process environment.
pub fn test_config(vars: &[(&str, &str)]) -> Config {
    let mut all: HashMap<String, String> = HashMap::from([(
        "S3_BUCKET_NAME".to_string(),
        TEST_BUCKET.to_string(),
    )]);
    for (k, v) in vars {
        all.insert(k.to_string(), v.to_string());
    }
    Config::from_lookup(|key| all.get(key).cloned()).expect("valid test config")
}

/// `a.jpg` (2024-01-01), `b.mp4` (2024-01-03), `c.png` (no timestamp) for gym1,
/// plus noise under other prefixes and unsupported extensions.
pub fn gym1_objects() -> Vec<StoredObject> {
    vec![
        StoredObject::new("academies/gym1/a.jpg")
            .with_size(1_024)
            .with_last_modified(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        StoredObject::new("academies/gym1/b.mp4")
            .with_size(5_242_880)
            .with_last_modified(Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap()),
        StoredObject::new("academies/gym1/c.png"),
        StoredObject::new("academies/gym1/schedule.TXT")
            .with_last_modified(Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap()),
        StoredObject::new("academies/gym1/menu.pdf"),
        StoredObject::new("academies/gym2/other.jpg")
            .with_last_modified(Utc.with_ymd_and_hms(2024, 1, 4, 0, 0, 0).unwrap()),
        StoredObject::new("academies/academia-são-paulo/foto 1.jpg")
            .with_last_modified(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
    ]
}

pub struct TestApp {
    pub server: TestServer,
    pub records: InMemoryConfigStore,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

fn build_server(state: AppState) -> TestServer {
    let app = routes::setup_routes(Arc::new(state));
    TestServer::new(app.into_make_service()).expect("Failed to create test server")
}

/// Setup test app with the gym1 fixture and a config table.
pub fn setup_test_app(vars: &[(&str, &str)]) -> TestApp {
    let records = InMemoryConfigStore::new();
    let media: Arc<dyn MediaStore> = Arc::new(InMemoryMediaStore::with_objects(gym1_objects()));
    let config_store: Arc<dyn ConfigStore> = Arc::new(records.clone());

    let state = AppState::new(test_config(vars), media, Some(config_store));
    TestApp {
        server: build_server(state),
        records,
    }
}

/// Setup test app whose media store fails every call.
pub fn setup_failing_app() -> TestServer {
    let media: Arc<dyn MediaStore> = Arc::new(InMemoryMediaStore::failing("bucket unavailable"));
    build_server(AppState::new(test_config(&[]), media, None))
}

pub fn record(interval: Option<i64>, shuffle: Option<bool>) -> AcademyRecord {
    AcademyRecord {
        interval,
        shuffle,
        ..Default::default()
    }
}
