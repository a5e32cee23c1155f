//! Test helpers: build AppState and router with scripted capabilities.
//!
//! Run from workspace root: `cargo test -p ytingest-api`.
#![allow(dead_code)]

pub mod extractor;
pub mod storage;

use axum_test::TestServer;
use std::sync::Arc;
use ytingest_api::setup::routes;
use ytingest_api::AppState;
use ytingest_core::IngestSettings;

pub use extractor::{Outcome, ScriptedExtractor};
pub use storage::{RecordingStorage, StoredObject};

/// Default reference used by the tests instead of the production placeholder.
pub const TEST_DEFAULT_URL: &str = "https://video.example/watch?v=default";

pub const TEST_MAX_BODY_BYTES: usize = 4 * 1024;

pub fn test_settings() -> IngestSettings {
    IngestSettings {
        default_url: TEST_DEFAULT_URL.to_string(),
    }
}

/// Test application: server plus handles on the capabilities behind it.
pub struct TestApp {
    pub server: TestServer,
    pub extractor: Arc<ScriptedExtractor>,
    pub storage: Arc<RecordingStorage>,
}

pub fn setup_test_app(extractor: ScriptedExtractor, storage: RecordingStorage) -> TestApp {
    let extractor = Arc::new(extractor);
    let storage = Arc::new(storage);

    let state = Arc::new(AppState::new(
        test_settings(),
        extractor.clone(),
        storage.clone(),
    ));
    let app = routes::build_router(state, TEST_MAX_BODY_BYTES);
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        extractor,
        storage,
    }
}
