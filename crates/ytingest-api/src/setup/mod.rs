//! Application setup and initialization
//!
//! Startup order: validate configuration, install tracing, build the storage
//! backend and the extractor, then the router.

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use ytingest_core::Config;
use ytingest_processing::YtDlpExtractor;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Fail fast on misconfiguration (e.g. no destination bucket)
    config.validate().context("Configuration validation failed")?;

    crate::telemetry::init_tracing();

    tracing::info!(
        environment = config.environment(),
        storage_backend = %config.storage_backend(),
        "Configuration loaded and validated successfully"
    );

    let storage = storage::setup_storage(&config).await?;

    let extractor = YtDlpExtractor::new(config.ytdlp_path())
        .context("Failed to configure metadata extractor")?;
    tracing::info!(ytdlp_path = extractor.ytdlp_path(), "Metadata extractor configured");

    let state = Arc::new(AppState::new(
        config.ingest_settings().clone(),
        Arc::new(extractor),
        storage,
    ));

    let router = routes::setup_routes(&config, state.clone());

    Ok((state, router))
}
