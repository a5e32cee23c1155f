//! Storage setup and initialization

use anyhow::{Context, Result};
use std::sync::Arc;
use ytingest_core::Config;
use ytingest_storage::{create_storage, Storage};

pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!("Initializing storage abstraction...");
    let storage = create_storage(config)
        .await
        .context("Failed to initialize storage backend")?;
    tracing::info!(
        backend = %storage.backend_type(),
        bucket = config.transcript_bucket().unwrap_or("-"),
        "Storage abstraction initialized successfully"
    );
    Ok(storage)
}
