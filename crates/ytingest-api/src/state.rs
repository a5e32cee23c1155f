//! Application state shared by all requests.

use std::sync::Arc;
use ytingest_core::IngestSettings;
use ytingest_processing::MetadataExtractor;
use ytingest_storage::Storage;

/// Immutable settings plus the two capabilities the handler needs.
#[derive(Clone)]
pub struct AppState {
    pub ingest: IngestSettings,
    pub extractor: Arc<dyn MetadataExtractor>,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(
        ingest: IngestSettings,
        extractor: Arc<dyn MetadataExtractor>,
        storage: Arc<dyn Storage>,
    ) -> Self {
        Self {
            ingest,
            extractor,
            storage,
        }
    }
}
