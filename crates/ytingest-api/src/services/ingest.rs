//! Ingestion handler
//!
//! Resolve the url, extract metadata, check for an English automatic
//! transcript and write the document to storage. Three terminal outcomes:
//! 502 (extraction failed), 204 (no transcript), 200 (persisted).

use crate::error::app_error_from_storage;
use ytingest_core::constants::METADATA_CONTENT_TYPE;
use ytingest_core::{AppError, IngestRequest, IngestResult, IngestSettings};
use ytingest_processing::MetadataExtractor;
use ytingest_storage::Storage;

/// Run one ingestion.
///
/// Extraction failures and missing transcripts are returned as `Ok` results.
/// `Err` is reserved for storage failures, metadata without an `id`, and
/// serialization errors.
#[tracing::instrument(skip_all, fields(url = tracing::field::Empty))]
pub async fn ingest(
    request: &IngestRequest,
    settings: &IngestSettings,
    extractor: &dyn MetadataExtractor,
    storage: &dyn Storage,
) -> Result<IngestResult, AppError> {
    let url = request.resolve_url(&settings.default_url);
    tracing::Span::current().record("url", url);

    let metadata = match extractor.extract_metadata(url).await {
        Ok(metadata) => metadata,
        Err(e) => {
            let result = IngestResult::fetch_failed(&e.message());
            tracing::warn!(error = %e, "Metadata extraction failed");
            return Ok(result);
        }
    };

    if metadata.transcript_url().is_none() {
        tracing::info!(
            video_id = metadata.id().unwrap_or("unknown"),
            "No English automatic transcript"
        );
        return Ok(IngestResult::no_transcript());
    }

    let key = metadata
        .storage_key()
        .ok_or_else(|| AppError::InvalidMetadata("metadata has no video id".to_string()))?;
    let body = metadata.to_json_vec()?;
    let size = body.len();

    let location = storage
        .upload_with_key(&key, body, METADATA_CONTENT_TYPE)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, key = %key, "Failed to write metadata");
            app_error_from_storage(e)
        })?;

    tracing::info!(key = %key, size_bytes = size, location = %location, "Metadata stored");

    Ok(IngestResult::ok())
}
