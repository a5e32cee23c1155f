//! Outcome of one ingestion invocation.

use serde::Serialize;

use crate::constants::{
    EXTRACTOR_ERROR_PREFIX, MSG_FETCH_FAILED_PREFIX, MSG_NO_TRANSCRIPT, MSG_OK,
};

pub const STATUS_OK: u16 = 200;
pub const STATUS_NO_CONTENT: u16 = 204;
pub const STATUS_BAD_GATEWAY: u16 = 502;

/// Status code and plain-text message returned to the trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestResult {
    pub status_code: u16,
    pub message: String,
}

impl IngestResult {
    /// Metadata was persisted.
    pub fn ok() -> Self {
        Self {
            status_code: STATUS_OK,
            message: MSG_OK.to_string(),
        }
    }

    /// Extraction succeeded but the video has no English automatic captions.
    pub fn no_transcript() -> Self {
        Self {
            status_code: STATUS_NO_CONTENT,
            message: MSG_NO_TRANSCRIPT.to_string(),
        }
    }

    /// Extraction failed; `reason` is the extractor's message.
    pub fn fetch_failed(reason: &str) -> Self {
        Self {
            status_code: STATUS_BAD_GATEWAY,
            message: format!("{}{}", MSG_FETCH_FAILED_PREFIX, strip_error_prefix(reason)),
        }
    }
}

/// Remove one leading `"ERROR: "` from an extractor message.
pub fn strip_error_prefix(message: &str) -> &str {
    message
        .strip_prefix(EXTRACTOR_ERROR_PREFIX)
        .unwrap_or(message)
}
