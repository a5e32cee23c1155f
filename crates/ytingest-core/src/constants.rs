//! Shared constants.

/// Video processed when the request names none.
pub const DEFAULT_VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

/// Content type of the persisted metadata document.
pub const METADATA_CONTENT_TYPE: &str = "application/json";

/// Caption language looked up under `automatic_captions`.
pub const CAPTION_LANGUAGE: &str = "en";

/// Prefix the extraction tool puts in front of its error messages.
pub const EXTRACTOR_ERROR_PREFIX: &str = "ERROR: ";

pub const MSG_OK: &str = "ok";
pub const MSG_NO_TRANSCRIPT: &str = "no English transcript available";
pub const MSG_FETCH_FAILED_PREFIX: &str = "could not fetch captions: ";
