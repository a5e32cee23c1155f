//! Extraction capability trait

use async_trait::async_trait;
use thiserror::Error;
use ytingest_core::MediaMetadata;

/// Why metadata could not be extracted.
///
/// The `Display` text is the message surfaced to the caller (after the
/// handler strips a leading `"ERROR: "`).
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The extractor ran and reported a failure (unavailable video, network error, ...).
    #[error("{message}")]
    Failed { message: String },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("extractor returned invalid metadata: {0}")]
    InvalidOutput(String),

    #[error("invalid extractor executable: {0}")]
    InvalidExecutable(String),
}

impl ExtractionError {
    pub fn failed(message: impl Into<String>) -> Self {
        ExtractionError::Failed {
            message: message.into(),
        }
    }

    /// Message to report for this failure.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Fetches the metadata document for a video reference without downloading media.
#[async_trait]
pub trait MetadataExtractor: Send + Sync {
    async fn extract_metadata(&self, url: &str) -> Result<MediaMetadata, ExtractionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_message_is_verbatim() {
        let err = ExtractionError::failed("ERROR: [youtube] abc: Video unavailable");
        assert_eq!(err.message(), "ERROR: [youtube] abc: Video unavailable");
    }

    #[test]
    fn test_spawn_message_names_program() {
        let err = ExtractionError::Spawn {
            program: "yt-dlp".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.message(), "failed to run yt-dlp: No such file or directory");
    }
}
