use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;
use ytingest_core::MediaMetadata;
use ytingest_processing::{ExtractionError, MetadataExtractor};

/// What the scripted extractor answers with.
#[derive(Debug, Clone)]
pub enum Outcome {
    Metadata(Value),
    Fail(String),
}

/// Extractor that records every url it is asked for and answers from a script.
pub struct ScriptedExtractor {
    outcome: Outcome,
    calls: Mutex<Vec<String>>,
}

impl ScriptedExtractor {
    pub fn returning(metadata: Value) -> Self {
        Self::new(Outcome::Metadata(metadata))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(Outcome::Fail(message.to_string()))
    }

    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetadataExtractor for ScriptedExtractor {
    async fn extract_metadata(&self, url: &str) -> Result<MediaMetadata, ExtractionError> {
        self.calls.lock().unwrap().push(url.to_string());
        match &self.outcome {
            Outcome::Metadata(value) => Ok(MediaMetadata::from_value(value.clone())
                .expect("scripted metadata must be a JSON object")),
            Outcome::Fail(message) => Err(ExtractionError::failed(message.clone())),
        }
    }
}
