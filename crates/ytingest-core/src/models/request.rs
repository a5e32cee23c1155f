//! Inbound ingestion request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body accepted by the ingestion endpoint.
///
/// Only `url` is recognized; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestRequest {
    #[serde(default)]
    pub url: Option<String>,
}

impl IngestRequest {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    /// Decode a raw request body.
    ///
    /// Never fails: an empty body, invalid JSON, a non-object value or a
    /// non-string `url` all decode to a request without a url.
    pub fn from_body(body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::default();
        }

        // Decoding through `Value` keeps arrays from filling the struct positionally.
        let url = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => fields
                .get("url")
                .and_then(Value::as_str)
                .map(String::from),
            _ => None,
        };

        Self { url }
    }

    /// The url to process, falling back to `default_url` when absent or empty.
    pub fn resolve_url<'a>(&'a self, default_url: &'a str) -> &'a str {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => default_url,
        }
    }
}
