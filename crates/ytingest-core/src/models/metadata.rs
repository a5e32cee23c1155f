//! Metadata document produced by the extraction step.
//!
//! The document is opaque: only `id` and the automatic caption track url are
//! ever looked at, and it is persisted exactly as extracted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::CAPTION_LANGUAGE;

/// Extractor-defined JSON object describing one video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaMetadata(Map<String, Value>);

impl MediaMetadata {
    /// Wrap a JSON value; `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// Video id, when present as a string.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// `automatic_captions.<language>[0].url`
    ///
    /// Each hop yields `None` when missing or of the wrong type. An empty url
    /// counts as absent.
    pub fn caption_url(&self, language: &str) -> Option<&str> {
        self.0
            .get("automatic_captions")
            .and_then(Value::as_object)
            .and_then(|captions| captions.get(language))
            .and_then(Value::as_array)
            .and_then(|tracks| tracks.first())
            .and_then(Value::as_object)
            .and_then(|track| track.get("url"))
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }

    /// English automatic transcript url.
    pub fn transcript_url(&self) -> Option<&str> {
        self.caption_url(CAPTION_LANGUAGE)
    }

    /// Storage key for this document: `<id>.json`.
    pub fn storage_key(&self) -> Option<String> {
        self.id().map(|id| format!("{}.json", id))
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Serialize the whole document.
    pub fn to_json_vec(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metadata(value: Value) -> MediaMetadata {
        MediaMetadata::from_value(value).expect("object")
    }

    #[test]
    fn test_transcript_url_present() {
        let doc = metadata(json!({
            "id": "abc123",
            "automatic_captions": {"en": [{"url": "https://cap.example/x"}, {"url": "https://cap.example/y"}]}
        }));
        assert_eq!(doc.transcript_url(), Some("https://cap.example/x"));
        assert_eq!(doc.id(), Some("abc123"));
        assert_eq!(doc.storage_key().as_deref(), Some("abc123.json"));
    }

    #[test]
    fn test_transcript_url_absent_at_every_hop() {
        let cases = [
            json!({"id": "a"}),
            json!({"id": "a", "automatic_captions": {}}),
            json!({"id": "a", "automatic_captions": {"de": [{"url": "https://cap.example/de"}]}}),
            json!({"id": "a", "automatic_captions": {"en": []}}),
            json!({"id": "a", "automatic_captions": {"en": [{}]}}),
            json!({"id": "a", "automatic_captions": {"en": [{"ext": "vtt"}]}}),
            json!({"id": "a", "automatic_captions": {"en": [{"url": ""}]}}),
        ];

        for case in cases {
            assert_eq!(metadata(case.clone()).transcript_url(), None, "{}", case);
        }
    }

    #[test]
    fn test_wrong_types_are_treated_as_missing() {
        let cases = [
            json!({"automatic_captions": null}),
            json!({"automatic_captions": ["en"]}),
            json!({"automatic_captions": {"en": {"url": "https://cap.example/x"}}}),
            json!({"automatic_captions": {"en": ["https://cap.example/x"]}}),
            json!({"automatic_captions": {"en": [{"url": 7}]}}),
        ];

        for case in cases {
            assert_eq!(metadata(case.clone()).transcript_url(), None, "{}", case);
        }
    }

    #[test]
    fn test_id_must_be_string() {
        assert_eq!(metadata(json!({"id": 12})).id(), None);
        assert_eq!(metadata(json!({})).storage_key(), None);
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(MediaMetadata::from_value(json!([1, 2])).is_none());
        assert!(MediaMetadata::from_value(json!("id")).is_none());
    }

    #[test]
    fn test_serialized_document_is_complete() {
        let original = json!({
            "id": "abc123",
            "title": "Some video",
            "duration": 212,
            "automatic_captions": {"en": [{"url": "https://cap.example/x", "ext": "json3"}]},
            "formats": [{"format_id": "18"}]
        });
        let doc = metadata(original.clone());

        let bytes = doc.to_json_vec().unwrap();
        let decoded: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, original);
    }
}
