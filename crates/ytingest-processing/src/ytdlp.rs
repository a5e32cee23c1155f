//! yt-dlp extractor - metadata only, no media download

use crate::traits::{ExtractionError, MetadataExtractor};
use async_trait::async_trait;
use std::fmt::Display;
use std::process::Stdio;
use tokio::process::Command;
use ytingest_core::MediaMetadata;

/// Flags passed before the url. Verbosity is silenced by the tool itself;
/// stdout carries exactly one JSON document.
const YTDLP_ARGS: [&str; 5] = [
    "--dump-single-json",
    "--skip-download",
    "--quiet",
    "--no-warnings",
    "--no-progress",
];

/// Validate that a path doesn't contain shell metacharacters or dangerous sequences
fn validate_path(path: &str) -> Result<(), ExtractionError> {
    let dangerous_chars = [';', '|', '&', '$', '`', '(', ')', '<', '>', '\n', '\r'];
    if path.chars().any(|c| dangerous_chars.contains(&c)) {
        return Err(ExtractionError::InvalidExecutable(format!(
            "path contains dangerous characters: {}",
            path
        )));
    }

    if path.contains("..") {
        return Err(ExtractionError::InvalidExecutable(format!(
            "path contains directory traversal: {}",
            path
        )));
    }

    Ok(())
}

/// Pick the message to report for a failed run.
///
/// Prefers the first `ERROR:` line of stderr, then the whole (trimmed) stderr,
/// then the exit status.
pub(crate) fn failure_message(stderr: &str, status: impl Display) -> String {
    stderr
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("ERROR:"))
        .map(String::from)
        .or_else(|| {
            let trimmed = stderr.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| format!("yt-dlp exited with {}", status))
}

pub struct YtDlpExtractor {
    ytdlp_path: String,
}

impl YtDlpExtractor {
    pub fn new(ytdlp_path: impl Into<String>) -> Result<Self, ExtractionError> {
        let ytdlp_path = ytdlp_path.into();
        validate_path(&ytdlp_path)?;
        Ok(Self { ytdlp_path })
    }

    pub fn ytdlp_path(&self) -> &str {
        &self.ytdlp_path
    }
}

#[async_trait]
impl MetadataExtractor for YtDlpExtractor {
    #[tracing::instrument(skip(self), fields(
        process.executable.name = "yt-dlp",
        process.executable.path = %self.ytdlp_path,
    ))]
    async fn extract_metadata(&self, url: &str) -> Result<MediaMetadata, ExtractionError> {
        let start = std::time::Instant::now();

        // `--` keeps a url starting with '-' from being read as an option.
        let output = Command::new(&self.ytdlp_path)
            .args(YTDLP_ARGS)
            .arg("--")
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ExtractionError::Spawn {
                program: self.ytdlp_path.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = failure_message(&stderr, output.status);
            tracing::debug!(
                status = %output.status,
                duration_ms = start.elapsed().as_millis(),
                "yt-dlp failed"
            );
            return Err(ExtractionError::failed(message));
        }

        let value: serde_json::Value = serde_json::from_slice(&output.stdout)
            .map_err(|e| ExtractionError::InvalidOutput(e.to_string()))?;

        let metadata = MediaMetadata::from_value(value).ok_or_else(|| {
            ExtractionError::InvalidOutput("expected a JSON object".to_string())
        })?;

        tracing::info!(
            duration_ms = start.elapsed().as_millis(),
            video_id = metadata.id().unwrap_or("unknown"),
            "yt-dlp metadata extraction completed"
        );

        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_prefers_error_line() {
        let stderr = "WARNING: [youtube] falling back\nERROR: [youtube] abc: Video unavailable\n";
        assert_eq!(
            failure_message(stderr, "exit status: 1"),
            "ERROR: [youtube] abc: Video unavailable"
        );
    }

    #[test]
    fn test_failure_message_falls_back_to_stderr_then_status() {
        assert_eq!(
            failure_message("  network timeout \n", "exit status: 1"),
            "network timeout"
        );
        assert_eq!(
            failure_message("", "exit status: 2"),
            "yt-dlp exited with exit status: 2"
        );
    }

    #[test]
    fn test_new_rejects_unsafe_paths() {
        assert!(YtDlpExtractor::new("yt-dlp").is_ok());
        assert!(YtDlpExtractor::new("/usr/local/bin/yt-dlp").is_ok());
        assert!(YtDlpExtractor::new("yt-dlp; rm -rf /").is_err());
        assert!(YtDlpExtractor::new("../bin/yt-dlp").is_err());
        assert!(YtDlpExtractor::new("yt-dlp `id`").is_err());
    }

    #[test]
    fn test_new_accepts_paths_with_spaces_and_drives() {
        assert!(YtDlpExtractor::new("/opt/media tools/yt-dlp").is_ok());
        assert!(YtDlpExtractor::new(r"C:\Program Files\yt-dlp\yt-dlp.exe").is_ok());
    }

    #[cfg(unix)]
    mod process {
        use super::*;
        use std::os::unix::fs::PermissionsExt;
        use std::path::Path;

        fn write_script(dir: &Path, body: &str) -> String {
            let path = dir.join("fake-yt-dlp");
            std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path.to_string_lossy().to_string()
        }

        #[tokio::test]
        async fn test_parses_metadata_from_stdout() {
            let dir = tempfile::tempdir().unwrap();
            let script = write_script(
                dir.path(),
                r#"printf '{"id":"abc123","argv":"%s","automatic_captions":{"en":[{"url":"https://cap.example/x"}]}}' "$*""#,
            );
            let extractor = YtDlpExtractor::new(script).unwrap();

            let metadata = extractor
                .extract_metadata("https://video.example/watch?v=abc123")
                .await
                .unwrap();

            assert_eq!(metadata.id(), Some("abc123"));
            assert_eq!(metadata.transcript_url(), Some("https://cap.example/x"));

            let argv = metadata.fields()["argv"].as_str().unwrap();
            assert!(argv.contains("--dump-single-json"));
            assert!(argv.contains("--skip-download"));
            assert!(argv.contains("--quiet"));
            assert!(argv.contains("--no-warnings"));
            assert!(argv.ends_with("-- https://video.example/watch?v=abc123"));
        }

        #[tokio::test]
        async fn test_reports_error_line_on_failure() {
            let dir = tempfile::tempdir().unwrap();
            let script = write_script(
                dir.path(),
                "echo 'ERROR: [youtube] abc123: Video unavailable' >&2\nexit 1",
            );
            let extractor = YtDlpExtractor::new(script).unwrap();

            let err = extractor
                .extract_metadata("https://video.example/watch?v=abc123")
                .await
                .unwrap_err();

            assert!(matches!(err, ExtractionError::Failed { .. }));
            assert_eq!(err.message(), "ERROR: [youtube] abc123: Video unavailable");
        }

        #[tokio::test]
        async fn test_rejects_non_object_output() {
            let dir = tempfile::tempdir().unwrap();
            let script = write_script(dir.path(), "echo '[1, 2, 3]'");
            let extractor = YtDlpExtractor::new(script).unwrap();

            let err = extractor.extract_metadata("abc123").await.unwrap_err();
            assert!(matches!(err, ExtractionError::InvalidOutput(_)));
        }

        #[tokio::test]
        async fn test_missing_binary_is_spawn_error() {
            let dir = tempfile::tempdir().unwrap();
            let missing = dir.path().join("not-installed");
            let extractor = YtDlpExtractor::new(missing.to_string_lossy().to_string()).unwrap();

            let err = extractor.extract_metadata("abc123").await.unwrap_err();
            assert!(matches!(err, ExtractionError::Spawn { .. }));
        }
    }
}
