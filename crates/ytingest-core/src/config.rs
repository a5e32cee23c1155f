//! Configuration module
//!
//! Configuration is read from the environment once at startup (after loading a
//! `.env` file when present) and validated before the server binds.

use std::env;

use crate::constants::DEFAULT_VIDEO_URL;
use crate::storage_types::StorageBackend;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
const DEFAULT_YTDLP_PATH: &str = "yt-dlp";

/// Server-level settings
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub environment: String,
    pub max_body_bytes: usize,
}

/// Settings the ingestion handler itself reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestSettings {
    /// Reference processed when the request carries no url.
    pub default_url: String,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            default_url: DEFAULT_VIDEO_URL.to_string(),
        }
    }
}

/// Full service configuration
#[derive(Clone, Debug)]
pub struct IngestConfig {
    pub base: BaseConfig,
    pub ingest: IngestSettings,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub transcript_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // S3-compatible providers (MinIO etc.)
    pub aws_region: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    // Extraction
    pub ytdlp_path: String,
}

impl IngestConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let base = BaseConfig {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            max_body_bytes: env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
        };

        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse::<StorageBackend>()?,
            Err(_) => StorageBackend::Gcs,
        };

        let ingest = IngestSettings {
            default_url: env::var("DEFAULT_VIDEO_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_VIDEO_URL.to_string()),
        };

        Ok(IngestConfig {
            base,
            ingest,
            storage_backend,
            transcript_bucket: non_empty_var("TRANSCRIPT_BUCKET"),
            s3_region: non_empty_var("S3_REGION"),
            s3_endpoint: non_empty_var("S3_ENDPOINT"),
            aws_region: non_empty_var("AWS_REGION"),
            local_storage_path: non_empty_var("LOCAL_STORAGE_PATH"),
            local_storage_base_url: non_empty_var("LOCAL_STORAGE_BASE_URL"),
            ytdlp_path: env::var("YTDLP_PATH").unwrap_or_else(|_| DEFAULT_YTDLP_PATH.to_string()),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.base.max_body_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_BODY_BYTES cannot be 0"));
        }

        if self.ytdlp_path.trim().is_empty() {
            return Err(anyhow::anyhow!("YTDLP_PATH cannot be empty"));
        }

        match self.storage_backend {
            StorageBackend::Gcs | StorageBackend::S3 => {
                if self.transcript_bucket.is_none() {
                    return Err(anyhow::anyhow!(
                        "TRANSCRIPT_BUCKET must be set when using the {} storage backend",
                        self.storage_backend
                    ));
                }
                if self.storage_backend == StorageBackend::S3
                    && self.s3_region.is_none()
                    && self.aws_region.is_none()
                {
                    return Err(anyhow::anyhow!(
                        "S3_REGION or AWS_REGION must be set when using the s3 storage backend"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set when using the local storage backend"
                    ));
                }
            }
        }

        Ok(())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<IngestConfig>);

impl Config {
    fn inner(&self) -> &IngestConfig {
        &self.0
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = IngestConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.inner().validate()
    }

    pub fn server_port(&self) -> u16 {
        self.inner().base.server_port
    }

    pub fn environment(&self) -> &str {
        &self.inner().base.environment
    }

    pub fn max_body_bytes(&self) -> usize {
        self.inner().base.max_body_bytes
    }

    pub fn ingest_settings(&self) -> &IngestSettings {
        &self.inner().ingest
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.inner().storage_backend
    }

    pub fn transcript_bucket(&self) -> Option<&str> {
        self.inner().transcript_bucket.as_deref()
    }

    pub fn s3_region(&self) -> Option<&str> {
        self.inner().s3_region.as_deref()
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.inner().s3_endpoint.as_deref()
    }

    pub fn aws_region(&self) -> Option<&str> {
        self.inner().aws_region.as_deref()
    }

    pub fn local_storage_path(&self) -> Option<&str> {
        self.inner().local_storage_path.as_deref()
    }

    pub fn local_storage_base_url(&self) -> Option<&str> {
        self.inner().local_storage_base_url.as_deref()
    }

    pub fn ytdlp_path(&self) -> &str {
        &self.inner().ytdlp_path
    }
}

impl From<IngestConfig> for Config {
    fn from(config: IngestConfig) -> Self {
        Config(Box::new(config))
    }
}
