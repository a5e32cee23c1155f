//! ytingest Core Library
//!
//! This crate provides the domain models, error types, configuration, and constants
//! shared by the storage, processing, and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{BaseConfig, Config, IngestConfig, IngestSettings};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{IngestRequest, IngestResult, MediaMetadata};
pub use storage_types::StorageBackend;
