//! ytingest Storage Library
//!
//! This crate provides the storage abstraction the ingestion handler writes
//! metadata documents through, with Google Cloud Storage, S3 and local
//! filesystem implementations.
//!
//! # Storage key format
//!
//! Keys are flat object names, `<video-id>.json`. Keys must not contain a `..` segment
//! or a leading `/`; every backend rejects them with `StorageError::InvalidKey`.

pub mod factory;
#[cfg(feature = "storage-gcs")]
pub mod gcs;
pub(crate) mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(any(feature = "storage-gcs", feature = "storage-s3"))]
pub(crate) mod object;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-gcs")]
pub use gcs::GcsStorage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
pub use ytingest_core::StorageBackend;
