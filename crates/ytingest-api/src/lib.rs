//! ytingest API Library
//!
//! This crate provides the ingestion handler, its HTTP surface, and application setup.

pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
mod telemetry;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use services::ingest::ingest;
pub use state::AppState;
