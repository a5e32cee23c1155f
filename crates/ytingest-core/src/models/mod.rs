//! Data models for the ingestion pipeline
//!
//! One module per lifecycle stage: the inbound request, the extracted metadata
//! document, and the result handed back to the trigger.

mod metadata;
mod request;
mod result;

pub use metadata::*;
pub use request::*;
pub use result::*;
