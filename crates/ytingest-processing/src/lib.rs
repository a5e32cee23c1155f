//! ytingest Processing Library
//!
//! Metadata extraction: the `MetadataExtractor` capability and its `yt-dlp`
//! process implementation.

pub mod traits;
pub mod ytdlp;

pub use traits::{ExtractionError, MetadataExtractor};
pub use ytdlp::YtDlpExtractor;
