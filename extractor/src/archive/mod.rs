//! Archive reading for WebKit `.webarchive` containers.
//!
//! # Sub-modules
//!
//! - [`record`] - A single bundled resource (`WebResource`).
//! - [`reader`] - Container decoding (`WebArchive`, `ArchiveReader`).

pub mod reader;
pub mod record;

pub use reader::{ArchiveReader, PlistArchiveReader, WebArchive};
pub use record::{IMAGE_MIME_PREFIX, WebResource};

#[cfg(test)]
pub use reader::MockArchiveReader;
