//! Error types for the web-archive extractor.
//!
//! A run either fails while decoding the container (nothing has been
//! written yet) or while writing output (files written so far stay in
//! place). Records that are not images, lack a
//! payload, or carry an unusable URL are skipped and never surface here.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting images from a web archive.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// The container could not be opened or parsed as a web archive.
    #[error("failed to decode web archive {path}: {source}")]
    Decode {
        /// Path of the archive that failed to decode.
        path: Utf8PathBuf,
        /// The underlying property list error.
        #[source]
        source: plist::Error,
    },

    /// An image, the manifest, or the output directory could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Destination that could not be written.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be read or parsed.
    #[error("invalid configuration file {path}: {reason}")]
    Config {
        /// Path to the configuration file.
        path: Utf8PathBuf,
        /// Description of the read or parse failure.
        reason: String,
    },

    /// Progress output could not be written to the terminal.
    #[error("failed to write progress output")]
    Progress {
        /// The underlying error that caused the write to fail.
        #[source]
        source: std::io::Error,
    },
}

impl ExtractorError {
    /// Build a [`ExtractorError::Write`] for the given destination.
    pub(crate) fn write(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using [`ExtractorError`].
pub type Result<T> = std::result::Result<T, ExtractorError>;
