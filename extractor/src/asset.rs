//! Records of images written to disk.

use std::fmt;

/// An image resource that has been written to the output directory.
///
/// Values are created only after their bytes are on disk and are never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedAsset {
    filename: String,
    original_url: Option<String>,
    mime_type: String,
    size_bytes: u64,
}

impl ExtractedAsset {
    /// Create an asset record.
    #[must_use]
    pub fn new(
        filename: impl Into<String>,
        original_url: Option<String>,
        mime_type: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        Self {
            filename: filename.into(),
            original_url,
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    /// Return the final on-disk filename (after collision handling).
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Return the URL the resource was fetched from, as recorded in the
    /// archive.
    #[must_use]
    pub fn original_url(&self) -> Option<&str> {
        self.original_url.as_deref()
    }

    /// Return the declared MIME type.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Return the number of bytes written.
    #[must_use]
    pub const fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

impl fmt::Display for ExtractedAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.filename, self.size_bytes)
    }
}
