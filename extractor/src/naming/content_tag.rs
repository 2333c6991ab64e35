//! Content-derived filename tag.
//!
//! Resources without a usable URL are named after their bytes. The tag is
//! the first eight lowercase hex characters of the payload's MD5 digest,
//! which keeps names identical to those produced by earlier extraction
//! runs of the same archive.

use md5::{Digest, Md5};
use std::fmt;

/// Number of hex characters kept from the digest.
pub const TAG_HEX_LEN: usize = 8;

/// A short, deterministic fingerprint of a resource payload.
///
/// # Examples
///
/// ```
/// use webarchive_extractor::naming::content_tag::ContentTag;
///
/// let tag = ContentTag::of(b"");
/// assert_eq!(tag.as_str(), "d41d8cd9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentTag(String);

impl ContentTag {
    /// Compute the tag for `data`.
    #[must_use]
    pub fn of(data: &[u8]) -> Self {
        let hex = format!("{:x}", Md5::digest(data));
        Self(hex.chars().take(TAG_HEX_LEN).collect())
    }

    /// Return the tag as a hex string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ContentTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
