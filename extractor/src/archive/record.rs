//! Resource records decoded from a web archive.
//!
//! A `.webarchive` is a property list dictionary. Each resource is itself a
//! dictionary keyed by `WebResource*` names; only the MIME type, payload,
//! and source URL matter for extraction, so every other key is ignored.

use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;

/// MIME type prefix shared by every image resource.
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// A single resource bundled in a web archive.
///
/// # Examples
///
/// ```
/// use webarchive_extractor::archive::WebResource;
///
/// let resource = WebResource::new("image/png", Some(vec![1, 2, 3]), None);
/// assert!(resource.is_image());
/// assert_eq!(resource.data(), Some(&[1, 2, 3][..]));
/// assert!(resource.url().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct WebResource {
    #[serde(rename = "WebResourceMIMEType", default)]
    mime_type: String,
    #[serde(
        rename = "WebResourceData",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    data: Option<ByteBuf>,
    #[serde(
        rename = "WebResourceURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    url: Option<String>,
}

impl WebResource {
    /// Create a resource from its MIME type, payload, and source URL.
    #[must_use]
    pub fn new(mime_type: impl Into<String>, data: Option<Vec<u8>>, url: Option<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.map(ByteBuf::from),
            url,
        }
    }

    /// Return the declared MIME type (empty when the archive omits it).
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Return the raw payload, if the archive carries one.
    #[must_use]
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref().map(Vec::as_slice)
    }

    /// Return the URL the resource was originally fetched from.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Return true when the MIME type declares an image.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with(IMAGE_MIME_PREFIX)
    }
}
