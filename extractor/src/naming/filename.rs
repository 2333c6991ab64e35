//! Candidate filename resolution.
//!
//! A resource is named after the last path segment of its source URL when
//! that segment looks like a filename (non-empty and containing a `.`).
//! Otherwise the name is derived from the payload: `image-<tag><ext>`.
//! The chosen name is then passed through [`sanitize`].

use super::content_tag::ContentTag;
use super::mime::extension_for;
use log::debug;

/// Prefix for names derived from resource content.
const CONTENT_NAME_PREFIX: &str = "image-";

/// Return the candidate filename for a resource before collision handling.
///
/// # Examples
///
/// ```
/// use webarchive_extractor::naming::filename::candidate_filename;
///
/// let name = candidate_filename(Some("https://x/b%20c.gif?v=2"), b"GIF89a", "image/gif");
/// assert_eq!(name, "b-c.gif");
///
/// let fallback = candidate_filename(None, b"", "image/png");
/// assert_eq!(fallback, "image-d41d8cd9.png");
/// ```
#[must_use]
pub fn candidate_filename(url: Option<&str>, data: &[u8], mime_type: &str) -> String {
    let name = url
        .and_then(url_filename)
        .map_or_else(|| content_filename(data, mime_type), str::to_owned);
    sanitize(&name)
}

/// Extract a usable filename from a URL.
///
/// The query string is dropped before taking the text after the last `/`.
/// Returns `None` when that segment is empty or has no `.`.
#[must_use]
pub fn url_filename(url: &str) -> Option<&str> {
    let without_query = url.split_once('?').map_or(url, |(path, _)| path);
    let segment = without_query
        .rsplit_once('/')
        .map_or(without_query, |(_, last)| last);

    if segment.contains('.') {
        Some(segment)
    } else {
        debug!("URL {url} has no usable filename; naming by content");
        None
    }
}

/// Build the content-derived name `image-<tag><ext>`.
#[must_use]
pub fn content_filename(data: &[u8], mime_type: &str) -> String {
    format!(
        "{CONTENT_NAME_PREFIX}{}{}",
        ContentTag::of(data),
        extension_for(mime_type)
    )
}

/// Replace `%20` sequences and spaces with hyphens.
///
/// No other characters are altered.
#[must_use]
pub fn sanitize(name: &str) -> String {
    name.replace("%20", "-").replace(' ', "-")
}
