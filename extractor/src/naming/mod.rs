//! Output filename policy for extracted resources.
//!
//! Turning an arbitrary, possibly missing URL and a declared MIME type into
//! a safe, unique, traceable filename happens in three steps:
//!
//! 1. [`filename::candidate_filename`] picks a name from the URL or, failing
//!    that, from the payload digest and MIME extension.
//! 2. [`filename::sanitize`] replaces encoded and literal spaces.
//! 3. [`collision::unique_filename`] appends `-1`, `-2`, ... until the name
//!    is free in the output directory.
//!
//! # Sub-modules
//!
//! - [`collision`] - Stem/extension splitting and numbered variants.
//! - [`content_tag`] - MD5-derived payload fingerprint (`ContentTag`).
//! - [`filename`] - URL and content based candidate names.
//! - [`mime`] - MIME type to extension table.

pub mod collision;
pub mod content_tag;
pub mod filename;
pub mod mime;

use camino::{Utf8Path, Utf8PathBuf};

/// Resolve the collision-free destination for a resource payload.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use webarchive_extractor::naming::resolve_destination;
///
/// let dir = Utf8Path::new("/nonexistent/output");
/// let path = resolve_destination(dir, Some("https://x/a.png"), b"png", "image/png");
/// assert_eq!(path, dir.join("a.png"));
/// ```
#[must_use]
pub fn resolve_destination(
    dir: &Utf8Path,
    url: Option<&str>,
    data: &[u8],
    mime_type: &str,
) -> Utf8PathBuf {
    let candidate = filename::candidate_filename(url, data, mime_type);
    collision::unique_path(dir, &candidate)
}
