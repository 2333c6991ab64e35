//! The extracted-image manifest (`_image-list.txt`).
//!
//! The labels below are consumed by existing tooling and must not change,
//! including the German `Datei` and `Größe` tokens.

use crate::asset::ExtractedAsset;
use crate::error::{ExtractorError, Result};
use crate::output::RULE_WIDTH;
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use std::fs;

/// Fixed filename of the manifest inside the output directory.
pub const MANIFEST_FILENAME: &str = "_image-list.txt";

/// Title line at the top of the manifest.
const MANIFEST_TITLE: &str = "Extrahierte Bilder aus webarchive";

/// Marker written when an asset has no source URL.
pub const ABSENT_URL_MARKER: &str = "(none)";

/// Render the manifest text for `assets` in the given order.
///
/// # Examples
///
/// ```
/// use webarchive_extractor::asset::ExtractedAsset;
/// use webarchive_extractor::manifest::render_manifest;
///
/// let assets = vec![ExtractedAsset::new("a.png", None, "image/png", 10)];
/// let text = render_manifest(&assets);
/// assert!(text.contains("Datei: a.png\n"));
/// assert!(text.contains("Original URL: (none)\n"));
/// ```
#[must_use]
pub fn render_manifest(assets: &[ExtractedAsset]) -> String {
    let mut text = String::new();
    text.push_str(MANIFEST_TITLE);
    text.push('\n');
    text.push_str(&"=".repeat(RULE_WIDTH));
    text.push_str("\n\n");

    let separator = "-".repeat(RULE_WIDTH);
    for asset in assets {
        text.push_str(&format!(
            "Datei: {}\nOriginal URL: {}\nMIME Type: {}\nGröße: {} bytes\n{separator}\n",
            asset.filename(),
            asset.original_url().unwrap_or(ABSENT_URL_MARKER),
            asset.mime_type(),
            asset.size_bytes(),
        ));
    }

    text
}

/// Write the manifest for `assets` into `output_dir`.
///
/// Returns the manifest path, or `None` when `assets` is empty and no file
/// was written.
///
/// # Errors
///
/// Returns [`ExtractorError::Write`] if the manifest cannot be written.
pub fn write_manifest(assets: &[ExtractedAsset], output_dir: &Utf8Path) -> Result<Option<Utf8PathBuf>> {
    if assets.is_empty() {
        debug!("no images extracted; skipping {MANIFEST_FILENAME}");
        return Ok(None);
    }

    let path = output_dir.join(MANIFEST_FILENAME);
    fs::write(&path, render_manifest(assets)).map_err(|e| ExtractorError::write(path.clone(), e))?;
    debug!("wrote manifest with {} entries to {path}", assets.len());
    Ok(Some(path))
}
