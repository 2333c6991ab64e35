//! Output formatting for the extractor CLI.
//!
//! Progress and summary text is for people, not scripts; the manifest is
//! the machine-readable record of a run.

use crate::asset::ExtractedAsset;
use crate::error::{ExtractorError, Result};
use camino::Utf8Path;
use std::io::Write;

/// Width of the rule lines used in the summary and the manifest.
pub const RULE_WIDTH: usize = 60;

/// Format the per-asset progress line.
#[must_use]
pub fn progress_line(asset: &ExtractedAsset) -> String {
    format!("Extracted: {asset}")
}

/// Format the line announcing how many subresources the archive holds.
#[must_use]
pub fn subresource_count_line(count: usize) -> String {
    let plural = if count == 1 { "subresource" } else { "subresources" };
    format!("Found {count} {plural}")
}

/// Format the closing summary block.
///
/// # Example
///
/// ```
/// use camino::Utf8Path;
/// use webarchive_extractor::output::summary_text;
///
/// let text = summary_text(3, Utf8Path::new("out/images"), None);
/// assert!(text.contains("Extracted 3 images"));
/// assert!(text.contains("out/images"));
/// ```
#[must_use]
pub fn summary_text(count: usize, output_dir: &Utf8Path, manifest: Option<&Utf8Path>) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let plural = if count == 1 { "image" } else { "images" };
    let mut lines = vec![
        String::new(),
        rule.clone(),
        "Extraction complete".to_owned(),
        rule,
        format!("Extracted {count} {plural}"),
        format!("Destination: {output_dir}"),
    ];

    if let Some(path) = manifest {
        lines.push(String::new());
        lines.push(format!("Image list saved: {path}"));
    }

    lines.join("\n")
}

/// Write one line to a progress sink, mapping failures to
/// [`ExtractorError::Progress`].
///
/// # Errors
///
/// Returns an error if the sink rejects the write.
pub fn write_line(sink: &mut dyn Write, message: impl std::fmt::Display) -> Result<()> {
    writeln!(sink, "{message}").map_err(|source| ExtractorError::Progress { source })
}
