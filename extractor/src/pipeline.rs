//! Extraction pipeline orchestration.
//!
//! Decodes the archive, prepares the output directory, extracts images, and
//! writes the manifest. Decoding runs before anything touches the
//! filesystem, so a corrupt archive leaves no trace.

use crate::archive::ArchiveReader;
use crate::asset::ExtractedAsset;
use crate::config::ExtractConfig;
use crate::error::{ExtractorError, Result};
use crate::extractor::extract;
use crate::manifest::write_manifest;
use crate::output::{subresource_count_line, write_line};
use camino::{Utf8Path, Utf8PathBuf};
use log::info;
use std::fs;
use std::io::Write;

/// Outcome of a completed extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Assets written, in extraction order.
    pub assets: Vec<ExtractedAsset>,
    /// Directory the assets were written to.
    pub output_dir: Utf8PathBuf,
    /// Path of the manifest, or `None` when nothing was extracted.
    pub manifest_path: Option<Utf8PathBuf>,
    /// Number of resources the archive contained, main resource included.
    pub records_seen: usize,
}

impl ExtractionReport {
    /// Return the number of images written.
    #[must_use]
    pub fn extracted_count(&self) -> usize {
        self.assets.len()
    }

    /// Return the number of resources that were not extracted.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.records_seen.saturating_sub(self.assets.len())
    }
}

/// Run a full extraction described by `config`.
///
/// Progress lines are written to `progress` as the run advances.
///
/// # Errors
///
/// Returns [`ExtractorError::Decode`] before any write if the archive
/// cannot be decoded, and [`ExtractorError::Write`] if the output directory,
/// an image, or the manifest cannot be written.
pub fn run_extraction(
    config: &ExtractConfig,
    reader: &dyn ArchiveReader,
    progress: &mut dyn Write,
) -> Result<ExtractionReport> {
    let archive = reader.read(&config.archive_path)?;
    info!(
        "read {} resource(s) from {}",
        archive.record_count(),
        config.archive_path
    );

    prepare_output_dir(&config.output_dir)?;

    let mut assets = extract(archive.main_resource(), &config.output_dir, progress)?;

    write_line(progress, "")?;
    write_line(progress, subresource_count_line(archive.subresources().len()))?;
    assets.extend(extract(archive.subresources(), &config.output_dir, progress)?);

    let manifest_path = write_manifest(&assets, &config.output_dir)?;

    Ok(ExtractionReport {
        assets,
        output_dir: config.output_dir.clone(),
        manifest_path,
        records_seen: archive.record_count(),
    })
}

/// Create the output directory and any missing parents.
///
/// # Errors
///
/// Returns [`ExtractorError::Write`] if the directory cannot be created.
pub fn prepare_output_dir(output_dir: &Utf8Path) -> Result<()> {
    fs::create_dir_all(output_dir).map_err(|e| ExtractorError::write(output_dir, e))
}
