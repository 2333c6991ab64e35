//! Image resource extraction.
//!
//! Walks decoded records in order, keeps the ones that are images with a
//! payload, writes each payload verbatim under a collision-free name, and
//! returns the resulting [`ExtractedAsset`] list in write order.

use crate::archive::WebResource;
use crate::asset::ExtractedAsset;
use crate::error::{ExtractorError, Result};
use crate::naming::resolve_destination;
use crate::output::{progress_line, write_line};
use camino::Utf8Path;
use log::{debug, info};
use std::fs;
use std::io::Write;

/// Extract every image record into `output_dir`.
///
/// Records that are not images, or that carry no payload, are skipped.
/// A progress line is written to `progress` after each file.
///
/// The directory must already exist; see
/// [`crate::pipeline::run_extraction`] for the full run that creates it.
///
/// # Errors
///
/// Returns [`ExtractorError::Write`] as soon as a file cannot be written;
/// files written earlier in the run are left in place.
/// Returns [`ExtractorError::Progress`] if the progress sink fails.
pub fn extract<'a, I>(
    records: I,
    output_dir: &Utf8Path,
    progress: &mut dyn Write,
) -> Result<Vec<ExtractedAsset>>
where
    I: IntoIterator<Item = &'a WebResource>,
{
    let mut assets = Vec::new();

    for record in records {
        let Some(data) = image_payload(record) else {
            continue;
        };

        let asset = write_asset(record, data, output_dir)?;
        info!("wrote {} to {output_dir}", asset);
        write_line(progress, progress_line(&asset))?;
        assets.push(asset);
    }

    Ok(assets)
}

/// Return the payload of an image record, or `None` when it is skipped.
fn image_payload(record: &WebResource) -> Option<&[u8]> {
    if !record.is_image() {
        debug!(
            "skipping {} resource {}",
            display_mime(record.mime_type()),
            record.url().unwrap_or("without URL")
        );
        return None;
    }

    let data = record.data();
    if data.is_none() {
        debug!(
            "skipping {} resource {}: no data",
            record.mime_type(),
            record.url().unwrap_or("without URL")
        );
    }
    data
}

fn write_asset(record: &WebResource, data: &[u8], output_dir: &Utf8Path) -> Result<ExtractedAsset> {
    let destination = resolve_destination(output_dir, record.url(), data, record.mime_type());
    fs::write(&destination, data).map_err(|e| ExtractorError::write(destination.clone(), e))?;

    let filename = destination.file_name().unwrap_or(destination.as_str());
    Ok(ExtractedAsset::new(
        filename,
        record.url().map(str::to_owned),
        record.mime_type(),
        u64::try_from(data.len()).unwrap_or(u64::MAX),
    ))
}

fn display_mime(mime: &str) -> &str {
    if mime.is_empty() { "untyped" } else { mime }
}
