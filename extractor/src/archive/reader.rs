//! Web archive decoding.
//!
//! Property list parsing is delegated to the `plist` crate, which accepts
//! both the binary and XML encodings Safari produces. Only the two top-level
//! collections are read; a missing collection decodes as empty.

use super::record::WebResource;
use crate::error::{ExtractorError, Result};
use camino::Utf8Path;
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::{Read, Seek};

/// Trait for reading web archives, enabling test mocking.
#[cfg_attr(test, mockall::automock)]
pub trait ArchiveReader {
    /// Decode the archive stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::Decode`] if the file cannot be opened or
    /// does not hold a web archive dictionary.
    fn read(&self, path: &Utf8Path) -> Result<WebArchive>;
}

/// Production reader backed by the `plist` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlistArchiveReader;

impl ArchiveReader for PlistArchiveReader {
    fn read(&self, path: &Utf8Path) -> Result<WebArchive> {
        WebArchive::open(path)
    }
}

/// The decoded top-level structure of a `.webarchive` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct WebArchive {
    #[serde(
        rename = "WebMainResource",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    main_resource: Option<WebResource>,
    #[serde(rename = "WebSubresources", default)]
    subresources: Vec<WebResource>,
}

impl WebArchive {
    /// Create an archive from an optional main resource and its subresources.
    #[must_use]
    pub fn new(main_resource: Option<WebResource>, subresources: Vec<WebResource>) -> Self {
        Self {
            main_resource,
            subresources,
        }
    }

    /// Decode the archive stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::Decode`] if the file cannot be read or
    /// parsed.
    pub fn open(path: &Utf8Path) -> Result<Self> {
        let archive: Self = plist::from_file(path).map_err(|source| ExtractorError::Decode {
            path: path.to_owned(),
            source,
        })?;
        debug!(
            "decoded {path}: main resource {}, {} subresource(s)",
            if archive.main_resource.is_some() {
                "present"
            } else {
                "absent"
            },
            archive.subresources.len()
        );
        Ok(archive)
    }

    /// Decode an archive from an in-memory or file-backed reader.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`plist::Error`] when the input is not a web
    /// archive property list.
    pub fn from_reader<R: Read + Seek>(reader: R) -> std::result::Result<Self, plist::Error> {
        plist::from_reader(reader)
    }

    /// Return the top-level resource, if the archive has one.
    #[must_use]
    pub fn main_resource(&self) -> Option<&WebResource> {
        self.main_resource.as_ref()
    }

    /// Return the subresources in container order.
    #[must_use]
    pub fn subresources(&self) -> &[WebResource] {
        &self.subresources
    }

    /// Iterate over every resource: the main resource first, then the
    /// subresources in container order.
    pub fn records(&self) -> impl Iterator<Item = &WebResource> {
        self.main_resource.iter().chain(self.subresources.iter())
    }

    /// Return the total number of resources in the archive.
    #[must_use]
    pub fn record_count(&self) -> usize {
        usize::from(self.main_resource.is_some()) + self.subresources.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ArchiveBuilder;
    use rstest::{fixture, rstest};
    use std::io::Cursor;

    #[fixture]
    fn sample_archive() -> WebArchive {
        WebArchive::new(
            Some(WebResource::new(
                "text/html",
                Some(b"<html></html>".to_vec()),
                Some("https://x/".to_owned()),
            )),
            vec![
                WebResource::new("image/png", Some(vec![1; 4]), Some("https://x/a.png".to_owned())),
                WebResource::new("text/css", Some(b"body{}".to_vec()), None),
            ],
        )
    }

    #[rstest]
    fn records_yield_main_resource_first(sample_archive: WebArchive) {
        let mimes: Vec<&str> = sample_archive.records().map(WebResource::mime_type).collect();
        assert_eq!(mimes, vec!["text/html", "image/png", "text/css"]);
        assert_eq!(sample_archive.record_count(), 3);
    }

    #[test]
    fn records_without_main_resource_start_at_first_subresource() {
        let archive = WebArchive::new(None, vec![WebResource::new("image/gif", None, None)]);
        assert_eq!(archive.records().count(), 1);
        assert_eq!(archive.record_count(), 1);
    }

    #[rstest]
    fn binary_plist_round_trips_through_reader(sample_archive: WebArchive) {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let path = ArchiveBuilder::from_archive(sample_archive.clone())
            .write_to(temp_dir.path(), "page.webarchive")
            .expect("write archive");

        let decoded = PlistArchiveReader.read(&path).expect("decode archive");
        assert_eq!(decoded, sample_archive);
    }

    #[test]
    fn missing_collections_decode_as_empty() {
        let mut buffer = Cursor::new(Vec::new());
        plist::to_writer_xml(&mut buffer, &plist::Dictionary::new()).expect("serialize");
        buffer.set_position(0);

        let archive = WebArchive::from_reader(buffer).expect("decode empty dictionary");
        assert!(archive.main_resource().is_none());
        assert!(archive.subresources().is_empty());
    }

    #[test]
    fn unrelated_resource_keys_are_ignored() {
        let mut resource = plist::Dictionary::new();
        resource.insert("WebResourceMIMEType".to_owned(), "image/png".into());
        resource.insert("WebResourceFrameName".to_owned(), "".into());
        resource.insert("WebResourceTextEncodingName".to_owned(), "UTF-8".into());
        let mut root = plist::Dictionary::new();
        root.insert(
            "WebSubresources".to_owned(),
            plist::Value::Array(vec![plist::Value::Dictionary(resource)]),
        );

        let mut buffer = Cursor::new(Vec::new());
        plist::to_writer_xml(&mut buffer, &root).expect("serialize");
        buffer.set_position(0);

        let archive = WebArchive::from_reader(buffer).expect("decode");
        let only = archive.subresources().first().expect("one subresource");
        assert_eq!(only.mime_type(), "image/png");
        assert!(only.data().is_none());
    }

    #[test]
    fn garbage_input_is_a_decode_error() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let path = camino::Utf8PathBuf::from_path_buf(temp_dir.path().join("broken.webarchive"))
            .expect("utf-8 temp path");
        std::fs::write(&path, b"definitely not a property list").expect("write garbage");

        let result = PlistArchiveReader.read(&path);
        assert!(matches!(result, Err(ExtractorError::Decode { .. })));
    }

    #[test]
    fn missing_file_is_a_decode_error() {
        let result = WebArchive::open(Utf8Path::new("/nonexistent/page.webarchive"));
        assert!(matches!(result, Err(ExtractorError::Decode { .. })));
    }
}
