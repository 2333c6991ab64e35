//! Fixture helpers for building synthetic web archives in tests.
//!
//! Available to unit tests and, through the `test-support` feature, to
//! integration tests.

use crate::archive::{WebArchive, WebResource};
use camino::Utf8PathBuf;
use std::io;
use std::path::Path;

/// Builder for `.webarchive` property lists written to disk.
///
/// # Examples
///
/// ```ignore
/// let path = ArchiveBuilder::new()
///     .subresource(WebResource::new("image/png", Some(vec![0; 10]), None))
///     .write_to(temp_dir.path(), "page.webarchive")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArchiveBuilder {
    main_resource: Option<WebResource>,
    subresources: Vec<WebResource>,
}

impl ArchiveBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder with the contents of an existing archive.
    #[must_use]
    pub fn from_archive(archive: WebArchive) -> Self {
        Self {
            main_resource: archive.main_resource().cloned(),
            subresources: archive.subresources().to_vec(),
        }
    }

    /// Set the main resource.
    #[must_use]
    pub fn main_resource(mut self, resource: WebResource) -> Self {
        self.main_resource = Some(resource);
        self
    }

    /// Append a subresource.
    #[must_use]
    pub fn subresource(mut self, resource: WebResource) -> Self {
        self.subresources.push(resource);
        self
    }

    /// Return the archive assembled so far.
    #[must_use]
    pub fn build(self) -> WebArchive {
        WebArchive::new(self.main_resource, self.subresources)
    }

    /// Serialise the archive as a binary property list at `dir/name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not UTF-8 or the file cannot be
    /// written.
    pub fn write_to(self, dir: &Path, name: &str) -> io::Result<Utf8PathBuf> {
        let path = Utf8PathBuf::from_path_buf(dir.join(name)).map_err(|path| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("non UTF-8 path: {}", path.display()),
            )
        })?;
        plist::to_file_binary(&path, &self.build()).map_err(io::Error::other)?;
        Ok(path)
    }
}
