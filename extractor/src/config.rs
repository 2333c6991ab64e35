//! Extraction configuration.
//!
//! A run needs two settings: where the archive lives and where images go.
//! Values are layered, lowest precedence first: built-in defaults, an
//! optional TOML file, then command-line arguments.
//!
//! ```toml
//! archive_path = "snapshots/site.webarchive"
//! output_dir = "assets/images/extracted"
//! ```

use crate::error::{ExtractorError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use serde::Deserialize;

/// Archive read when no path is configured.
pub const DEFAULT_ARCHIVE_PATH: &str = "limegreen-monkey-750690.hostingersite.com.webarchive";

/// Directory written when no output directory is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "redesign/assets/images/extracted";

/// Settings for a single extraction run.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractConfig {
    /// Location of the `.webarchive` file to read.
    pub archive_path: Utf8PathBuf,
    /// Destination directory, created recursively when absent.
    pub output_dir: Utf8PathBuf,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            archive_path: Utf8PathBuf::from(DEFAULT_ARCHIVE_PATH),
            output_dir: Utf8PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl ExtractConfig {
    /// Load configuration from a TOML file.
    ///
    /// Keys missing from the file keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::Config`] if the file cannot be read, is
    /// not valid TOML, or contains unknown keys.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ExtractorError::Config {
            path: path.to_owned(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&raw, path)?;
        debug!("loaded configuration from {path}");
        Ok(config)
    }

    /// Parse configuration from TOML text; `origin` is used in errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use webarchive_extractor::config::ExtractConfig;
    ///
    /// let config = ExtractConfig::from_toml_str("output_dir = \"out\"", Utf8Path::new("x.toml"))
    ///     .expect("valid configuration");
    /// assert_eq!(config.output_dir, "out");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::Config`] on malformed TOML or unknown keys.
    pub fn from_toml_str(raw: &str, origin: &Utf8Path) -> Result<Self> {
        toml::from_str(raw).map_err(|e| ExtractorError::Config {
            path: origin.to_owned(),
            reason: e.message().to_owned(),
        })
    }

    /// Apply command-line overrides on top of this configuration.
    #[must_use]
    pub fn with_overrides(
        self,
        archive_path: Option<Utf8PathBuf>,
        output_dir: Option<Utf8PathBuf>,
    ) -> Self {
        Self {
            archive_path: archive_path.unwrap_or(self.archive_path),
            output_dir: output_dir.unwrap_or(self.output_dir),
        }
    }
}
