//! CLI argument definitions for the web archive extractor.
//!
//! Parsing is kept apart from the binary entrypoint so the resolution of
//! arguments into an [`ExtractConfig`] can be tested without a process.

use crate::config::ExtractConfig;
use crate::error::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use log::LevelFilter;

/// Extract embedded images from a WebKit `.webarchive` file.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "webarchive-extractor")]
#[command(version, about)]
#[command(long_about = concat!(
    "Extract embedded images from a WebKit .webarchive file.\n\n",
    "Every resource whose MIME type starts with image/ is written verbatim to ",
    "the output directory. Files are named after their source URL when it ends ",
    "in a filename, otherwise after a short content digest. Existing files are ",
    "never overwritten; clashing names get a -1, -2, ... suffix.\n\n",
    "A _image-list.txt manifest maps each written file to its source URL, MIME ",
    "type, and size.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Extract from the default archive into the default directory:\n",
    "    $ webarchive-extractor\n\n",
    "  Extract a specific archive:\n",
    "    $ webarchive-extractor snapshot.webarchive -o images\n\n",
    "  Read settings from a file:\n",
    "    $ webarchive-extractor --config extract.toml\n",
))]
pub struct Cli {
    /// Path to the .webarchive file [default: from config or built-in].
    #[arg(value_name = "ARCHIVE")]
    pub archive: Option<Utf8PathBuf>,

    /// Directory to write images into [default: from config or built-in].
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<Utf8PathBuf>,

    /// TOML file supplying `archive_path` and `output_dir`.
    #[arg(long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Increase log verbosity (repeatable: -v, -vv, -vvv).
    #[arg(
        short,
        long = "verbose",
        action = clap::ArgAction::Count,
        conflicts_with = "quiet"
    )]
    pub verbosity: u8,

    /// Suppress progress output (errors still shown).
    #[arg(short, long, conflicts_with = "verbosity")]
    pub quiet: bool,
}

impl Cli {
    /// Resolve the run configuration.
    ///
    /// Built-in defaults are overlaid by the `--config` file, if given, and
    /// then by the positional archive and `--output-dir`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ExtractorError::Config`] if the configuration
    /// file cannot be loaded.
    pub fn resolve_config(&self) -> Result<ExtractConfig> {
        let base = match &self.config {
            Some(path) => ExtractConfig::load(path)?,
            None => ExtractConfig::default(),
        };
        Ok(base.with_overrides(self.archive.clone(), self.output_dir.clone()))
    }

    /// Return the default log level implied by `-q` and `-v` flags.
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
