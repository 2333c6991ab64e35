//! Web archive image extractor library.
//!
//! This crate recovers the images embedded in a WebKit `.webarchive`
//! snapshot. Every image resource is written to an output directory under a
//! readable, collision-free filename, and a `_image-list.txt` manifest maps
//! each file back to its source URL. It backs the `webarchive-extractor`
//! CLI binary and can be driven programmatically through
//! [`pipeline::run_extraction`].
//!
//! # Modules
//!
//! - [`archive`] - Property list decoding of the archive container
//! - [`asset`] - Records of images written to disk
//! - [`cli`] - Command-line argument definitions
//! - [`config`] - Layered run configuration
//! - [`error`] - Error types for decoding and writing
//! - [`extractor`] - Image filtering and payload writing
//! - [`manifest`] - The `_image-list.txt` manifest
//! - [`naming`] - Output filename policy
//! - [`output`] - Progress and summary formatting
//! - [`pipeline`] - End-to-end extraction orchestration

pub mod archive;
pub mod asset;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod pipeline;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
