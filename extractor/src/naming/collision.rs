//! Collision-free destination paths.
//!
//! Uniqueness is checked against the live filesystem rather than an
//! in-memory set, so files left by earlier runs are never overwritten.
//! The manifest filename is always treated as taken, since the manifest is
//! written after the images.

use crate::manifest::MANIFEST_FILENAME;
use camino::{Utf8Path, Utf8PathBuf};
use log::trace;

/// Split a filename into stem and extension.
///
/// The extension includes its leading dot and is empty when the name has
/// none. Leading dots do not start an extension, so `.hidden` has no
/// extension.
///
/// # Examples
///
/// ```
/// use webarchive_extractor::naming::collision::split_extension;
///
/// assert_eq!(split_extension("photo.tar.gz"), ("photo.tar", ".gz"));
/// assert_eq!(split_extension(".hidden"), (".hidden", ""));
/// assert_eq!(split_extension("README"), ("README", ""));
/// ```
#[must_use]
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(index) if name[..index].chars().any(|c| c != '.') => name.split_at(index),
        _ => (name, ""),
    }
}

/// Return the `attempt`-th alternative for `candidate`.
///
/// `b.gif` becomes `b-1.gif`, `b-2.gif`, and so on.
#[must_use]
pub fn numbered_variant(candidate: &str, attempt: u32) -> String {
    let (stem, extension) = split_extension(candidate);
    format!("{stem}-{attempt}{extension}")
}

/// Return the first name derived from `candidate` that does not exist in
/// `dir`.
///
/// The candidate itself is tried first, then numbered variants in order.
#[must_use]
pub fn unique_filename(dir: &Utf8Path, candidate: &str) -> String {
    if !is_taken(dir, candidate) {
        return candidate.to_owned();
    }

    let mut attempt = 1;
    loop {
        let variant = numbered_variant(candidate, attempt);
        if !is_taken(dir, &variant) {
            trace!("{candidate} exists in {dir}; using {variant}");
            return variant;
        }
        attempt += 1;
    }
}

/// Return true when `name` is reserved or already present in `dir`.
fn is_taken(dir: &Utf8Path, name: &str) -> bool {
    name == MANIFEST_FILENAME || dir.join(name).exists()
}

/// Return the full collision-free destination path for `candidate`.
#[must_use]
pub fn unique_path(dir: &Utf8Path, candidate: &str) -> Utf8PathBuf {
    dir.join(unique_filename(dir, candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn scratch_dir() -> (TempDir, Utf8PathBuf) {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).expect("utf-8 path");
        (temp_dir, path)
    }

    #[rstest]
    #[case::simple("b.gif", ("b", ".gif"))]
    #[case::double_extension("a.tar.gz", ("a.tar", ".gz"))]
    #[case::no_extension("image", ("image", ""))]
    #[case::leading_dot(".png", (".png", ""))]
    #[case::leading_dots_then_ext("..a.png", ("..a", ".png"))]
    #[case::only_dots("...", ("...", ""))]
    #[case::trailing_dot("name.", ("name", "."))]
    fn split_extension_follows_last_dot(#[case] name: &str, #[case] expected: (&str, &str)) {
        assert_eq!(split_extension(name), expected);
    }

    #[rstest]
    #[case::first("b.gif", 1, "b-1.gif")]
    #[case::tenth("image-deadbeef.jpg", 10, "image-deadbeef-10.jpg")]
    #[case::no_extension(".htaccess", 2, ".htaccess-2")]
    fn numbered_variant_inserts_counter_before_extension(
        #[case] candidate: &str,
        #[case] attempt: u32,
        #[case] expected: &str,
    ) {
        assert_eq!(numbered_variant(candidate, attempt), expected);
    }

    #[rstest]
    fn free_candidate_is_kept(scratch_dir: (TempDir, Utf8PathBuf)) {
        let (_guard, dir) = scratch_dir;
        assert_eq!(unique_filename(&dir, "a.png"), "a.png");
    }

    #[rstest]
    fn existing_files_push_counter_forward(scratch_dir: (TempDir, Utf8PathBuf)) {
        let (_guard, dir) = scratch_dir;
        std::fs::write(dir.join("b.gif"), b"first").expect("seed b.gif");
        std::fs::write(dir.join("b-1.gif"), b"second").expect("seed b-1.gif");

        assert_eq!(unique_filename(&dir, "b.gif"), "b-2.gif");
        assert_eq!(unique_path(&dir, "b.gif"), dir.join("b-2.gif"));
    }

    #[rstest]
    fn manifest_name_is_reserved(scratch_dir: (TempDir, Utf8PathBuf)) {
        let (_guard, dir) = scratch_dir;
        assert_eq!(unique_filename(&dir, MANIFEST_FILENAME), "_image-list-1.txt");
    }

    #[rstest]
    fn gaps_in_numbering_are_reused(scratch_dir: (TempDir, Utf8PathBuf)) {
        let (_guard, dir) = scratch_dir;
        std::fs::write(dir.join("b.gif"), b"first").expect("seed b.gif");
        std::fs::write(dir.join("b-2.gif"), b"third").expect("seed b-2.gif");

        assert_eq!(unique_filename(&dir, "b.gif"), "b-1.gif");
    }
}
