//! MIME type to file extension mapping.

/// Extension used for image subtypes missing from [`EXTENSION_TABLE`].
pub const FALLBACK_EXTENSION: &str = ".bin";

/// Known image MIME types and the extension written for each.
///
/// Matching is exact; parameters such as `; charset=` are not stripped.
pub const EXTENSION_TABLE: &[(&str, &str)] = &[
    ("image/jpeg", ".jpg"),
    ("image/jpg", ".jpg"),
    ("image/png", ".png"),
    ("image/gif", ".gif"),
    ("image/svg+xml", ".svg"),
    ("image/webp", ".webp"),
];

/// Return the file extension (with leading dot) for an image MIME type.
///
/// # Examples
///
/// ```
/// use webarchive_extractor::naming::mime::extension_for;
///
/// assert_eq!(extension_for("image/jpeg"), ".jpg");
/// assert_eq!(extension_for("image/avif"), ".bin");
/// ```
#[must_use]
pub fn extension_for(mime_type: &str) -> &'static str {
    EXTENSION_TABLE
        .iter()
        .find(|(mime, _)| *mime == mime_type)
        .map_or(FALLBACK_EXTENSION, |&(_, ext)| ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::jpeg("image/jpeg", ".jpg")]
    #[case::jpg_alias("image/jpg", ".jpg")]
    #[case::png("image/png", ".png")]
    #[case::gif("image/gif", ".gif")]
    #[case::svg("image/svg+xml", ".svg")]
    #[case::webp("image/webp", ".webp")]
    fn known_types_use_table_extension(#[case] mime: &str, #[case] expected: &str) {
        assert_eq!(extension_for(mime), expected);
    }

    #[rstest]
    #[case::icon("image/x-icon")]
    #[case::avif("image/avif")]
    #[case::bare_prefix("image/")]
    #[case::uppercase("image/PNG")]
    fn unlisted_types_fall_back_to_bin(#[case] mime: &str) {
        assert_eq!(extension_for(mime), FALLBACK_EXTENSION);
    }
}
