//! Canonical file names derived from tags
//!
//! A fully tagged file lands at
//! `{base}/{albumartist}/{album}/{track:02}-{artist}-{title}{ext}`, where
//! every tag component is passed through [`slugify`].

mod error;
mod fold;
mod slug;

pub use error::NamingError;
pub use fold::{fold, transliterate};
pub use slug::slugify;

use std::path::{Path, PathBuf};

use crate::discovery::normalize_path;
use crate::tags::{CORE_TAGS, TagAccessor, TagCodec, TagSet};

/// Core tags that are absent or empty, in [`CORE_TAGS`] order
#[must_use]
pub fn missing_core_tags(tags: &TagSet) -> Vec<&'static str> {
    CORE_TAGS
        .into_iter()
        .filter(|field| !tags.has_value(field))
        .collect()
}

/// Parse the number in front of an optional `/total` suffix ("3/12" → 3)
#[must_use]
pub fn parse_track_number(raw: &str) -> Option<u32> {
    raw.split('/').next()?.trim().parse().ok()
}

/// Compute the destination of `source` from its tags.
///
/// The source extension is kept verbatim, including its case.
///
/// # Errors
/// Returns `NamingError::MissingCoreTags` if a core tag is absent or empty,
/// and `NamingError::MalformedTrackNumber` if TRACKNUMBER is not numeric.
pub fn derive_path(
    source: &Path,
    tags: &TagSet,
    base_dir: &Path,
) -> Result<PathBuf, NamingError> {
    let missing = missing_core_tags(tags);
    if !missing.is_empty() {
        return Err(NamingError::MissingCoreTags {
            path: source.to_path_buf(),
            missing,
        });
    }

    let slug_of = |field: &str| slugify(tags.first(field).unwrap_or_default());

    let raw_track = tags.first("TRACKNUMBER").unwrap_or_default();
    let track = parse_track_number(raw_track).ok_or_else(|| NamingError::MalformedTrackNumber {
        path: source.to_path_buf(),
        value: raw_track.to_string(),
    })?;

    let extension = source
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    let file_name = format!(
        "{track:02}-{}-{}{extension}",
        slug_of("ARTIST"),
        slug_of("TITLE")
    );
    let directory = base_dir
        .join(slug_of("ALBUMARTIST"))
        .join(slug_of("ALBUM"));

    Ok(normalize_path(&directory.join(file_name)))
}

/// Read a file's tags and compute its destination
///
/// # Errors
/// Same as [`derive_path`]. An unreadable file has no tags and therefore
/// fails with `MissingCoreTags`.
pub fn derive_for<C: TagCodec>(
    accessor: &TagAccessor<C>,
    source: &Path,
    base_dir: &Path,
) -> Result<PathBuf, NamingError> {
    derive_path(source, &accessor.read(source), base_dir)
}
