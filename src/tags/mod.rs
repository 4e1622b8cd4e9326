//! Tag sets and per-file tag access
//!
//! A [`TagSet`] is the in-memory view of one file's embedded metadata: a map
//! from upper-cased field name to an ordered list of values. Reading and
//! persisting goes through a [`TagCodec`]; [`TagAccessor`] layers the
//! read/write/delete/cleanup/wipeout operations on top of it.

mod accessor;
mod codec;
mod error;
mod id3;
mod vorbis;

pub use accessor::{CleanupReport, TagAccessor};
pub use codec::{AudioProperties, LoadedFile, LoftyCodec, TagCodec};
pub use error::TagError;

use std::collections::BTreeMap;

/// Fields that must be present and non-empty to derive a file name
pub const CORE_TAGS: [&str; 5] = ["ARTIST", "ALBUMARTIST", "ALBUM", "TITLE", "TRACKNUMBER"];

/// Fields kept by the cleanup operation; everything else is removed
pub const CLEAN_TAGS: [&str; 16] = [
    "ARTIST",
    "ALBUMARTIST",
    "ALBUM",
    "DISCNUMBER",
    "DISCTOTAL",
    "ORGANIZATION",
    "TRACKNUMBER",
    "TRACKTOTAL",
    "TITLE",
    "DATE",
    "BPM",
    "GENRE",
    "STYLE",
    "CATALOGNUMBER",
    "PUBLISHER",
    "LABEL",
];

/// Computed fields added to every tag set returned by [`TagAccessor::read`]
pub const TECHNICAL_FIELDS: [&str; 5] = ["PATH", "SAMPLERATE", "LENGTH", "BITRATE", "CHANNELS"];

/// Field name to ordered values, keys stored upper-cased
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    fields: BTreeMap<String, Vec<String>>,
}

impl TagSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All values of a field
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(&field.to_uppercase()).map(Vec::as_slice)
    }

    /// First value of a field
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// True if the field's first value exists and is not empty.
    ///
    /// An empty string is treated exactly like a missing field.
    #[must_use]
    pub fn has_value(&self, field: &str) -> bool {
        self.first(field).is_some_and(|v| !v.is_empty())
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(&field.to_uppercase())
    }

    /// Replace a field's values
    pub fn set(&mut self, field: &str, values: Vec<String>) {
        self.fields.insert(field.to_uppercase(), values);
    }

    /// Replace a field with a single value
    pub fn set_single(&mut self, field: &str, value: impl Into<String>) {
        self.set(field, vec![value.into()]);
    }

    /// Append one value to a field, creating it if needed
    pub fn push(&mut self, field: &str, value: impl Into<String>) {
        self.fields
            .entry(field.to_uppercase())
            .or_default()
            .push(value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<Vec<String>> {
        self.fields.remove(&field.to_uppercase())
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Field names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TagSet
where
    K: AsRef<str>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (field, values) in iter {
            set.set(field.as_ref(), values.into_iter().map(Into::into).collect());
        }
        set
    }
}
