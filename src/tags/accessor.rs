//! Single-file tag operations
//!
//! Each operation is one complete load → modify → store cycle on one file.
//! Nothing is cached between calls, so a failure on one file never leaves
//! state behind for the next.

use std::collections::BTreeMap;
use std::path::Path;

use super::{CLEAN_TAGS, TECHNICAL_FIELDS, TagCodec, TagError, TagSet};

/// Outcome of cleaning one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    /// Whitelisted fields, reduced to their trimmed first value
    pub kept: Vec<String>,
    /// Fields removed, with the values they carried
    pub removed: Vec<(String, Vec<String>)>,
    /// False for a dry run
    pub persisted: bool,
}

/// Tag operations over a [`TagCodec`]
#[derive(Debug, Clone, Default)]
pub struct TagAccessor<C> {
    codec: C,
}

impl<C: TagCodec> TagAccessor<C> {
    pub const fn new(codec: C) -> Self {
        Self { codec }
    }

    #[must_use]
    pub const fn codec(&self) -> &C {
        &self.codec
    }

    /// Read a file's tags plus the computed technical fields.
    ///
    /// A file that cannot be opened yields an empty tag set: it contributes
    /// nothing to whatever the caller is building.
    pub fn read(&self, path: &Path) -> TagSet {
        match self.codec.load(path) {
            Ok(loaded) => {
                let mut tags = loaded.tags;
                let props = loaded.properties;
                let values = [
                    path.display().to_string(),
                    props.sample_rate.to_string(),
                    props.length_secs.to_string(),
                    props.bitrate.to_string(),
                    props.channels.to_string(),
                ];
                for (field, value) in TECHNICAL_FIELDS.into_iter().zip(values) {
                    tags.set_single(field, value);
                }
                tags
            }
            Err(e) => {
                tracing::warn!("{e}");
                TagSet::new()
            }
        }
    }

    /// Set each non-empty edit as a single-value field.
    ///
    /// An empty value leaves the field untouched; it does not delete it.
    ///
    /// # Errors
    /// Returns `TagError` if the file cannot be read or written.
    pub fn write(&self, path: &Path, edits: &BTreeMap<String, String>) -> Result<(), TagError> {
        let mut tags = self.codec.load(path)?.tags;
        for (field, value) in edits {
            if !value.is_empty() {
                tags.set_single(field, value.clone());
            }
        }
        self.codec.store(path, &tags)
    }

    /// Remove the named fields; the file is stored even if none were present.
    ///
    /// # Errors
    /// Returns `TagError` if the file cannot be read or written.
    pub fn delete(&self, path: &Path, fields: &[String]) -> Result<(), TagError> {
        let mut tags = self.codec.load(path)?.tags;
        for field in fields {
            tags.remove(field);
        }
        self.codec.store(path, &tags)
    }

    /// Keep only whitelisted fields, each reduced to its first value with
    /// surrounding whitespace stripped.
    ///
    /// With `dry_run` the result is computed and reported but not stored.
    ///
    /// # Errors
    /// Returns `TagError` if the file cannot be read or written.
    pub fn clear(&self, path: &Path, dry_run: bool) -> Result<CleanupReport, TagError> {
        let tags = self.codec.load(path)?.tags;
        let mut cleaned = TagSet::new();
        let mut report = CleanupReport::default();

        for (field, values) in tags.iter() {
            match values.first() {
                Some(first) if CLEAN_TAGS.contains(&field) => {
                    cleaned.set_single(field, first.trim());
                    report.kept.push(field.to_string());
                }
                _ => report.removed.push((field.to_string(), values.to_vec())),
            }
        }

        if !dry_run {
            self.codec.store(path, &cleaned)?;
            report.persisted = true;
        }
        Ok(report)
    }

    /// Remove every tag block, including non-standard ones.
    ///
    /// # Errors
    /// Returns `TagError` if the file cannot be read or stripped.
    pub fn wipeout(&self, path: &Path) -> Result<(), TagError> {
        self.codec.strip(path)
    }
}
