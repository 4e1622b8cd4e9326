//! Testing utilities for tagcat
//!
//! This module provides an in-memory [`TagCodec`] so the tag operations can be
//! exercised without real audio files, plus small filesystem fixtures.
//!
//! Only available when compiled with `cfg(test)`.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::tags::{AudioProperties, LoadedFile, TagCodec, TagError, TagSet};

#[derive(Debug, Clone, Default)]
struct Entry {
    tags: TagSet,
    properties: AudioProperties,
    stores: usize,
}

/// Tag codec that keeps tag sets in memory, keyed by path
///
/// Paths that were never inserted behave like unreadable files.
#[derive(Debug, Default)]
pub struct MemoryCodec {
    files: RefCell<BTreeMap<PathBuf, Entry>>,
    failing_stores: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryCodec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file with the given fields
    pub fn insert(&self, path: impl AsRef<Path>, fields: &[(&str, &[&str])]) {
        let tags = fields
            .iter()
            .map(|(name, values)| (*name, values.iter().copied()))
            .collect();
        self.files.borrow_mut().insert(
            path.as_ref().to_path_buf(),
            Entry {
                tags,
                ..Entry::default()
            },
        );
    }

    pub fn set_properties(&self, path: impl AsRef<Path>, properties: AudioProperties) {
        if let Some(entry) = self.files.borrow_mut().get_mut(path.as_ref()) {
            entry.properties = properties;
        }
    }

    /// Make every store to `path` fail
    pub fn fail_stores(&self, path: impl AsRef<Path>) {
        self.failing_stores
            .borrow_mut()
            .insert(path.as_ref().to_path_buf());
    }

    /// Current tags of a registered file
    #[must_use]
    pub fn tags(&self, path: impl AsRef<Path>) -> Option<TagSet> {
        self.files
            .borrow()
            .get(path.as_ref())
            .map(|entry| entry.tags.clone())
    }

    /// Number of successful stores to a file
    #[must_use]
    pub fn store_count(&self, path: impl AsRef<Path>) -> usize {
        self.files
            .borrow()
            .get(path.as_ref())
            .map_or(0, |entry| entry.stores)
    }

    fn missing(path: &Path) -> TagError {
        TagError::Read {
            path: path.to_path_buf(),
            reason: "no such file".into(),
        }
    }
}

impl TagCodec for MemoryCodec {
    fn load(&self, path: &Path) -> Result<LoadedFile, TagError> {
        self.files
            .borrow()
            .get(path)
            .map(|entry| LoadedFile {
                tags: entry.tags.clone(),
                properties: entry.properties,
            })
            .ok_or_else(|| Self::missing(path))
    }

    fn store(&self, path: &Path, tags: &TagSet) -> Result<(), TagError> {
        if self.failing_stores.borrow().contains(path) {
            return Err(TagError::Write {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            });
        }
        let mut files = self.files.borrow_mut();
        let entry = files.get_mut(path).ok_or_else(|| Self::missing(path))?;
        entry.tags = tags.clone();
        entry.stores += 1;
        Ok(())
    }

    fn strip(&self, path: &Path) -> Result<(), TagError> {
        let mut files = self.files.borrow_mut();
        let entry = files.get_mut(path).ok_or_else(|| Self::missing(path))?;
        entry.tags.clear();
        entry.stores += 1;
        Ok(())
    }
}

/// Fields for a fully tagged track
#[must_use]
pub fn core_fields<'a>(
    artist: &'a [&'a str],
    title: &'a [&'a str],
    track: &'a [&'a str],
) -> Vec<(&'a str, &'a [&'a str])> {
    vec![
        ("ARTIST", artist),
        ("ALBUMARTIST", artist),
        ("ALBUM", &["Trans Europa Express"]),
        ("TITLE", title),
        ("TRACKNUMBER", track),
    ]
}

/// Create an empty file, including missing parent directories
///
/// # Panics
/// Panics if the file cannot be created.
pub fn touch(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, b"test content").expect("Failed to create test file");
    path.to_path_buf()
}
