//! Batch operations over an ordered file list
//!
//! Files are processed one at a time, in the order given, each to completion
//! before the next. Tag edits tolerate per-file failures: the failure is
//! reported and the batch moves on. Renames do not: a derivation error or an
//! occupied destination stops the batch, and renames already done stay done.

mod summary;

pub use summary::BatchSummary;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::discovery::{self, FileKind};
use crate::naming;
use crate::tags::{CleanupReport, TagAccessor, TagCodec};
use crate::{Result, TagcatError};

/// Name given to a moved cover image
pub const COVER_FILE_NAME: &str = "cover.jpg";

/// A tag edit applied to every file of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOperation {
    /// Set fields to single values; empty values are skipped
    Write(BTreeMap<String, String>),
    /// Remove fields
    Delete(Vec<String>),
    /// Reduce to whitelisted fields
    Cleanup { dry_run: bool },
    /// Remove all tags
    Wipeout,
}

impl TagOperation {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Write(_) => "Write",
            Self::Delete(_) => "Delete",
            Self::Cleanup { .. } => "Cleanup",
            Self::Wipeout => "Wipeout",
        }
    }
}

/// One completed (or, in a dry run, planned) move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Runs tag operations and renames over a file list
#[derive(Debug)]
pub struct BatchExecutor<'a, C> {
    accessor: &'a TagAccessor<C>,
    quiet: bool,
}

impl<'a, C: TagCodec> BatchExecutor<'a, C> {
    pub const fn new(accessor: &'a TagAccessor<C>, quiet: bool) -> Self {
        Self { accessor, quiet }
    }

    /// Apply `operation` to every file. A failing file is recorded in the
    /// summary and the batch continues.
    ///
    /// # Errors
    /// Returns `TagcatError::InvalidInput` for a cleanup of an empty list.
    pub fn apply(&self, files: &[PathBuf], operation: &TagOperation) -> Result<BatchSummary> {
        if files.is_empty() && matches!(operation, TagOperation::Cleanup { .. }) {
            return Err(TagcatError::InvalidInput("No files to clean up".into()));
        }

        let mut summary = BatchSummary::new();
        for file in files {
            let outcome = match operation {
                TagOperation::Write(edits) => self.accessor.write(file, edits).map(|()| None),
                TagOperation::Delete(fields) => self.accessor.delete(file, fields).map(|()| None),
                TagOperation::Cleanup { dry_run } => self.accessor.clear(file, *dry_run).map(Some),
                TagOperation::Wipeout => self.accessor.wipeout(file).map(|()| None),
            };

            match outcome {
                Ok(report) => {
                    summary.add_success();
                    if !self.quiet {
                        if let Some(report) = report {
                            print_cleanup(&report);
                        }
                        println!("{} {}", "✓".green(), file.display());
                    }
                }
                Err(e) => {
                    tracing::warn!("{e}");
                    if !self.quiet {
                        eprintln!("{} {e}", "✗".red());
                    }
                    summary.add_error(e.to_string());
                }
            }
        }
        Ok(summary)
    }

    /// Move every file to the path derived from its tags under `base_dir`.
    ///
    /// Stops at the first file whose destination cannot be derived or is
    /// already taken; earlier moves are kept. With `dry_run` nothing on disk
    /// changes but the same checks run.
    ///
    /// # Errors
    /// Returns `TagcatError::Naming` when tags are missing or malformed,
    /// `TagcatError::DestinationExists` when the target exists, and
    /// `TagcatError::Io` when a directory cannot be created or a move fails.
    pub fn rename(&self, files: &[PathBuf], base_dir: &Path, dry_run: bool) -> Result<Vec<Rename>> {
        let mut done = Vec::with_capacity(files.len());
        for file in files {
            let destination = naming::derive_for(self.accessor, file, base_dir)?;
            self.relocate(file, &destination, dry_run)?;
            done.push(Rename {
                source: file.clone(),
                destination,
            });
        }
        Ok(done)
    }

    /// Move the single cover image found next to `files` into the directory
    /// the first file is filed under, as `cover.jpg`.
    ///
    /// Returns `None` when there is not exactly one image.
    ///
    /// # Errors
    /// Returns `TagcatError::InvalidInput` if the files do not share one
    /// directory, plus the errors of [`Self::rename`].
    pub fn rename_cover(
        &self,
        files: &[PathBuf],
        base_dir: &Path,
        dry_run: bool,
    ) -> Result<Option<Rename>> {
        if !discovery::same_dir(files)? {
            return Err(TagcatError::InvalidInput(
                "Files must live in the same directory".into(),
            ));
        }
        let Some(album_dir) = files[0].parent() else {
            return Ok(None);
        };

        let images = discovery::collect(&[album_dir.to_path_buf()], true, FileKind::Image)?;
        let [cover] = images.as_slice() else {
            tracing::debug!(found = images.len(), "no unique cover image, skipped");
            return Ok(None);
        };

        let filed_as = naming::derive_for(self.accessor, &files[0], base_dir)?;
        let destination = filed_as
            .parent()
            .map_or_else(|| PathBuf::from(COVER_FILE_NAME), |dir| dir.join(COVER_FILE_NAME));

        self.relocate(cover, &destination, dry_run)?;
        Ok(Some(Rename {
            source: cover.clone(),
            destination,
        }))
    }

    fn relocate(&self, source: &Path, destination: &Path, dry_run: bool) -> Result<()> {
        if destination.exists() {
            return Err(TagcatError::DestinationExists {
                file: source.to_path_buf(),
                destination: destination.to_path_buf(),
            });
        }

        if !dry_run {
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::rename(source, destination)?;
        }

        if !self.quiet {
            println!("{} > {}", source.display(), destination.display());
        }
        Ok(())
    }
}

fn print_cleanup(report: &CleanupReport) {
    for (field, values) in &report.removed {
        println!("deleting '{field}': {values:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryCodec, core_fields, touch};

    fn tagged_files(codec: &MemoryCodec, dir: &Path, count: usize) -> Vec<PathBuf> {
        (1..=count)
            .map(|n| {
                let path = touch(dir.join(format!("in/{n}.flac")));
                let track = n.to_string();
                let title = format!("Track {n}");
                codec.insert(
                    &path,
                    &core_fields(&["Kraftwerk"], &[title.as_str()], &[track.as_str()]),
                );
                path
            })
            .collect()
    }

    #[test]
    fn test_apply_continues_after_failure() {
        let codec = MemoryCodec::new();
        codec.insert("/a.flac", &[("TITLE", &["a"])]);
        codec.insert("/c.flac", &[("TITLE", &["c"])]);
        codec.fail_stores("/c.flac");
        let accessor = TagAccessor::new(codec);
        let files = vec![
            PathBuf::from("/a.flac"),
            PathBuf::from("/missing.flac"),
            PathBuf::from("/c.flac"),
        ];
        let edits = BTreeMap::from([("GENRE".to_string(), "Electronic".to_string())]);

        let summary = BatchExecutor::new(&accessor, true)
            .apply(&files, &TagOperation::Write(edits))
            .unwrap();

        assert_eq!(summary.success, 1);
        assert_eq!(summary.errors, 2);
        assert_eq!(summary.total(), 3);
        assert!(summary.error_messages[0].contains("missing.flac"));
        assert_eq!(
            accessor.codec().tags("/a.flac").unwrap().first("GENRE"),
            Some("Electronic")
        );
    }

    #[test]
    fn test_apply_delete_and_wipeout() {
        let codec = MemoryCodec::new();
        codec.insert("/a.flac", &[("TITLE", &["a"]), ("COMMENT", &["x"])]);
        codec.insert("/b.flac", &[("TITLE", &["b"])]);
        let accessor = TagAccessor::new(codec);
        let executor = BatchExecutor::new(&accessor, true);

        let files = vec![PathBuf::from("/a.flac")];
        executor
            .apply(&files, &TagOperation::Delete(vec!["COMMENT".into()]))
            .unwrap();
        assert!(!accessor.codec().tags("/a.flac").unwrap().contains("COMMENT"));

        let files = vec![PathBuf::from("/a.flac"), PathBuf::from("/b.flac")];
        let summary = executor.apply(&files, &TagOperation::Wipeout).unwrap();
        assert_eq!(summary.success, 2);
        assert!(accessor.codec().tags("/b.flac").unwrap().is_empty());
    }

    #[test]
    fn test_cleanup_of_empty_list_is_invalid() {
        let accessor = TagAccessor::new(MemoryCodec::new());
        let result = BatchExecutor::new(&accessor, true)
            .apply(&[], &TagOperation::Cleanup { dry_run: true });
        assert!(matches!(result, Err(TagcatError::InvalidInput(_))));
    }

    #[test]
    fn test_rename_moves_files() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("library");
        let codec = MemoryCodec::new();
        let files = tagged_files(&codec, dir.path(), 2);
        let accessor = TagAccessor::new(codec);

        let renames = BatchExecutor::new(&accessor, true)
            .rename(&files, &base, false)
            .unwrap();

        let expected = base.join("kraftwerk/trans_europa_express/01-kraftwerk-track_1.flac");
        assert_eq!(renames[0].destination, expected);
        assert!(expected.exists());
        assert!(!files[0].exists());
        assert!(base.join("kraftwerk/trans_europa_express/02-kraftwerk-track_2.flac").exists());
    }

    #[test]
    fn test_rename_dry_run_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("library");
        let codec = MemoryCodec::new();
        let files = tagged_files(&codec, dir.path(), 3);
        let accessor = TagAccessor::new(codec);

        let renames = BatchExecutor::new(&accessor, true)
            .rename(&files, &base, true)
            .unwrap();

        assert_eq!(renames.len(), 3);
        assert!(files.iter().all(|f| f.exists()));
        assert!(!base.exists());
    }

    #[test]
    fn test_rename_aborts_on_existing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("library");
        let codec = MemoryCodec::new();
        let files = tagged_files(&codec, dir.path(), 5);
        let taken = touch(base.join("kraftwerk/trans_europa_express/02-kraftwerk-track_2.flac"));
        let accessor = TagAccessor::new(codec);

        let err = BatchExecutor::new(&accessor, true)
            .rename(&files, &base, false)
            .unwrap_err();

        match err {
            TagcatError::DestinationExists { file, destination } => {
                assert_eq!(file, files[1]);
                assert_eq!(destination, taken);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!files[0].exists());
        assert!(files[1..].iter().all(|f| f.exists()));
        assert!(!base.join("kraftwerk/trans_europa_express/03-kraftwerk-track_3.flac").exists());
    }

    #[test]
    fn test_rename_aborts_on_missing_core_tags() {
        let dir = tempfile::tempdir().unwrap();
        let codec = MemoryCodec::new();
        let mut files = tagged_files(&codec, dir.path(), 1);
        let untagged = touch(dir.path().join("in/untagged.flac"));
        codec.insert(&untagged, &[("TITLE", &["Showroom Dummies"])]);
        files.insert(0, untagged.clone());
        let accessor = TagAccessor::new(codec);

        let err = BatchExecutor::new(&accessor, true)
            .rename(&files, &dir.path().join("library"), false)
            .unwrap_err();

        assert!(matches!(
            err,
            TagcatError::Naming(naming::NamingError::MissingCoreTags { ref path, .. })
                if path == &untagged
        ));
        assert!(files.iter().all(|f| f.exists()));
    }

    #[test]
    fn test_rename_cover() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("library");
        let codec = MemoryCodec::new();
        let files = tagged_files(&codec, dir.path(), 2);
        let cover = touch(dir.path().join("in/scans/front.JPG"));
        let accessor = TagAccessor::new(codec);

        let moved = BatchExecutor::new(&accessor, true)
            .rename_cover(&files, &base, false)
            .unwrap()
            .unwrap();

        let expected = base.join("kraftwerk/trans_europa_express/cover.jpg");
        assert_eq!(moved.source, cover);
        assert_eq!(moved.destination, expected);
        assert!(expected.exists());
        assert!(!cover.exists());
    }

    #[test]
    fn test_rename_cover_needs_exactly_one_image() {
        let dir = tempfile::tempdir().unwrap();
        let codec = MemoryCodec::new();
        let files = tagged_files(&codec, dir.path(), 1);
        touch(dir.path().join("in/front.jpg"));
        touch(dir.path().join("in/back.jpeg"));
        let accessor = TagAccessor::new(codec);

        let moved = BatchExecutor::new(&accessor, true)
            .rename_cover(&files, &dir.path().join("library"), false)
            .unwrap();
        assert!(moved.is_none());
    }

    #[test]
    fn test_rename_cover_requires_same_directory() {
        let accessor = TagAccessor::new(MemoryCodec::new());
        let files = vec![PathBuf::from("/x/a.flac"), PathBuf::from("/y/b.flac")];

        let result =
            BatchExecutor::new(&accessor, true).rename_cover(&files, Path::new("/lib"), true);
        assert!(matches!(result, Err(TagcatError::InvalidInput(_))));
    }
}
