//! File discovery and small filesystem helpers
//!
//! Turns the paths given on the command line into an ordered list of
//! absolute, normalized file paths of one [`FileKind`]. Symbolic links are
//! never returned.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::{Result, TagcatError};

/// Kind of file to collect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `.mp3` and `.flac`
    Audio,
    /// `.jpg` and `.jpeg`
    Image,
}

impl FileKind {
    const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Audio => &["mp3", "flac"],
            Self::Image => &["jpg", "jpeg"],
        }
    }

    /// Extension check, case-insensitive
    #[must_use]
    pub fn matches(self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions()
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
    }
}

/// Lexically normalize a path: drop `.` segments, resolve `..` against the
/// preceding segment, collapse redundant separators.
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}

/// A regular file (not a symlink) of the requested kind
fn is_candidate(path: &Path, kind: FileKind) -> bool {
    fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_file()) && kind.matches(path)
}

/// Collect files of `kind` from the given inputs, in input order.
///
/// Without `recursive`, only inputs that are files themselves are kept.
/// With it, directories are walked (sorted by name, links not followed).
/// Duplicates are dropped; the first occurrence wins.
///
/// # Errors
/// Returns `TagcatError::Io` if the current directory cannot be determined
/// for a relative input.
pub fn collect(inputs: &[PathBuf], recursive: bool, kind: FileKind) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    let mut keep = |path: &Path| -> Result<()> {
        let absolute = normalize_path(&std::path::absolute(path)?);
        if seen.insert(absolute.clone()) {
            files.push(absolute);
        }
        Ok(())
    };

    for input in inputs {
        let is_dir = fs::symlink_metadata(input).is_ok_and(|meta| meta.is_dir());
        if recursive && is_dir {
            let walker = WalkDir::new(input)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| match entry {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        tracing::warn!("Skipping unreadable entry: {e}");
                        None
                    }
                });
            for entry in walker {
                if entry.file_type().is_file() && kind.matches(entry.path()) {
                    keep(entry.path())?;
                }
            }
        } else if is_candidate(input, kind) {
            keep(input)?;
        } else {
            tracing::debug!(path = %input.display(), "not a valid {kind:?} file, skipped");
        }
    }

    Ok(files)
}

/// True if every file lives in the same directory
///
/// # Errors
/// Returns `TagcatError::InvalidInput` for an empty list.
pub fn same_dir(files: &[PathBuf]) -> Result<bool> {
    let Some(first) = files.first() else {
        return Err(TagcatError::InvalidInput("Expected at least one file".into()));
    };
    let parent = first.parent();
    Ok(files.iter().all(|file| file.parent() == parent))
}

/// Set the permission bits of every file
///
/// # Errors
/// Returns `TagcatError::Io` on the first file whose mode cannot be changed.
#[cfg(unix)]
pub fn chmod(files: &[PathBuf], mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    for file in files {
        fs::set_permissions(file, fs::Permissions::from_mode(mode))?;
    }
    Ok(())
}

/// Permission bits are a unix concept; elsewhere this does nothing.
///
/// # Errors
/// Never fails.
#[cfg(not(unix))]
pub fn chmod(_files: &[PathBuf], _mode: u32) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::touch;

    #[test]
    fn test_kind_matches_case_insensitive() {
        assert!(FileKind::Audio.matches(Path::new("a.FLAC")));
        assert!(FileKind::Audio.matches(Path::new("a.Mp3")));
        assert!(!FileKind::Audio.matches(Path::new("a.ogg")));
        assert!(!FileKind::Audio.matches(Path::new("flac")));
        assert!(FileKind::Image.matches(Path::new("cover.JPEG")));
        assert!(!FileKind::Image.matches(Path::new("cover.png")));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize_path(Path::new("/a//b/")), PathBuf::from("/a/b"));
        assert_eq!(normalize_path(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(normalize_path(Path::new("../a")), PathBuf::from("../a"));
        assert_eq!(normalize_path(Path::new("a/../../../b")), PathBuf::from("../../b"));
    }

    #[test]
    fn test_collect_non_recursive_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        let song = touch(dir.path().join("song.mp3"));
        touch(dir.path().join("sub/deep.flac"));

        let files = collect(
            &[song.clone(), dir.path().join("sub")],
            false,
            FileKind::Audio,
        )
        .unwrap();
        assert_eq!(files, vec![song]);
    }

    #[test]
    fn test_collect_recursive_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let b = touch(dir.path().join("b.flac"));
        let a = touch(dir.path().join("a.MP3"));
        let nested = touch(dir.path().join("cd2/01.flac"));
        touch(dir.path().join("notes.txt"));
        touch(dir.path().join("cover.jpg"));

        let files = collect(&[dir.path().to_path_buf()], true, FileKind::Audio).unwrap();
        assert_eq!(files, vec![a, b, nested]);
    }

    #[test]
    fn test_collect_removes_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let song = touch(dir.path().join("song.flac"));
        let dotted = dir.path().join(".").join("song.flac");

        let files = collect(&[song.clone(), dotted], false, FileKind::Audio).unwrap();
        assert_eq!(files, vec![song]);
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_excludes_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let real = touch(dir.path().join("real.flac"));
        let link = dir.path().join("link.flac");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        assert!(collect(&[link.clone()], false, FileKind::Audio).unwrap().is_empty());
        let walked = collect(&[dir.path().to_path_buf()], true, FileKind::Audio).unwrap();
        assert_eq!(walked, vec![real]);
    }

    #[test]
    fn test_same_dir() {
        let files = vec![PathBuf::from("/x/a.flac"), PathBuf::from("/x/b.flac")];
        assert!(same_dir(&files).unwrap());

        let files = vec![PathBuf::from("/x/a.flac"), PathBuf::from("/y/b.flac")];
        assert!(!same_dir(&files).unwrap());

        assert!(matches!(same_dir(&[]), Err(TagcatError::InvalidInput(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_chmod() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let song = touch(dir.path().join("song.flac"));
        fs::set_permissions(&song, fs::Permissions::from_mode(0o600)).unwrap();

        chmod(&[song.clone()], 0o644).unwrap();
        let mode = fs::metadata(&song).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
