//! Tag codec error types
//!
//! Every variant names the file it happened on, so a batch can report the
//! failure and move on to the next file.

use std::path::PathBuf;
use thiserror::Error;

/// Per-file tag codec errors
#[derive(Debug, Error)]
pub enum TagError {
    /// The file could not be opened or its tags could not be parsed
    #[error("Failed to read tags from '{}': {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    /// Modified tags could not be written back
    #[error("Failed to write tags to '{}': {reason}", path.display())]
    Write { path: PathBuf, reason: String },

    /// Tag blocks could not be removed
    #[error("Failed to strip tags from '{}': {reason}", path.display())]
    Strip { path: PathBuf, reason: String },
}

impl TagError {
    /// The file the error belongs to
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } | Self::Strip { path, .. } => path,
        }
    }
}
