//! File name derivation errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NamingError {
    /// One or more core tags are absent or empty
    #[error("'{}' needs core tags, missing: {}", path.display(), missing.join(", "))]
    MissingCoreTags {
        path: PathBuf,
        missing: Vec<&'static str>,
    },

    /// TRACKNUMBER does not start with a number
    #[error("'{}' has a malformed track number: '{value}'", path.display())]
    MalformedTrackNumber { path: PathBuf, value: String },
}
