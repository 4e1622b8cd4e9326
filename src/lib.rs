//! Tagcat - batch inspection and editing of audio file tags
//!
//! This library reads the tag fields embedded in audio files, merges the
//! tag sets of many files into one reportable view, applies batch edits,
//! and files audio into a directory tree derived from the tags.

use std::path::PathBuf;
use thiserror::Error;

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod merge;
pub mod naming;
pub mod output;
pub mod tags;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TagcatError {
    /// Tag codec error
    #[error("Tag error: {0}")]
    Tag(#[from] tags::TagError),
    /// File name derivation error
    #[error("{0}")]
    Naming(#[from] naming::NamingError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A rename target is already taken
    #[error("Destination already exists: '{}' > '{}'", file.display(), destination.display())]
    DestinationExists { file: PathBuf, destination: PathBuf },
    /// Terminal interaction failed
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, TagcatError>;
