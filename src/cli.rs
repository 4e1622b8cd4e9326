//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for tagcat using the `clap` crate.
//!
//! # Commands
//!
//! - **list**: Show the merged tags of the given files
//! - **write**: Set tag fields
//! - **delete**: Remove tag fields
//! - **wipeout**: Remove all tags
//! - **cleanup**: Keep only whitelisted fields, one trimmed value each
//! - **move**: File audio under the configured base directory by its tags
//! - **auto**: Interactive list → cleanup → move pipeline for one album
//! - **grep**: Find files whose fields match a regular expression
//!
//! Every command has a short alias (`ls`, `wr`, `del`, `wo`, `cl`, `mv`, `a`, `g`).

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tagcat")]
#[command(about = "Inspect, edit and file audio tags in batches", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log diagnostics to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Root of the destination tree for move/auto (overrides config)
    #[arg(long = "base-dir", value_name = "DIR", global = true)]
    pub base_dir: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Files to operate on
#[derive(Args, Debug, Clone)]
pub struct FileArgs {
    /// Audio files or directories
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Recurse into directories
    #[arg(short = 'r', long = "recursiv", visible_alias = "recursive")]
    pub recursive: bool,
}

/// Field values for the write command
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    #[arg(short = 'a', long = "artist")]
    pub artist: Option<String>,

    #[arg(long = "albumartist", visible_alias = "aa")]
    pub albumartist: Option<String>,

    #[arg(short = 'A', long = "album")]
    pub album: Option<String>,

    #[arg(short = 't', long = "title")]
    pub title: Option<String>,

    #[arg(short = 'n', long = "tracknumber")]
    pub tracknumber: Option<String>,

    #[arg(short = 'l', long = "label")]
    pub label: Option<String>,

    #[arg(short = 'd', long = "date")]
    pub date: Option<String>,

    #[arg(short = 'b', long = "bpm")]
    pub bpm: Option<String>,

    #[arg(short = 'g', long = "genre")]
    pub genre: Option<String>,

    #[arg(short = 's', long = "style")]
    pub style: Option<String>,

    #[arg(short = 'c', long = "comment")]
    pub comment: Option<String>,
}

impl FieldArgs {
    /// Requested edits keyed by upper-cased field name
    #[must_use]
    pub fn edits(&self) -> BTreeMap<String, String> {
        [
            ("ARTIST", &self.artist),
            ("ALBUMARTIST", &self.albumartist),
            ("ALBUM", &self.album),
            ("TITLE", &self.title),
            ("TRACKNUMBER", &self.tracknumber),
            ("LABEL", &self.label),
            ("DATE", &self.date),
            ("BPM", &self.bpm),
            ("GENRE", &self.genre),
            ("STYLE", &self.style),
            ("COMMENT", &self.comment),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|v| (field.to_string(), v)))
        .collect()
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the merged tags of all files; differing fields show as `~`
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        files: FileArgs,
    },

    /// Set tag fields on every file
    #[command(visible_alias = "wr")]
    Write {
        #[command(flatten)]
        files: FileArgs,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Remove tag fields from every file
    #[command(visible_alias = "del")]
    Delete {
        #[command(flatten)]
        files: FileArgs,

        /// Fields to remove
        #[arg(short = 't', long = "tags", value_name = "FIELD", num_args = 1.., required = true)]
        tags: Vec<String>,
    },

    /// Remove all tags from every file
    #[command(visible_alias = "wo")]
    Wipeout {
        #[command(flatten)]
        files: FileArgs,
    },

    /// Keep only whitelisted fields, reduced to one trimmed value
    #[command(visible_alias = "cl")]
    Cleanup {
        #[command(flatten)]
        files: FileArgs,

        /// Show what would change without writing
        #[arg(short = 'd', long = "dry")]
        dry: bool,
    },

    /// Move files to <base>/<albumartist>/<album>/<nn>-<artist>-<title>.<ext>
    #[command(name = "move", visible_alias = "mv")]
    Move {
        #[command(flatten)]
        files: FileArgs,

        /// Show the moves without performing them
        #[arg(short = 'd', long = "dry")]
        dry: bool,
    },

    /// Review, clean up and move one album interactively
    #[command(visible_alias = "a")]
    Auto {
        #[command(flatten)]
        files: FileArgs,

        /// Preview the cleanup and the moves without performing them
        #[arg(short = 'd', long = "dry")]
        dry: bool,
    },

    /// Print files whose fields match a regular expression
    #[command(visible_alias = "g")]
    Grep {
        /// Audio files or directories
        #[arg(value_name = "FILE", required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        /// Recurse into directories
        #[arg(short = 'R', long = "recursiv", visible_alias = "recursive")]
        recursive: bool,

        /// Fields to search (repeatable)
        #[arg(short = 't', long = "tags", value_name = "FIELD", required = true)]
        tags: Vec<String>,

        /// Case-insensitive pattern, matched at the start of the value
        #[arg(short = 'r', long = "regexp", default_value = "")]
        regexp: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_write_edits() {
        let cli = Cli::try_parse_from([
            "tagcat", "wr", "a.flac", "-a", "Kraftwerk", "--aa", "Kraftwerk", "-n", "3/12",
            "-g", "",
        ])
        .unwrap();

        let Commands::Write { files, fields } = cli.command else {
            panic!("expected write command");
        };
        assert_eq!(files.files, vec![PathBuf::from("a.flac")]);
        let edits = fields.edits();
        assert_eq!(edits.get("ARTIST").map(String::as_str), Some("Kraftwerk"));
        assert_eq!(edits.get("ALBUMARTIST").map(String::as_str), Some("Kraftwerk"));
        assert_eq!(edits.get("TRACKNUMBER").map(String::as_str), Some("3/12"));
        assert_eq!(edits.get("GENRE").map(String::as_str), Some(""));
        assert!(!edits.contains_key("TITLE"));
    }

    #[test]
    fn test_aliases_and_globals() {
        let cli = Cli::try_parse_from([
            "tagcat", "mv", "-r", "-d", "music/", "--base-dir", "/lib", "-q",
        ])
        .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.base_dir, Some(PathBuf::from("/lib")));
        assert!(matches!(
            cli.command,
            Commands::Move { ref files, dry: true } if files.recursive
        ));
    }

    #[test]
    fn test_delete_requires_fields() {
        assert!(Cli::try_parse_from(["tagcat", "del", "a.flac"]).is_err());
        let cli = Cli::try_parse_from(["tagcat", "del", "a.flac", "-t", "comment", "bpm"]);
        // trailing values after -t belong to the field list
        let Commands::Delete { tags, .. } = cli.unwrap().command else {
            panic!("expected delete command");
        };
        assert_eq!(tags, vec!["comment", "bpm"]);
    }

    #[test]
    fn test_grep_flags() {
        let cli = Cli::try_parse_from([
            "tagcat", "g", "-R", "lib/", "-t", "artist", "-t", "albumartist", "-r", "kraft",
        ])
        .unwrap();
        let Commands::Grep { recursive, tags, regexp, .. } = cli.command else {
            panic!("expected grep command");
        };
        assert!(recursive);
        assert_eq!(tags, vec!["artist", "albumartist"]);
        assert_eq!(regexp, "kraft");
    }

    #[test]
    fn test_missing_files_is_usage_error() {
        assert!(Cli::try_parse_from(["tagcat", "ls"]).is_err());
        assert!(Cli::try_parse_from(["tagcat"]).is_err());
    }
}
