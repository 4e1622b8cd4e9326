//! Auto command - review, clean up and file one album interactively
//!
//! Runs list, cleanup and move in sequence, asking before anything is
//! renamed. Either "abort" answer stops the run with [`AutoOutcome::Aborted`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::batch::{BatchExecutor, TagOperation};
use crate::discovery;
use crate::merge;
use crate::output;
use crate::tags::{TagAccessor, TagCodec, TagSet};
use crate::ui::Prompter;
use crate::{Result, TagcatError};

/// Permissions given to every file before it is filed
pub const FILE_MODE: u32 = 0o644;

/// How an auto run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoOutcome {
    Completed,
    Aborted,
}

/// Execute the auto command
///
/// With `dry_run` the cleanup and the final move only report what they
/// would do. An ALBUMARTIST entered at the prompt is always written so the
/// rename preview can use it.
///
/// # Errors
/// Returns `TagcatError::InvalidInput` for an empty file list or files
/// spread over several directories, and any error of the rename steps.
pub fn execute<C: TagCodec, P: Prompter>(
    accessor: &TagAccessor<C>,
    prompter: &P,
    files: &[PathBuf],
    base_dir: &Path,
    dry_run: bool,
    quiet: bool,
) -> Result<AutoOutcome> {
    if files.is_empty() {
        return Err(TagcatError::InvalidInput("No audio files found".into()));
    }
    if dry_run && !quiet {
        println!("{}", output::dry_run_banner());
    }

    super::list::execute(accessor, files, quiet);

    if prompter.prompt_confirm("Abort?", false)? {
        return Ok(AutoOutcome::Aborted);
    }

    let executor = BatchExecutor::new(accessor, quiet);

    if prompter.prompt_confirm("Set ALBUMARTIST?", false)? {
        let sets: Vec<TagSet> = files.iter().map(|file| accessor.read(file)).collect();
        let shared_artist = if merge::equal_tags(&sets, "ARTIST")? {
            sets[0].first("ARTIST")
        } else {
            None
        };

        let albumartist = prompter.prompt_text("ALBUMARTIST", shared_artist)?;
        let edits = BTreeMap::from([("ALBUMARTIST".to_string(), albumartist)]);
        executor.apply(files, &TagOperation::Write(edits))?;
    }

    if !dry_run {
        discovery::chmod(files, FILE_MODE)?;
    }

    executor.apply(files, &TagOperation::Cleanup { dry_run })?;

    if !quiet {
        println!("{}", output::section("Cover"));
    }
    executor.rename_cover(files, base_dir, dry_run)?;

    if !quiet {
        println!("{}", output::section("Rename"));
    }
    executor.rename(files, base_dir, true)?;
    if !prompter.prompt_confirm("Rename?", false)? {
        return Ok(AutoOutcome::Aborted);
    }
    if !dry_run {
        executor.rename(files, base_dir, false)?;
    }

    Ok(AutoOutcome::Completed)
}
