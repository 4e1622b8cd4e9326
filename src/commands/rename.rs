//! Move command - file audio under the base directory by its tags

use std::path::{Path, PathBuf};

use crate::Result;
use crate::batch::{BatchExecutor, Rename};
use crate::output;
use crate::tags::{TagAccessor, TagCodec};

/// Execute the move command
///
/// # Errors
/// Stops at the first file that cannot be moved; see [`BatchExecutor::rename`].
pub fn execute<C: TagCodec>(
    accessor: &TagAccessor<C>,
    files: &[PathBuf],
    base_dir: &Path,
    dry_run: bool,
    quiet: bool,
) -> Result<Vec<Rename>> {
    if dry_run && !quiet {
        println!("{}", output::dry_run_banner());
    }

    let renames = BatchExecutor::new(accessor, quiet).rename(files, base_dir, dry_run)?;
    tracing::debug!(count = renames.len(), dry_run, "rename finished");
    Ok(renames)
}
