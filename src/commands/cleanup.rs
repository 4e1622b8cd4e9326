//! Cleanup command - reduce every file to the whitelisted fields

use std::path::PathBuf;

use crate::Result;
use crate::batch::{BatchExecutor, BatchSummary, TagOperation};
use crate::output;
use crate::tags::{TagAccessor, TagCodec};

/// Execute the cleanup command
///
/// # Errors
/// Returns `TagcatError::InvalidInput` for an empty file list.
pub fn execute<C: TagCodec>(
    accessor: &TagAccessor<C>,
    files: &[PathBuf],
    dry_run: bool,
    quiet: bool,
) -> Result<BatchSummary> {
    if dry_run && !quiet {
        println!("{}", output::dry_run_banner());
    }

    let operation = TagOperation::Cleanup { dry_run };
    let summary = BatchExecutor::new(accessor, quiet).apply(files, &operation)?;
    if !quiet {
        summary.print(operation.label());
    }
    Ok(summary)
}
