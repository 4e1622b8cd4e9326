//! Wipeout command - remove every tag from every file

use std::path::PathBuf;

use crate::Result;
use crate::batch::{BatchExecutor, BatchSummary, TagOperation};
use crate::tags::{TagAccessor, TagCodec};

/// Execute the wipeout command
///
/// # Errors
/// Never fails as a whole; per-file failures are in the summary.
pub fn execute<C: TagCodec>(
    accessor: &TagAccessor<C>,
    files: &[PathBuf],
    quiet: bool,
) -> Result<BatchSummary> {
    let operation = TagOperation::Wipeout;
    let summary = BatchExecutor::new(accessor, quiet).apply(files, &operation)?;
    if !quiet && !files.is_empty() {
        summary.print(operation.label());
    }
    Ok(summary)
}
