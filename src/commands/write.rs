//! Write command - set tag fields on every file

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::batch::{BatchExecutor, BatchSummary, TagOperation};
use crate::tags::{TagAccessor, TagCodec};
use crate::{Result, TagcatError};

/// Execute the write command
///
/// # Errors
/// Returns `TagcatError::InvalidInput` if no field was given.
pub fn execute<C: TagCodec>(
    accessor: &TagAccessor<C>,
    files: &[PathBuf],
    edits: BTreeMap<String, String>,
    quiet: bool,
) -> Result<BatchSummary> {
    if edits.is_empty() {
        return Err(TagcatError::InvalidInput(
            "No fields given. Use e.g. --artist or --title.".into(),
        ));
    }

    let operation = TagOperation::Write(edits);
    let summary = BatchExecutor::new(accessor, quiet).apply(files, &operation)?;
    if !quiet {
        summary.print(operation.label());
    }
    Ok(summary)
}
