//! Delete command - remove tag fields from every file

use std::path::PathBuf;

use crate::batch::{BatchExecutor, BatchSummary, TagOperation};
use crate::tags::{TagAccessor, TagCodec};
use crate::{Result, TagcatError};

/// Execute the delete command
///
/// # Errors
/// Returns `TagcatError::InvalidInput` if no field was given.
pub fn execute<C: TagCodec>(
    accessor: &TagAccessor<C>,
    files: &[PathBuf],
    fields: Vec<String>,
    quiet: bool,
) -> Result<BatchSummary> {
    if fields.is_empty() {
        return Err(TagcatError::InvalidInput("No fields to delete".into()));
    }

    let operation = TagOperation::Delete(fields);
    let summary = BatchExecutor::new(accessor, quiet).apply(files, &operation)?;
    if !quiet {
        summary.print(operation.label());
    }
    Ok(summary)
}
