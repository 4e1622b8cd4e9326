//! List command - show the merged tags of a group of files

use std::path::PathBuf;

use crate::merge::{self, MergedView};
use crate::output;
use crate::tags::{TagAccessor, TagCodec};

/// Execute the list command
///
/// The merged view is always printed; `quiet` only drops the conflict note.
pub fn execute<C: TagCodec>(
    accessor: &TagAccessor<C>,
    files: &[PathBuf],
    quiet: bool,
) -> MergedView {
    let view = merge::reconcile(accessor, files);

    if quiet {
        print!("{view}");
    } else {
        println!("{}", output::merged_view(&view, files.len()));
    }
    view
}
