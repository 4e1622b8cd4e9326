//! Output formatting for CLI display

use colored::Colorize;

use crate::merge::MergedView;

/// Banner shown before any dry-run output
#[must_use]
pub fn dry_run_banner() -> String {
    "=== Dry Run Mode ===".yellow().bold().to_string()
}

/// Bold section header
#[must_use]
pub fn section(title: &str) -> String {
    format!("=== {title} ===").bold().to_string()
}

/// Merged tags followed by a note on conflicting fields
#[must_use]
pub fn merged_view(view: &MergedView, file_count: usize) -> String {
    if view.is_empty() {
        return "No tags found.".yellow().to_string();
    }

    let mut out = view.to_string();
    let conflicts = view.conflicts().count();
    if conflicts > 0 {
        out.push_str(
            &format!("\n{conflicts} field(s) differ across {file_count} file(s)")
                .yellow()
                .to_string(),
        );
    }
    out
}
