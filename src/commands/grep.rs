//! Grep command - find files by field value

use std::path::PathBuf;

use regex::{Regex, RegexBuilder};

use crate::tags::{TagAccessor, TagCodec};
use crate::{Result, TagcatError};

/// Compile `pattern` case-insensitively, anchored at the start of a value
fn compile(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(&format!("^(?:{pattern})"))
        .case_insensitive(true)
        .build()
        .map_err(|e| TagcatError::InvalidInput(format!("Invalid regular expression: {e}")))
}

/// Files whose first value of any of `fields` matches `pattern`, in order.
/// Unreadable files are skipped with a warning.
///
/// # Errors
/// Returns `TagcatError::InvalidInput` for an empty field list or an
/// invalid pattern.
pub fn grep_files<C: TagCodec>(
    accessor: &TagAccessor<C>,
    files: &[PathBuf],
    fields: &[String],
    pattern: &str,
) -> Result<Vec<PathBuf>> {
    if fields.is_empty() {
        return Err(TagcatError::InvalidInput("No fields to search".into()));
    }
    let re = compile(pattern)?;

    let matches = files
        .iter()
        .filter(|file| {
            let tags = accessor.read(file);
            fields
                .iter()
                .any(|field| tags.first(field).is_some_and(|value| re.is_match(value)))
        })
        .cloned()
        .collect();
    Ok(matches)
}

/// Execute the grep command, printing one matching path per line
///
/// # Errors
/// See [`grep_files`].
pub fn execute<C: TagCodec>(
    accessor: &TagAccessor<C>,
    files: &[PathBuf],
    fields: &[String],
    pattern: &str,
) -> Result<Vec<PathBuf>> {
    let matches = grep_files(accessor, files, fields, pattern)?;
    for file in &matches {
        println!("{}", file.display());
    }
    Ok(matches)
}
