//! Filesystem-safe slugs from tag values

use super::fold::fold;

/// True for the characters a slug may contain (before whitespace collapsing)
const fn is_slug_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | ' ' | '(' | ')' | '&')
}

/// Turn a tag value into a path segment.
///
/// Lower-cases, transliterates, drops everything outside
/// `[a-z0-9_. ()&]`, trims, and replaces each run of spaces with a single
/// `_`. Empty input gives an empty slug, and so do `.` and `..`, which
/// would otherwise name the current or parent directory.
#[must_use]
pub fn slugify(value: &str) -> String {
    let filtered: String = fold(&value.to_lowercase())
        .chars()
        .filter(|&c| is_slug_char(c))
        .collect();
    let slug = filtered.split_whitespace().collect::<Vec<_>>().join("_");
    if slug == "." || slug == ".." {
        return String::new();
    }
    slug
}
