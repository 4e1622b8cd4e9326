//! Merging the tag sets of many files into one view
//!
//! The first file's tags seed the view. Every later file is compared field by
//! field; a field whose values differ, or that is missing on one side, is
//! marked as a conflict. Conflicts are sticky: once marked, a field is never
//! compared again, even if later files happen to agree.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

use crate::tags::{TagAccessor, TagCodec, TagSet};
use crate::{Result, TagcatError};

/// Rendered in place of the values of a conflicting field
pub const CONFLICT_MARKER: &str = "~";

/// Value of one field in a [`MergedView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergedValue {
    /// Every file carries exactly these values
    Shared(Vec<String>),
    /// Files disagree
    Conflict,
}

impl MergedValue {
    /// Values to display; a conflict shows as the single marker
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Shared(values) => values.iter().map(String::as_str).collect(),
            Self::Conflict => vec![CONFLICT_MARKER],
        }
    }

    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict)
    }
}

/// Merged tags of a group of files, sorted by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedView {
    fields: BTreeMap<String, MergedValue>,
}

impl MergedView {
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&MergedValue> {
        self.fields.get(&field.to_uppercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MergedValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Names of the conflicting fields
    pub fn conflicts(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, value)| value.is_conflict())
            .map(|(name, _)| name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<TagSet> for MergedView {
    fn from(tags: TagSet) -> Self {
        let fields = tags
            .iter()
            .map(|(name, values)| (name.to_string(), MergedValue::Shared(values.to_vec())))
            .collect();
        Self { fields }
    }
}

/// One line per field: the lower-cased name padded to the longest name,
/// then every value in backticks.
impl fmt::Display for MergedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.fields.keys().map(|k| k.chars().count()).max().unwrap_or(0) + 1;
        for (name, value) in &self.fields {
            let rendered: Vec<String> = value.values().iter().map(|v| format!("`{v}`")).collect();
            writeln!(f, "{:<width$}: {}", name.to_lowercase(), rendered.join(", "))?;
        }
        Ok(())
    }
}

/// Incremental builder for a [`MergedView`]
#[derive(Debug, Default)]
pub struct Reconciler {
    view: Option<MergedView>,
    conflicted: BTreeSet<String>,
}

impl Reconciler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the next file's tags into the view
    pub fn absorb(&mut self, tags: &TagSet) {
        if self.view.is_none() {
            self.view = Some(MergedView::from(tags.clone()));
            return;
        }
        let Some(view) = self.view.as_mut() else {
            return;
        };

        let names: BTreeSet<String> = view
            .fields
            .keys()
            .cloned()
            .chain(tags.names().map(str::to_string))
            .filter(|name| !self.conflicted.contains(name))
            .collect();

        for name in names {
            let agrees = matches!(
                (view.fields.get(&name), tags.get(&name)),
                (Some(MergedValue::Shared(ours)), Some(theirs)) if ours.as_slice() == theirs
            );
            if !agrees {
                view.fields.insert(name.clone(), MergedValue::Conflict);
                self.conflicted.insert(name);
            }
        }
    }

    /// Fields marked as conflicting so far
    #[must_use]
    pub const fn conflicted(&self) -> &BTreeSet<String> {
        &self.conflicted
    }

    #[must_use]
    pub fn finish(self) -> MergedView {
        self.view.unwrap_or_default()
    }
}

/// Merge tag sets in order
pub fn merge_tag_sets<'a>(sets: impl IntoIterator<Item = &'a TagSet>) -> MergedView {
    let mut reconciler = Reconciler::new();
    for tags in sets {
        reconciler.absorb(tags);
    }
    reconciler.finish()
}

/// Read every file and merge the results. Unreadable files contribute an
/// empty tag set.
pub fn reconcile<C: TagCodec>(accessor: &TagAccessor<C>, files: &[PathBuf]) -> MergedView {
    let mut reconciler = Reconciler::new();
    for file in files {
        reconciler.absorb(&accessor.read(file));
    }
    reconciler.finish()
}

/// True if every set has a non-empty first value for `field`
///
/// # Errors
/// Returns `TagcatError::InvalidInput` for an empty list.
pub fn has_tags(sets: &[TagSet], field: &str) -> Result<bool> {
    if sets.is_empty() {
        return Err(TagcatError::InvalidInput("Expected at least one tag set".into()));
    }
    Ok(sets.iter().all(|tags| tags.has_value(field)))
}

/// True if every set carries the same values for `field` as the first one.
/// A set missing the field never agrees.
///
/// # Errors
/// Returns `TagcatError::InvalidInput` for an empty list.
pub fn equal_tags(sets: &[TagSet], field: &str) -> Result<bool> {
    let Some(first) = sets.first() else {
        return Err(TagcatError::InvalidInput("Expected at least one tag set".into()));
    };
    let Some(expected) = first.get(field) else {
        return Ok(false);
    };
    Ok(sets[1..].iter().all(|tags| tags.get(field) == Some(expected)))
}
