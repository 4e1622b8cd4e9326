//! Vorbis comment blocks (FLAC) as tag sets
//!
//! Keys and values are taken literally. The vendor string belongs to the
//! encoder and is never exposed as a field.

use lofty::ogg::VorbisComments;

use super::TagSet;

/// Printable ASCII except `=`
fn is_valid_key(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| (0x20..=0x7D).contains(&b) && b != b'=')
}

/// Every comment of the block, keyed by its upper-cased name
pub fn read(comments: &VorbisComments) -> TagSet {
    let mut tags = TagSet::new();
    for (key, value) in comments.items() {
        tags.push(key, value);
    }
    tags
}

/// Make the comments of the block exactly `tags`.
///
/// Pictures held by the block are not touched.
///
/// # Errors
/// Returns the reason if a field name cannot be a comment key; the block is
/// left unchanged in that case.
pub fn apply(comments: &mut VorbisComments, tags: &TagSet) -> Result<(), String> {
    if let Some(name) = tags.names().find(|name| !is_valid_key(name)) {
        return Err(format!("field name {name:?} is not a valid Vorbis comment key"));
    }

    let mut keys: Vec<String> = comments.items().map(|(key, _)| key.to_owned()).collect();
    keys.dedup();
    for key in keys {
        comments.remove(&key).for_each(drop);
    }

    for (name, values) in tags.iter() {
        for value in values {
            comments.push(name.to_owned(), value.clone());
        }
    }
    Ok(())
}
