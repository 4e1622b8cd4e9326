//! ID3v2 tags (MP3) as tag sets
//!
//! Well-known fields map to their text frames, `COMMENT` to the comment
//! frame without a description, and every other field to a `TXXX` frame
//! named after it. Text frames without a mapping keep their frame id as
//! field name. Multiple values share one frame, separated by NUL.

use lofty::TextEncoding;
use lofty::id3::v2::{CommentFrame, Frame, FrameId, Id3v2Tag, TextInformationFrame};

use super::TagSet;

/// Text frame id and the field name it is read as
const TEXT_FRAMES: [(&str, &str); 18] = [
    ("TPE1", "ARTIST"),
    ("TPE2", "ALBUMARTIST"),
    ("TALB", "ALBUM"),
    ("TIT2", "TITLE"),
    ("TRCK", "TRACKNUMBER"),
    ("TPOS", "DISCNUMBER"),
    ("TDRC", "DATE"),
    ("TDOR", "ORIGINALDATE"),
    ("TCON", "GENRE"),
    ("TBPM", "BPM"),
    ("TPUB", "LABEL"),
    ("TCOM", "COMPOSER"),
    ("TEXT", "LYRICIST"),
    ("TPE3", "CONDUCTOR"),
    ("TCOP", "COPYRIGHT"),
    ("TENC", "ENCODEDBY"),
    ("TSRC", "ISRC"),
    ("TIT1", "GROUPING"),
];

const COMMENT_FIELD: &str = "COMMENT";
const SEPARATOR: char = '\0';
const LANGUAGE: [u8; 3] = *b"eng";

/// Where a field is stored
#[derive(Debug, PartialEq, Eq)]
enum Target<'a> {
    Text(&'a str),
    Comment,
    UserText,
}

fn field_for_frame(id: &str) -> &str {
    TEXT_FRAMES
        .iter()
        .find(|(frame, _)| *frame == id)
        .map_or(id, |(_, field)| field)
}

/// An unmapped text frame id such as `TSSE`, but never `TXXX`
fn is_raw_text_frame(name: &str) -> bool {
    name.len() == 4
        && name.starts_with('T')
        && name != "TXXX"
        && name.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

fn target(name: &str) -> Target<'_> {
    if name == COMMENT_FIELD {
        return Target::Comment;
    }
    if let Some((frame, _)) = TEXT_FRAMES.iter().find(|(_, field)| *field == name) {
        return Target::Text(frame);
    }
    if is_raw_text_frame(name) {
        return Target::Text(name);
    }
    Target::UserText
}

/// Frames owned by the tag set; anything else (pictures, URLs, comments
/// with a description, ...) is kept as it is on store
fn is_textual(frame: &Frame<'_>) -> bool {
    match frame {
        Frame::Text(_) | Frame::UserText(_) | Frame::Timestamp(_) => true,
        Frame::Comment(comment) => comment.description.is_empty(),
        _ => false,
    }
}

fn push_joined(tags: &mut TagSet, name: &str, joined: &str) {
    for value in joined.split(SEPARATOR) {
        tags.push(name, value);
    }
}

/// The textual fields of a tag
pub fn read(tag: &Id3v2Tag) -> TagSet {
    let mut tags = TagSet::new();
    for frame in tag {
        match frame {
            Frame::Text(text) => {
                push_joined(&mut tags, field_for_frame(frame.id_str()), &text.value);
            }
            Frame::UserText(user) => push_joined(&mut tags, &user.description, &user.content),
            Frame::Timestamp(stamp) => {
                tags.push(field_for_frame(frame.id_str()), stamp.timestamp.to_string());
            }
            Frame::Comment(comment) if comment.description.is_empty() => {
                tags.push(COMMENT_FIELD, comment.content.clone());
            }
            _ => {}
        }
    }
    tags
}

/// Build the tag to store: every non-textual frame of `existing`, plus one
/// frame per field of `tags`.
///
/// # Errors
/// Returns the reason if a field maps to a frame id that cannot be written.
pub fn apply(existing: Id3v2Tag, tags: &TagSet) -> Result<Id3v2Tag, String> {
    let mut out = Id3v2Tag::default();
    for frame in existing {
        if !is_textual(&frame) {
            out.insert(frame);
        }
    }

    for (name, values) in tags.iter() {
        let joined = values.join(&SEPARATOR.to_string());
        match target(name) {
            Target::Text(id) => {
                let id = FrameId::new(id.to_owned()).map_err(|e| {
                    format!("field {name:?} cannot be stored as an ID3v2 frame: {e}")
                })?;
                let frame = TextInformationFrame::new(id, TextEncoding::UTF8, joined);
                out.insert(Frame::Text(frame));
            }
            Target::Comment => {
                let frame = CommentFrame::new(TextEncoding::UTF8, LANGUAGE, String::new(), joined);
                out.insert(Frame::Comment(frame));
            }
            Target::UserText => {
                out.insert_user_text(name.to_owned(), joined);
            }
        }
    }
    Ok(out)
}
