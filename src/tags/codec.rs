//! Tag codec seam and its `lofty` implementation.
//!
//! Field names are the upper-cased Vorbis comment keys (`ARTIST`,
//! `ALBUMARTIST`, `TRACKNUMBER`, ...) regardless of the on-disk format, so
//! FLAC and MP3 files produce comparable tag sets. Values are never split
//! or merged: a TRACKNUMBER of `3/12` reads back as `3/12`.

use std::fs::File;
use std::path::Path;

use lofty::config::{ParseOptions, ParsingMode, WriteOptions};
use lofty::error::LoftyError;
use lofty::file::{AudioFile, FileType, TaggedFile, TaggedFileExt};
use lofty::flac::FlacFile;
use lofty::mpeg::MpegFile;
use lofty::probe::Probe;

use super::{TagError, TagSet, id3, vorbis};

/// Technical stream properties
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioProperties {
    pub sample_rate: u32,
    pub length_secs: u64,
    /// Audio bitrate in kbps
    pub bitrate: u32,
    pub channels: u8,
}

/// Tags and properties of one file as read from disk
#[derive(Debug, Clone, Default)]
pub struct LoadedFile {
    pub tags: TagSet,
    pub properties: AudioProperties,
}

/// Reads and persists the tag fields embedded in audio files.
///
/// Implementations must not keep the file open between calls.
pub trait TagCodec {
    /// Read all textual tag fields and the stream properties.
    ///
    /// # Errors
    /// Returns `TagError::Read` if the file cannot be opened or parsed.
    fn load(&self, path: &Path) -> Result<LoadedFile, TagError>;

    /// Make the textual fields of the file exactly `tags`.
    ///
    /// # Errors
    /// Returns `TagError::Read` or `TagError::Write` on codec failure,
    /// including a field the format cannot hold.
    fn store(&self, path: &Path, tags: &TagSet) -> Result<(), TagError>;

    /// Remove every tag block from the file.
    ///
    /// # Errors
    /// Returns `TagError::Read` or `TagError::Strip` on codec failure.
    fn strip(&self, path: &Path) -> Result<(), TagError>;
}

/// [`TagCodec`] backed by `lofty`.
///
/// FLAC files are edited through their Vorbis comments and MP3 files
/// through their ID3v2 tag, so every field round-trips as written. Other
/// formats can only be stripped.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyCodec;

/// A parsed file in its native tag format
enum NativeFile {
    Flac(FlacFile),
    Mpeg(MpegFile),
}

fn read_error(path: &Path) -> impl Fn(LoftyError) -> TagError + '_ {
    move |e| TagError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

fn write_error(path: &Path, reason: impl ToString) -> TagError {
    TagError::Write {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn parse_options() -> ParseOptions {
    ParseOptions::new().parsing_mode(ParsingMode::BestAttempt)
}

impl LoftyCodec {
    fn open(path: &Path) -> Result<TaggedFile, TagError> {
        Probe::open(path)
            .map_err(read_error(path))?
            .options(parse_options())
            .read()
            .map_err(read_error(path))
    }

    fn open_native(path: &Path) -> Result<NativeFile, TagError> {
        let io_error = |e: std::io::Error| TagError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };
        let file_type = Probe::open(path)
            .map_err(read_error(path))?
            .guess_file_type()
            .map_err(io_error)?
            .file_type();

        let mut file = File::open(path).map_err(io_error)?;
        match file_type {
            Some(FileType::Flac) => FlacFile::read_from(&mut file, parse_options())
                .map(NativeFile::Flac)
                .map_err(read_error(path)),
            Some(FileType::Mpeg) => MpegFile::read_from(&mut file, parse_options())
                .map(NativeFile::Mpeg)
                .map_err(read_error(path)),
            other => Err(TagError::Read {
                path: path.to_path_buf(),
                reason: match other {
                    Some(file_type) => format!("unsupported file type {file_type:?}"),
                    None => "unknown file type".to_string(),
                },
            }),
        }
    }
}

impl TagCodec for LoftyCodec {
    fn load(&self, path: &Path) -> Result<LoadedFile, TagError> {
        let loaded = match Self::open_native(path)? {
            NativeFile::Flac(flac) => {
                let props = flac.properties();
                LoadedFile {
                    tags: flac.vorbis_comments().map(vorbis::read).unwrap_or_default(),
                    properties: AudioProperties {
                        sample_rate: props.sample_rate(),
                        length_secs: props.duration().as_secs(),
                        bitrate: props.audio_bitrate(),
                        channels: props.channels(),
                    },
                }
            }
            NativeFile::Mpeg(mpeg) => {
                let props = mpeg.properties();
                LoadedFile {
                    tags: mpeg.id3v2().map(id3::read).unwrap_or_default(),
                    properties: AudioProperties {
                        sample_rate: props.sample_rate(),
                        length_secs: props.duration().as_secs(),
                        bitrate: props.audio_bitrate(),
                        channels: props.channels(),
                    },
                }
            }
        };
        Ok(loaded)
    }

    fn store(&self, path: &Path, tags: &TagSet) -> Result<(), TagError> {
        match Self::open_native(path)? {
            NativeFile::Flac(mut flac) => {
                let mut comments = flac.remove_vorbis_comments().unwrap_or_default();
                vorbis::apply(&mut comments, tags).map_err(|reason| write_error(path, reason))?;
                flac.set_vorbis_comments(comments);
                flac.save_to_path(path, WriteOptions::default())
            }
            NativeFile::Mpeg(mut mpeg) => {
                let existing = mpeg.remove_id3v2().unwrap_or_default();
                let tag = id3::apply(existing, tags).map_err(|reason| write_error(path, reason))?;
                mpeg.set_id3v2(tag);
                mpeg.save_to_path(path, WriteOptions::default())
            }
        }
        .map_err(|e| write_error(path, e))?;

        tracing::debug!(path = %path.display(), fields = tags.len(), "tags stored");
        Ok(())
    }

    fn strip(&self, path: &Path) -> Result<(), TagError> {
        let tagged = Self::open(path)?;
        for tag in tagged.tags() {
            tag.tag_type()
                .remove_from_path(path)
                .map_err(|e| TagError::Strip {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
        }
        Ok(())
    }
}
