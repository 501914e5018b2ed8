use crate::audio::TagScheme;
use crate::error::TagReadError;
use lofty::file::{TaggedFile, TaggedFileExt};
use lofty::tag::{Accessor, ItemKey, Tag, TagType};
use std::path::Path;

/// Ordering-relevant metadata pulled from a single file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SongTags {
    pub track: u32,
    pub disk: u32,
    pub title: String,
    /// False when the file carried no tag of its scheme, or one without any
    /// title, track or disk field.
    pub tagged: bool,
}

impl SongTags {
    /// Defaults for a file without any tag: no numbers, filename as title.
    pub fn untagged(file_name: &str) -> Self {
        SongTags {
            track: 0,
            disk: 0,
            title: file_name.to_string(),
            tagged: false,
        }
    }
}

/// Source of [`SongTags`] for candidate files.
pub trait TagReader {
    fn read_tags(&self, path: &Path, scheme: TagScheme) -> Result<SongTags, TagReadError>;
}

/// Reads tags from disk with lofty.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn read_tags(&self, path: &Path, scheme: TagScheme) -> Result<SongTags, TagReadError> {
        let tagged_file = lofty::read_from_path(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(tags_from_file(&tagged_file, scheme, &file_name))
    }
}

/// Pick the tag(s) the scheme cares about out of a parsed file
pub fn tags_from_file(tagged_file: &TaggedFile, scheme: TagScheme, file_name: &str) -> SongTags {
    match scheme {
        TagScheme::Id3 => id3_tags(
            tagged_file.tag(TagType::Id3v2),
            tagged_file.tag(TagType::Id3v1),
            file_name,
        ),
        TagScheme::VorbisComments => {
            vorbis_tags(tagged_file.tag(TagType::VorbisComments), file_name)
        }
    }
}

/// Track number and title come from ID3v2 when present, else ID3v1.
/// The part-of-set (disk) field only exists in ID3v2.
pub fn id3_tags(v2: Option<&Tag>, v1: Option<&Tag>, file_name: &str) -> SongTags {
    let Some(tag) = v2.or(v1) else {
        return SongTags::untagged(file_name);
    };

    SongTags {
        track: number_field(tag, &ItemKey::TrackNumber),
        disk: v2.map_or(0, |v2| number_field(v2, &ItemKey::DiscNumber)),
        title: tag.title().map(|t| t.into_owned()).unwrap_or_default(),
        tagged: true,
    }
}

/// `tracknumber` / `discnumber` / `title` comment fields. Ogg and Opus
/// streams always carry a comment header, so a block with none of the three
/// fields counts as untagged.
pub fn vorbis_tags(comments: Option<&Tag>, file_name: &str) -> SongTags {
    let Some(tag) = comments.filter(|tag| has_ordering_fields(tag)) else {
        return SongTags::untagged(file_name);
    };

    SongTags {
        track: number_field(tag, &ItemKey::TrackNumber),
        disk: number_field(tag, &ItemKey::DiscNumber),
        title: tag.title().map(|t| t.into_owned()).unwrap_or_default(),
        tagged: true,
    }
}

fn has_ordering_fields(tag: &Tag) -> bool {
    [ItemKey::TrackTitle, ItemKey::TrackNumber, ItemKey::DiscNumber]
        .iter()
        .any(|key| tag.get_string(key).is_some())
}

fn number_field(tag: &Tag, key: &ItemKey) -> u32 {
    tag.get_string(key).map_or(0, leading_number)
}

/// Parse the leading decimal digits of a tag value.
///
/// Handles `"3/12"` style position-of-total values. Anything that does not
/// start with a digit, or overflows, is 0.
pub fn leading_number(value: &str) -> u32 {
    let value = value.trim_start();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());

    value[..end].parse().unwrap_or(0)
}
