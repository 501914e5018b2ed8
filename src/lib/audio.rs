use std::path::Path;

/// Audio file format constants for the two supported tag schemes.
/// Please update this list when adding new audio formats
/// ID3-based audio formats
pub const ID3_EXTENSIONS: &[&str] = &["mp3"];

/// Vorbis-comment based audio formats (Ogg, Opus, FLAC)
pub const VORBIS_EXTENSIONS: &[&str] = &["ogg", "oga", "opus", "flac"];

/// The tag layout a file is read with, chosen from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagScheme {
    /// ID3v1/ID3v2. Disk number only comes from ID3v2.
    Id3,
    /// Free-form `NAME=value` comments.
    VorbisComments,
}

impl TagScheme {
    pub fn for_path<P: AsRef<Path>>(path: P) -> Option<TagScheme> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())?;

        if ID3_EXTENSIONS.contains(&ext.as_str()) {
            Some(TagScheme::Id3)
        } else if VORBIS_EXTENSIONS.contains(&ext.as_str()) {
            Some(TagScheme::VorbisComments)
        } else {
            None
        }
    }
}
