use crate::metadata::SongTags;
use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// Snapshot of one candidate file and its ordering metadata.
///
/// Built once during the walk and never refreshed; moving the file afterwards
/// does not update it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRecord {
    directory: PathBuf,
    file_name: OsString,
    tags: SongTags,
}

impl SongRecord {
    /// Returns `None` if `path` has no file name component.
    pub fn new(path: &Path, tags: SongTags) -> Option<Self> {
        let file_name = path.file_name()?.to_os_string();
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();

        Some(SongRecord {
            directory,
            file_name,
            tags,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    pub fn track(&self) -> u32 {
        self.tags.track
    }

    pub fn disk(&self) -> u32 {
        self.tags.disk
    }

    pub fn title(&self) -> &str {
        &self.tags.title
    }

    /// Playback order: disk, then track, then file name. Unknown numbers are
    /// 0 and sort first.
    pub fn playback_cmp(&self, other: &SongRecord) -> Ordering {
        self.disk()
            .cmp(&other.disk())
            .then_with(|| self.track().cmp(&other.track()))
            .then_with(|| self.file_name.cmp(&other.file_name))
    }
}

impl fmt::Display for SongRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tags.tagged {
            write!(f, "{} - {}", self.track(), self.title())
        } else {
            write!(f, "{}", self.file_name.to_string_lossy())
        }
    }
}

/// Sort songs into playback order in place.
pub fn sort_for_playback(songs: &mut [SongRecord]) {
    songs.sort_by(SongRecord::playback_cmp);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(name: &str, disk: u32, track: u32) -> SongRecord {
        let tags = SongTags {
            track,
            disk,
            title: format!("{name} title"),
            tagged: disk != 0 || track != 0,
        };
        SongRecord::new(&Path::new("/music/album").join(name), tags).unwrap()
    }

    fn names(songs: &[SongRecord]) -> Vec<String> {
        songs
            .iter()
            .map(|s| s.file_name().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_new_splits_directory_and_file_name() {
        let record = song("01.mp3", 1, 1);
        assert_eq!(record.directory(), Path::new("/music/album"));
        assert_eq!(record.file_name(), OsStr::new("01.mp3"));
        assert!(SongRecord::new(Path::new("/"), SongTags::default()).is_none());
    }

    #[test]
    fn test_disk_then_track_order() {
        let mut songs = vec![song("b.mp3", 1, 2), song("a.mp3", 1, 1), song("c.mp3", 2, 1)];
        sort_for_playback(&mut songs);
        assert_eq!(names(&songs), ["a.mp3", "b.mp3", "c.mp3"]);
    }

    #[test]
    fn test_untagged_falls_back_to_file_name() {
        let mut songs = vec![song("zeta.mp3", 0, 0), song("alpha.mp3", 0, 0), song("beta.mp3", 0, 0)];
        sort_for_playback(&mut songs);
        assert_eq!(names(&songs), ["alpha.mp3", "beta.mp3", "zeta.mp3"]);
    }

    #[test]
    fn test_unknown_numbers_sort_first() {
        let mut songs = vec![song("02.mp3", 1, 2), song("bonus.mp3", 0, 0), song("01.mp3", 1, 0)];
        sort_for_playback(&mut songs);
        assert_eq!(names(&songs), ["bonus.mp3", "01.mp3", "02.mp3"]);
    }

    #[test]
    fn test_sort_is_idempotent_and_permutation_independent() {
        let base = vec![
            song("d.mp3", 2, 1),
            song("a.mp3", 1, 3),
            song("c.mp3", 1, 3),
            song("x.mp3", 0, 0),
            song("b.mp3", 1, 1),
            song("e.mp3", 2, 0),
        ];

        let mut expected = base.clone();
        sort_for_playback(&mut expected);

        let mut again = expected.clone();
        sort_for_playback(&mut again);
        assert_eq!(again, expected);

        for shift in 0..base.len() {
            let mut rotated = base.clone();
            rotated.rotate_left(shift);
            sort_for_playback(&mut rotated);
            assert_eq!(rotated, expected);

            let mut reversed = base.clone();
            reversed.rotate_left(shift);
            reversed.reverse();
            sort_for_playback(&mut reversed);
            assert_eq!(reversed, expected);
        }

        assert_eq!(
            names(&expected),
            ["x.mp3", "b.mp3", "a.mp3", "c.mp3", "e.mp3", "d.mp3"]
        );
    }

    #[test]
    fn test_display_summary() {
        assert_eq!(song("01.mp3", 1, 7).to_string(), "7 - 01.mp3 title");
        assert_eq!(song("intro.mp3", 0, 0).to_string(), "intro.mp3");
    }
}
