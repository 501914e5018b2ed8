use crate::audio::TagScheme;
use crate::error::{ReorderError, ReorderResult};
use crate::metadata::TagReader;
use crate::song::SongRecord;
use crate::utils::is_scratch_dir_name;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Songs keyed by the directory that contains them, in discovery order.
pub type SongGroups = FxHashMap<PathBuf, Vec<SongRecord>>;

/// Walk `root` and group every candidate song by its containing directory.
///
/// A candidate is a regular, non-empty file with a supported extension.
/// Any walk or tag read failure aborts the whole collection: nothing built so
/// far is returned, so no directory is ever reordered from a partial view.
pub fn collect_song_groups<R: TagReader + ?Sized>(
    root: &Path,
    reader: &R,
) -> ReorderResult<SongGroups> {
    if !root.is_dir() {
        return Err(ReorderError::NotADirectory(root.to_path_buf()));
    }

    let mut groups = SongGroups::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_leftover_scratch_dir(entry));

    for entry in walker {
        let entry = entry.map_err(|source| walk_error(root, source))?;

        let Some(scheme) = candidate_scheme(&entry)? else {
            continue;
        };

        let path = entry.path();
        let tags = reader
            .read_tags(path, scheme)
            .map_err(|source| ReorderError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let Some(song) = SongRecord::new(path, tags) else {
            continue;
        };

        debug!("Found {} ({})", path.display(), song);
        groups
            .entry(song.directory().to_path_buf())
            .or_default()
            .push(song);
    }

    Ok(groups)
}

fn is_leftover_scratch_dir(entry: &DirEntry) -> bool {
    let leftover =
        entry.depth() > 0 && entry.file_type().is_dir() && is_scratch_dir_name(entry.path());
    if leftover {
        warn!(
            "Skipping leftover scratch directory {} (check it for stranded files)",
            entry.path().display()
        );
    }
    leftover
}

fn candidate_scheme(entry: &DirEntry) -> ReorderResult<Option<TagScheme>> {
    if !entry.file_type().is_file() {
        return Ok(None);
    }
    let Some(scheme) = TagScheme::for_path(entry.path()) else {
        return Ok(None);
    };

    // Zero-byte files are placeholders with nothing to read.
    let metadata = entry.metadata().map_err(|source| ReorderError::Walk {
        path: entry.path().to_path_buf(),
        source,
    })?;

    Ok((metadata.len() > 0).then_some(scheme))
}

fn walk_error(root: &Path, source: walkdir::Error) -> ReorderError {
    let path = source
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    ReorderError::Walk { path, source }
}
