//! Rewrite the creation order of a directory's songs.
//!
//! Simple players list a directory in the order its entries were created.
//! The only portable way to change that order is to take every song out of
//! the directory and put them back one at a time, so each directory is
//! processed as:
//!
//! 1. create a uniquely named scratch directory inside it
//! 2. rename every song, in playback order, into the scratch directory
//! 3. rename every song, in the same order, back out again
//! 4. remove the (now empty) scratch directory
//!
//! All moves are renames within one directory tree, so file data is never
//! copied. If a rename fails the sequence stops where it is and the error
//! names the scratch directory; nothing is rolled back automatically.

use crate::error::{MoveDirection, ReorderError, ReorderResult};
use crate::song::SongRecord;
use crate::utils::SCRATCH_DIR_PREFIX;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReorderOptions {
    /// Report every move without touching the filesystem.
    pub dry_run: bool,
    /// Report every executed move.
    pub verbose: bool,
}

/// One rename in the reorder sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMove {
    pub direction: MoveDirection,
    pub file_name: OsString,
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Every rename needed to reorder `songs` through `scratch_dir`, in the order
/// they must run. `songs` must already be in playback order.
pub fn plan_moves(directory: &Path, songs: &[SongRecord], scratch_dir: &Path) -> Vec<PlannedMove> {
    let outward = songs.iter().map(|song| PlannedMove {
        direction: MoveDirection::Out,
        file_name: song.file_name().to_os_string(),
        from: directory.join(song.file_name()),
        to: scratch_dir.join(song.file_name()),
    });
    let back = songs.iter().map(|song| PlannedMove {
        direction: MoveDirection::Back,
        file_name: song.file_name().to_os_string(),
        from: scratch_dir.join(song.file_name()),
        to: directory.join(song.file_name()),
    });

    outward.chain(back).collect()
}

/// Reorder the songs of one directory so creation order matches the slice
/// order. Returns the moves that were executed, or in dry-run mode the moves
/// that would have been.
///
/// An empty slice is a no-op: no scratch directory is created.
pub fn reorder_directory(
    directory: &Path,
    songs: &[SongRecord],
    options: &ReorderOptions,
) -> ReorderResult<Vec<PlannedMove>> {
    if songs.is_empty() {
        return Ok(Vec::new());
    }

    if options.dry_run {
        let scratch_dir = directory.join(format!("{SCRATCH_DIR_PREFIX}XXXXXX"));
        let plan = plan_moves(directory, songs, &scratch_dir);
        info!("Would create scratch directory: {}", scratch_dir.display());
        for planned in &plan {
            info!(
                "  Would move: {} -> {}",
                planned.from.display(),
                planned.to.display()
            );
        }
        info!("Would remove scratch directory: {}", scratch_dir.display());
        return Ok(plan);
    }

    let scratch_dir = create_scratch_dir(directory)?;
    if options.verbose {
        info!("Created scratch directory: {}", scratch_dir.display());
    }

    let plan = plan_moves(directory, songs, &scratch_dir);
    for planned in &plan {
        execute_move(planned, &scratch_dir)?;
        if options.verbose {
            info!(
                "  Moved: {} -> {}",
                planned.from.display(),
                planned.to.display()
            );
        }
    }

    fs::remove_dir(&scratch_dir).map_err(|source| ReorderError::Cleanup {
        scratch_dir: scratch_dir.clone(),
        source,
    })?;
    if options.verbose {
        info!("Removed scratch directory: {}", scratch_dir.display());
    }

    Ok(plan)
}

/// Create the scratch directory and detach it from automatic cleanup; on
/// failure it has to stay on disk for manual recovery.
fn create_scratch_dir(directory: &Path) -> ReorderResult<PathBuf> {
    tempfile::Builder::new()
        .prefix(SCRATCH_DIR_PREFIX)
        .tempdir_in(directory)
        .map(TempDir::keep)
        .map_err(|source| ReorderError::Conflict {
            directory: directory.to_path_buf(),
            source,
        })
}

fn execute_move(planned: &PlannedMove, scratch_dir: &Path) -> ReorderResult<()> {
    let move_error = |source: io::Error| ReorderError::Move {
        file_name: planned.file_name.clone(),
        direction: planned.direction,
        from: planned.from.clone(),
        to: planned.to.clone(),
        scratch_dir: scratch_dir.to_path_buf(),
        source,
    };

    // rename(2) silently replaces an existing destination.
    if fs::symlink_metadata(&planned.to).is_ok() {
        return Err(move_error(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "destination already exists",
        )));
    }

    fs::rename(&planned.from, &planned.to).map_err(move_error)
}
