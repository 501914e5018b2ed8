use crate::directory::collect_song_groups;
use crate::error::{ReorderError, ReorderResult};
use crate::metadata::{LoftyTagReader, TagReader};
use crate::reorder::{reorder_directory, ReorderOptions};
use crate::song::{sort_for_playback, SongRecord};
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{error, info};

/// Settings handed over from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub root: PathBuf,
    pub dry_run: bool,
    pub verbose: bool,
    pub parallel: bool,
}

impl RunConfig {
    fn reorder_options(&self) -> ReorderOptions {
        ReorderOptions {
            dry_run: self.dry_run,
            verbose: self.verbose,
        }
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub directories_reordered: usize,
    pub files_moved: usize,
    pub failures: Vec<(PathBuf, ReorderError)>,
}

/// Reorder every directory under `config.root` using the tags on disk
pub fn reorder_library(config: &RunConfig) -> ReorderResult<RunSummary> {
    reorder_library_with(config, &LoftyTagReader)
}

/// Scan, group, sort and reorder. Scanning is all-or-nothing: a walk or tag
/// error returns before any file is moved. After that each directory stands
/// on its own and failures are collected in the summary.
pub fn reorder_library_with<R: TagReader + ?Sized>(
    config: &RunConfig,
    reader: &R,
) -> ReorderResult<RunSummary> {
    info!("🔍 Scanning for songs in {}", config.root.display());

    let mut groups: Vec<(PathBuf, Vec<SongRecord>)> =
        collect_song_groups(&config.root, reader)?.into_iter().collect();
    groups.sort_by(|a, b| a.0.cmp(&b.0));

    for (_, songs) in &mut groups {
        sort_for_playback(songs);
    }

    if groups.is_empty() {
        info!("✅ No songs found, nothing to reorder.");
        return Ok(RunSummary::default());
    }

    if config.verbose {
        for (directory, songs) in &groups {
            info!("📁 {}", directory.display());
            for song in songs {
                info!("  📄 {} ({})", song.file_name().to_string_lossy(), song);
            }
        }
    }

    info!("📁 Found songs in {} directories", groups.len());

    Ok(reorder_groups(groups, &config.reorder_options(), config.parallel))
}

/// Reorder already sorted groups. With `parallel` each directory runs as its
/// own rayon task; directories share nothing, so any order is safe.
pub fn reorder_groups(
    groups: Vec<(PathBuf, Vec<SongRecord>)>,
    options: &ReorderOptions,
    parallel: bool,
) -> RunSummary {
    let reorder = |(directory, songs): (PathBuf, Vec<SongRecord>)| {
        let result = reorder_directory(&directory, &songs, options).map(|_| songs.len());
        (directory, result)
    };

    let results: Vec<(PathBuf, ReorderResult<usize>)> = if parallel {
        groups.into_par_iter().map(reorder).collect()
    } else {
        groups.into_iter().map(reorder).collect()
    };

    let mut summary = RunSummary::default();
    for (directory, result) in results {
        match result {
            Ok(moved) => {
                summary.directories_reordered += 1;
                summary.files_moved += moved;
            }
            Err(err) => {
                error!("❌ Failed to reorder {}: {}", directory.display(), err);
                summary.failures.push((directory, err));
            }
        }
    }

    summary
}
