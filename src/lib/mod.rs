//! # Track Order Core Library
//!
//! Rewrites the on-disk creation order of audio files so that players which
//! ignore tags and play in directory order still play albums by disk and
//! track number. The library provides tag reading, the playback ordering,
//! directory grouping and the rename sequence; the `trackorder` binary wires
//! them to the command line.

pub mod audio;
pub mod directory;
pub mod driver;
pub mod error;
pub mod metadata;
pub mod reorder;
pub mod song;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use directory::{collect_song_groups, SongGroups};
pub use driver::{reorder_groups, reorder_library, reorder_library_with, RunConfig, RunSummary};
pub use error::{MoveDirection, ReorderError, ReorderResult};
pub use metadata::{LoftyTagReader, SongTags, TagReader};
pub use reorder::{plan_moves, reorder_directory, PlannedMove, ReorderOptions};
pub use song::{sort_for_playback, SongRecord};
