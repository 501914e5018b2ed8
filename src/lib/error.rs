use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Boxed error produced by a [`crate::metadata::TagReader`].
pub type TagReadError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which leg of the scratch-directory shuffle a move belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// From the song directory into the scratch directory.
    Out,
    /// From the scratch directory back into the song directory.
    Back,
}

impl fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveDirection::Out => write!(f, "into scratch directory"),
            MoveDirection::Back => write!(f, "back from scratch directory"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ReorderError {
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to walk '{}': {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read tags from '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: TagReadError,
    },

    #[error("could not create a scratch directory in '{}': {source}", .directory.display())]
    Conflict {
        directory: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rename failed part way through. Files already moved stay where they
    /// are; `scratch_dir` is where to look for them.
    #[error(
        "failed to move '{}' {direction} ('{}' -> '{}'): {source}; files may remain in '{}'",
        .file_name.to_string_lossy(),
        .from.display(),
        .to.display(),
        .scratch_dir.display()
    )]
    Move {
        file_name: std::ffi::OsString,
        direction: MoveDirection,
        from: PathBuf,
        to: PathBuf,
        scratch_dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("all files were returned but scratch directory '{}' could not be removed: {source}", .scratch_dir.display())]
    Cleanup {
        scratch_dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReorderError {
    /// Scratch directory that may still hold files, if this error left one behind.
    pub fn scratch_dir(&self) -> Option<&std::path::Path> {
        match self {
            ReorderError::Move { scratch_dir, .. } | ReorderError::Cleanup { scratch_dir, .. } => {
                Some(scratch_dir)
            }
            _ => None,
        }
    }
}

pub type ReorderResult<T> = Result<T, ReorderError>;
