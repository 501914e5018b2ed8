use std::path::{Path, PathBuf};

/// Name prefix of the per-directory scratch directory used while reordering.
pub const SCRATCH_DIR_PREFIX: &str = ".trackorder-";

/// Expand a leading `~` in a user supplied directory
pub fn expand_dir(dir: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(dir).into_owned())
}

/// True for directories created (and possibly left behind) by a reorder pass
pub fn is_scratch_dir_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(SCRATCH_DIR_PREFIX))
}
