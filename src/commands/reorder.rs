use tracing::{error, info};
use trackorder::driver::RunSummary;
use trackorder::ReorderError;

/// Exit status when walking the tree or reading tags failed.
pub const EXIT_SCAN_FAILED: u8 = 1;
/// Exit status when at least one directory could not be reordered.
pub const EXIT_REORDER_FAILED: u8 = 3;
/// Exit status when the root is missing or not a directory. clap already
/// uses 2 for usage errors.
pub const EXIT_NOT_A_DIRECTORY: u8 = 4;

/// Process exit status for an error that stopped the run before reordering
pub fn exit_code_for(err: &ReorderError) -> u8 {
    match err {
        ReorderError::NotADirectory(_) => EXIT_NOT_A_DIRECTORY,
        _ => EXIT_SCAN_FAILED,
    }
}

pub fn report_summary(summary: &RunSummary, dry_run: bool) {
    if dry_run {
        info!("\n🎭 This was a dry run. No files were actually moved.");
        info!("💡 Run without --noop to perform the actual reordering.");
    } else if summary.failures.is_empty() {
        info!(
            "🎉 Reordered {} files in {} directories",
            summary.files_moved, summary.directories_reordered
        );
    } else {
        error!(
            "⚠️  Reordered {} directories, {} failed",
            summary.directories_reordered,
            summary.failures.len()
        );
        for (directory, err) in &summary.failures {
            if let Some(scratch_dir) = err.scratch_dir() {
                error!(
                    "   {}: recover files from {}",
                    directory.display(),
                    scratch_dir.display()
                );
            }
        }
    }
}
