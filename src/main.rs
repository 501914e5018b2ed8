use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use trackorder::utils::expand_dir;
use trackorder::{reorder_library, RunConfig};

mod commands;
mod utils;

use commands::reorder;

/// Reorder audio files on disk so their creation order matches disk/track order.
///
/// Many simple players ignore tags and play files in the order the filesystem
/// lists them. trackorder walks `topdir`, reads the disk and track numbers of
/// every mp3/ogg/opus/flac file and re-creates each directory's files in that
/// order.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Cli {
    /// Top level directory to reorder
    #[arg(default_value = ".")]
    topdir: String,
    /// Print every discovered song and every move performed
    #[arg(short, long)]
    verbose: bool,
    /// Show what would be done without making changes
    #[arg(short = 'n', long = "noop", visible_alias = "dry-run")]
    noop: bool,
    /// Reorder directories in parallel
    #[arg(short, long)]
    parallel: bool,
    /// Also write log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Load environment variables (e.g. RUST_LOG) from a .env file if present
    dotenv().ok();
    let cli = Cli::parse();

    let _log_guard = match utils::init_logging(cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    let config = RunConfig {
        root: expand_dir(&cli.topdir),
        dry_run: cli.noop,
        verbose: cli.verbose,
        parallel: cli.parallel,
    };

    match reorder_library(&config) {
        Ok(summary) => {
            reorder::report_summary(&summary, config.dry_run);
            if summary.failures.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(reorder::EXIT_REORDER_FAILED)
            }
        }
        Err(err) => {
            error!("{err}");
            ExitCode::from(reorder::exit_code_for(&err))
        }
    }
}
