// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod select;
pub mod tokens;
pub mod types;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{load_optional, resolve, RunConfig};
use crate::engine::{FileProcessor, RunSummary};
use crate::exec::{Launcher, RealLauncher};
use crate::fs::{FileSystem, RealFileSystem};
use crate::select::collect_candidates;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config file loading and CLI merging
/// - candidate enumeration (directory scan or list file)
/// - the per-file processor with the real launcher
pub async fn run(args: CliArgs) -> Result<()> {
    let fs = RealFileSystem;
    let file_cfg = load_optional(args.config.as_deref())?;
    let config = resolve(&args, &file_cfg, &fs)?;
    debug!(?config, "resolved run configuration");

    let launcher = RealLauncher::new(config.wait);
    let summary = run_with(&config, &fs, launcher).await?;

    info!(
        visited = summary.visited,
        filtered = summary.filtered,
        up_to_date = summary.up_to_date,
        launched = summary.launched,
        dry_run = summary.dry_run,
        "done"
    );
    Ok(())
}

/// Enumerate candidates for `config` and process them one after another.
///
/// Split out of [`run`] so tests can drive a whole run against a mock
/// filesystem and a fake launcher.
pub async fn run_with<L: Launcher>(
    config: &RunConfig,
    fs: &dyn FileSystem,
    launcher: L,
) -> Result<RunSummary> {
    let candidates = collect_candidates(fs, &config.source)?;
    info!(count = candidates.len(), "candidates collected");

    let mut processor = FileProcessor::new(config, fs, launcher);
    let summary = processor.process_all(&candidates).await?;
    Ok(summary)
}
