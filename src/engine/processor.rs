// src/engine/processor.rs

//! Per-file pipeline: filter, staleness, substitution, launch.

use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, trace};

use crate::config::RunConfig;
use crate::engine::staleness::check_staleness;
use crate::errors::Result;
use crate::exec::{join_arguments, Invocation, Launcher};
use crate::fs::FileSystem;
use crate::tokens::PathTokens;

/// What happened to one candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Rejected by the filter; nothing else was looked at.
    Filtered,
    /// The check file is not older than the source.
    UpToDate,
    /// Handed to the launcher.
    Launched,
    /// Printed only (`--dry-run`).
    DryRun,
}

/// Counters over a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub visited: usize,
    pub filtered: usize,
    pub up_to_date: usize,
    pub launched: usize,
    pub dry_run: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: FileOutcome) {
        self.visited += 1;
        match outcome {
            FileOutcome::Filtered => self.filtered += 1,
            FileOutcome::UpToDate => self.up_to_date += 1,
            FileOutcome::Launched => self.launched += 1,
            FileOutcome::DryRun => self.dry_run += 1,
        }
    }
}

/// Runs the per-file pipeline against a fixed configuration.
pub struct FileProcessor<'a, L: Launcher> {
    config: &'a RunConfig,
    fs: &'a dyn FileSystem,
    launcher: L,
    /// Receives the `--verbose` / `--dry-run` invocation lines.
    echo: Box<dyn Write + Send + 'a>,
}

impl<'a, L: Launcher> FileProcessor<'a, L> {
    pub fn new(config: &'a RunConfig, fs: &'a dyn FileSystem, launcher: L) -> Self {
        Self {
            config,
            fs,
            launcher,
            echo: Box::new(io::stdout()),
        }
    }

    /// Send invocation lines to `echo` instead of stdout.
    pub fn with_echo(mut self, echo: impl Write + Send + 'a) -> Self {
        self.echo = Box::new(echo);
        self
    }

    /// Build the invocation for `path` without any filesystem access.
    pub fn invocation_for(&self, path: &Path) -> Invocation {
        let tokens = PathTokens::new(
            &path.to_string_lossy(),
            &self.config.base_dir,
            self.config.separator,
        );
        trace!(?tokens, "path tokens");

        let args = join_arguments(self.config.command.args.iter().map(|t| tokens.substitute(t)));

        Invocation {
            source: path.to_path_buf(),
            program: self.config.command.program.clone(),
            args,
        }
    }

    /// Process one candidate path.
    pub async fn process(&mut self, path: &Path) -> Result<FileOutcome> {
        let path_str = path.to_string_lossy();
        if !self.config.filter.matches(&path_str) {
            trace!(path = %path_str, "filtered out");
            return Ok(FileOutcome::Filtered);
        }

        let staleness = check_staleness(self.fs, self.config, path);
        if !staleness.must_run() {
            debug!(path = %path_str, ?staleness, "up to date; skipping");
            return Ok(FileOutcome::UpToDate);
        }
        debug!(path = %path_str, ?staleness, "must run");

        let invocation = self.invocation_for(path);

        if self.config.dry_run {
            self.echo_line(&invocation)?;
            return Ok(FileOutcome::DryRun);
        }

        if self.config.verbose {
            self.echo_line(&invocation)?;
        }

        self.launcher.launch(invocation).await?;
        Ok(FileOutcome::Launched)
    }

    fn echo_line(&mut self, invocation: &Invocation) -> io::Result<()> {
        writeln!(self.echo, "{invocation}")?;
        self.echo.flush()
    }

    /// Process every path in order and return the counters.
    pub async fn process_all<I, P>(&mut self, paths: I) -> Result<RunSummary>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut summary = RunSummary::default();
        for path in paths {
            let outcome = self.process(path.as_ref()).await?;
            summary.record(outcome);
        }
        Ok(summary)
    }
}
