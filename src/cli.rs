// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::Separator;

/// Command-line arguments for `filerun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "filerun",
    version,
    about = "Run a command once for every matching file in a directory tree or file list.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory to scan recursively, or with `--list` a file holding one
    /// path per line.
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Program to launch for each selected file (never substituted).
    #[arg(value_name = "PROGRAM")]
    pub program: String,

    /// Argument templates passed to PROGRAM.
    ///
    /// Placeholders: $P path, $D directory, $R directory relative to the
    /// scan root, $F file name, $N name without extension, $E extension.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Treat SOURCE as a list file instead of a directory.
    #[arg(short, long)]
    pub list: bool,

    /// File filter: `*`, a glob list like `*.txt;*.md`, or a regular
    /// expression. Matching is case-insensitive against the full path.
    #[arg(short, long, value_name = "FILTER")]
    pub filter: Option<String>,

    /// Check-path template. The command is skipped when this file exists
    /// and is not older than the source file.
    #[arg(short, long, value_name = "TEMPLATE")]
    pub check: Option<String>,

    /// Print every invocation before launching it.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the invocations, but don't launch anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Wait for each launched program to exit before moving on.
    #[arg(long)]
    pub wait: bool,

    /// Separator used in $P, $D and $R (`backslash` or `slash`).
    #[arg(long, value_name = "SEP")]
    pub separator: Option<Separator>,

    /// Path to an optional config file (TOML).
    ///
    /// Default: `Filerun.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `FILERUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
