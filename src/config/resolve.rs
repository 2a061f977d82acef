// src/config/resolve.rs

use std::path::Path;

use crate::cli::CliArgs;
use crate::config::model::{CommandSpec, FileConfig, InputSource, RunConfig};
use crate::errors::{FilerunError, Result};
use crate::fs::FileSystem;
use crate::select::Filter;
use crate::tokens::normalize_base_dir;

/// Merge CLI flags over the config file and produce the run configuration.
///
/// Fails, before any file is touched, when:
/// - the program is empty,
/// - the filter is not a valid regular expression,
/// - the scan root is not an existing directory,
/// - the list file is not a file.
pub fn resolve(args: &CliArgs, file: &FileConfig, fs: &dyn FileSystem) -> Result<RunConfig> {
    if args.program.trim().is_empty() {
        return Err(FilerunError::ConfigError(
            "a program to launch is required".to_string(),
        ));
    }

    let filter_str = args
        .filter
        .as_deref()
        .or(file.filter.as_deref())
        .unwrap_or("*");
    let filter = Filter::compile(filter_str)?;

    let separator = args.separator.or(file.separator).unwrap_or_default();

    let (source, base_dir) = if args.list {
        (resolve_list(&args.source, fs)?, String::new())
    } else {
        let root = resolve_root(&args.source, fs)?;
        let base = normalize_base_dir(&root.to_string_lossy(), separator);
        (InputSource::Directory(root), base)
    };

    let check = args
        .check
        .clone()
        .or_else(|| file.check.clone())
        .filter(|c| !c.is_empty());

    Ok(RunConfig {
        source,
        base_dir,
        filter,
        check,
        command: CommandSpec::new(args.program.clone(), args.args.clone()),
        separator,
        verbose: args.verbose || file.verbose.unwrap_or(false),
        dry_run: args.dry_run || file.dry_run.unwrap_or(false),
        wait: args.wait || file.wait.unwrap_or(false),
    })
}

fn resolve_root(source: &str, fs: &dyn FileSystem) -> Result<std::path::PathBuf> {
    let root = fs
        .absolute(Path::new(source))
        .map_err(|e| FilerunError::ConfigError(format!("cannot resolve directory {source:?}: {e}")))?;
    if !fs.is_dir(&root) {
        return Err(FilerunError::ConfigError(format!(
            "{source:?} is not a directory (use --list for a list file)"
        )));
    }
    Ok(root)
}

fn resolve_list(source: &str, fs: &dyn FileSystem) -> Result<InputSource> {
    let path = Path::new(source);
    if !fs.is_file(path) {
        return Err(FilerunError::ConfigError(format!(
            "list file {source:?} does not exist"
        )));
    }
    Ok(InputSource::List(path.to_path_buf()))
}
