// src/select/walker.rs

//! Candidate enumeration for directory and list mode.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, trace, warn};

use crate::config::InputSource;
use crate::fs::FileSystem;

/// Produce every candidate path for the configured input source, in
/// processing order.
pub fn collect_candidates(fs: &dyn FileSystem, source: &InputSource) -> Result<Vec<PathBuf>> {
    match source {
        InputSource::Directory(root) => collect_directory(fs, root),
        InputSource::List(list) => read_path_list(fs, list),
    }
}

/// Collect all files under `root`, depth-first.
///
/// Entries of each directory are sorted by path. All subdirectories are
/// recursed into before the files of the directory itself are emitted.
/// Symlinked directories are not entered, and only entries that are files
/// (directly or through a link) become candidates. A subdirectory that cannot be read is skipped with a warning; the root
/// itself must be readable.
pub fn collect_directory(fs: &dyn FileSystem, root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    visit_dir(fs, root, &mut files)
        .with_context(|| format!("scanning directory {:?}", root))?;
    debug!(root = %root.display(), count = files.len(), "directory scan complete");
    Ok(files)
}

fn visit_dir(fs: &dyn FileSystem, dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs.read_dir(dir)?;
    entries.sort();

    let mut files = Vec::new();

    for path in entries {
        if fs.is_dir(&path) {
            if fs.is_symlink(&path) {
                debug!(dir = %path.display(), "not following symlinked directory");
            } else if let Err(err) = visit_dir(fs, &path, out) {
                warn!(dir = %path.display(), error = %err, "skipping unreadable directory");
            }
        } else if fs.is_file(&path) {
            files.push(path);
        } else {
            trace!(path = %path.display(), "skipping entry that is not a regular file");
        }
    }

    out.extend(files);
    Ok(())
}

/// Read a list file and return its paths in file order.
pub fn read_path_list(fs: &dyn FileSystem, list: &Path) -> Result<Vec<PathBuf>> {
    let contents = fs
        .read_to_string(list)
        .with_context(|| format!("reading path list {:?}", list))?;
    let paths = parse_path_list(&contents);

    for path in paths.iter().filter(|p| !fs.exists(p)) {
        debug!(path = %path.display(), "listed path does not exist");
    }

    Ok(paths)
}

/// Split list-file contents into paths.
///
/// `\r\n` and lone `\r` count as line breaks; lines are trimmed and blank
/// ones dropped.
pub fn parse_path_list(contents: &str) -> Vec<PathBuf> {
    contents
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}
