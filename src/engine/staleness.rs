// src/engine/staleness.rs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::RunConfig;
use crate::fs::FileSystem;
use crate::tokens::PathTokens;

/// Why a file does or does not need its command run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Staleness {
    /// No check template configured.
    NoCheck,
    /// The expanded check path is not an existing file.
    CheckMissing(PathBuf),
    /// The source is strictly newer than the check file.
    SourceNewer(PathBuf),
    /// The source's timestamp could not be read.
    SourceUnreadable(PathBuf),
    /// The check file is at least as new as the source.
    UpToDate(PathBuf),
}

impl Staleness {
    pub fn must_run(&self) -> bool {
        !matches!(self, Staleness::UpToDate(_))
    }
}

/// Decide whether the command has to run for `source`.
///
/// Ties do not count: a check file with the very same modification time as
/// the source is considered up to date.
pub fn check_staleness(fs: &dyn FileSystem, config: &RunConfig, source: &Path) -> Staleness {
    let Some(template) = config.check.as_deref() else {
        return Staleness::NoCheck;
    };

    let tokens = PathTokens::new(&source.to_string_lossy(), &config.base_dir, config.separator);
    let check_path = PathBuf::from(config.separator.to_native(&tokens.substitute(template)));

    if !fs.is_file(&check_path) {
        return Staleness::CheckMissing(check_path);
    }

    let source_time = match fs.modified(source) {
        Ok(t) => t,
        Err(err) => {
            debug!(path = %source.display(), error = %err, "cannot read source timestamp");
            return Staleness::SourceUnreadable(check_path);
        }
    };

    match fs.modified(&check_path) {
        Ok(check_time) if source_time > check_time => Staleness::SourceNewer(check_path),
        Ok(_) => Staleness::UpToDate(check_path),
        Err(err) => {
            debug!(path = %check_path.display(), error = %err, "cannot read check timestamp");
            Staleness::CheckMissing(check_path)
        }
    }
}

/// Boolean form of [`check_staleness`].
pub fn must_run(fs: &dyn FileSystem, config: &RunConfig, source: &Path) -> bool {
    check_staleness(fs, config, source).must_run()
}
