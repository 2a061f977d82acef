// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::FileConfig;
use crate::errors::Result;

/// Load a config file from a given path.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<FileConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: FileConfig = toml::from_str(&contents)?;

    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Load the config file the CLI points at, or the default one if it exists.
///
/// - An explicit path must exist and parse.
/// - Without an explicit path, [`default_config_path`] is used when present,
///   otherwise an empty config is returned.
pub fn load_optional(explicit: Option<&str>) -> Result<FileConfig> {
    match explicit {
        Some(path) => load_from_path(path),
        None => {
            let path = default_config_path();
            if path.is_file() {
                load_from_path(path)
            } else {
                Ok(FileConfig::default())
            }
        }
    }
}

/// `Filerun.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Filerun.toml")
}
