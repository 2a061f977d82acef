// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::select::Filter;
use crate::types::Separator;

/// Optional config file, read from TOML.
///
/// Every key is optional and is overridden by the matching CLI flag:
///
/// ```toml
/// filter = "*.md;*.markdown"
/// check = "$D\\html\\$N.html"
/// verbose = true
/// separator = "slash"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default file filter.
    #[serde(default)]
    pub filter: Option<String>,

    /// Default check-path template.
    #[serde(default)]
    pub check: Option<String>,

    #[serde(default)]
    pub verbose: Option<bool>,

    #[serde(default)]
    pub dry_run: Option<bool>,

    /// Await every launched program before moving on.
    #[serde(default)]
    pub wait: Option<bool>,

    #[serde(default)]
    pub separator: Option<Separator>,
}

/// Where candidate paths come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Recurse into this (resolved) directory.
    Directory(PathBuf),
    /// Read one path per line from this file.
    List(PathBuf),
}

/// The program to launch and its argument templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Fully resolved run configuration.
///
/// Built once at startup and passed by reference to every component; it is
/// never mutated during the run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: InputSource,
    /// Normalized scan root used for `$R`; empty in list mode.
    pub base_dir: String,
    pub filter: Filter,
    pub check: Option<String>,
    pub command: CommandSpec,
    pub separator: Separator,
    pub verbose: bool,
    pub dry_run: bool,
    pub wait: bool,
}
