use std::path::PathBuf;

use filerun::config::{CommandSpec, InputSource, RunConfig};
use filerun::select::Filter;
use filerun::tokens::normalize_base_dir;
use filerun::types::Separator;

/// Builder for `RunConfig` to simplify test setup.
///
/// Defaults: list mode over `list.txt`, match-all filter, no check path,
/// backslash separator, program `echo` without arguments.
pub struct RunConfigBuilder {
    source: InputSource,
    filter: String,
    check: Option<String>,
    program: String,
    args: Vec<String>,
    separator: Separator,
    verbose: bool,
    dry_run: bool,
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self {
            source: InputSource::List(PathBuf::from("list.txt")),
            filter: "*".to_string(),
            check: None,
            program: "echo".to_string(),
            args: Vec::new(),
            separator: Separator::Backslash,
            verbose: false,
            dry_run: false,
        }
    }

    pub fn directory(mut self, root: &str) -> Self {
        self.source = InputSource::Directory(PathBuf::from(root));
        self
    }

    pub fn list(mut self, list: &str) -> Self {
        self.source = InputSource::List(PathBuf::from(list));
        self
    }

    pub fn filter(mut self, filter: &str) -> Self {
        self.filter = filter.to_string();
        self
    }

    pub fn check(mut self, template: &str) -> Self {
        self.check = Some(template.to_string());
        self
    }

    pub fn program(mut self, program: &str) -> Self {
        self.program = program.to_string();
        self
    }

    pub fn arg(mut self, template: &str) -> Self {
        self.args.push(template.to_string());
        self
    }

    pub fn separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    pub fn verbose(mut self, val: bool) -> Self {
        self.verbose = val;
        self
    }

    pub fn dry_run(mut self, val: bool) -> Self {
        self.dry_run = val;
        self
    }

    pub fn build(self) -> RunConfig {
        let base_dir = match &self.source {
            InputSource::Directory(root) => {
                normalize_base_dir(&root.to_string_lossy(), self.separator)
            }
            InputSource::List(_) => String::new(),
        };

        RunConfig {
            source: self.source,
            base_dir,
            filter: Filter::compile(&self.filter).expect("Failed to compile filter in builder"),
            check: self.check,
            command: CommandSpec::new(self.program, self.args),
            separator: self.separator,
            verbose: self.verbose,
            dry_run: self.dry_run,
            wait: false,
        }
    }
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
