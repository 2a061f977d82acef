// src/select/pattern.rs

use std::fmt;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::errors::{FilerunError, Result};

/// `*.ext` fragments separated by `;`, e.g. `*.txt;*.m?;*.tar*`.
static GLOB_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\.[A-Za-z0-9_?*]+(;\*\.[A-Za-z0-9_?*]+)*$").expect("static glob-list regex")
});

/// Compiled file filter.
///
/// Built once at startup by [`Filter::compile`]; the original filter string
/// is not kept around.
#[derive(Clone)]
pub enum Filter {
    /// `*` or an empty filter.
    MatchAll,
    /// A case-insensitive regular expression, either given directly or
    /// translated from a glob list.
    Regex(Regex),
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::MatchAll => f.write_str("MatchAll"),
            Filter::Regex(re) => f.debug_tuple("Regex").field(&re.as_str()).finish(),
        }
    }
}

impl Filter {
    /// Compile a user filter.
    ///
    /// - `*` and `""` match everything.
    /// - A glob list (`*.txt;*.md`) becomes `^.*\.txt$|^.*\.md$`.
    /// - Anything else is used verbatim as a regular expression.
    pub fn compile(filter: &str) -> Result<Self> {
        let pattern = filter_to_pattern(filter);
        if pattern.is_empty() {
            return Ok(Filter::MatchAll);
        }

        let re = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| FilerunError::InvalidFilter {
                pattern: pattern.clone(),
                source,
            })?;

        Ok(Filter::Regex(re))
    }

    /// Test a full path (as a string) against the filter.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Filter::MatchAll => true,
            Filter::Regex(re) => re.is_match(path),
        }
    }
}

/// Normalize a filter string into the regular expression that will be
/// compiled. Returns an empty string for "match everything".
pub fn filter_to_pattern(filter: &str) -> String {
    if filter == "*" {
        return String::new();
    }
    if GLOB_LIST.is_match(filter) {
        return filter
            .split(';')
            .map(glob_fragment_to_regex)
            .collect::<Vec<_>>()
            .join("|");
    }
    filter.to_string()
}

fn glob_fragment_to_regex(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len() + 8);
    out.push('^');
    for c in fragment.chars() {
        match c {
            '.' => out.push_str(r"\."),
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            other => out.push(other),
        }
    }
    out.push('$');
    out
}
