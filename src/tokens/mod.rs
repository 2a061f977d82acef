// src/tokens/mod.rs

//! Path tokens and placeholder substitution.
//!
//! A template may contain any of six placeholders, each replaced by a value
//! derived from the current file path:
//!
//! | placeholder | value                                             |
//! |-------------|---------------------------------------------------|
//! | `$P`        | full path                                         |
//! | `$D`        | containing directory                              |
//! | `$R`        | directory relative to the base directory, or `.`  |
//! | `$F`        | file name with extension                          |
//! | `$N`        | file name without extension                       |
//! | `$E`        | extension including the dot                       |
//!
//! Substitution is a single left-to-right pass. Replacement text is never
//! scanned again, so a path that happens to contain `$D` is copied as-is.

use crate::types::Separator;

/// Values for the six placeholders of one file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTokens {
    pub path: String,
    pub dir: String,
    pub rel_dir: String,
    pub file_name: String,
    pub stem: String,
    pub extension: String,
}

impl PathTokens {
    /// Derive the tokens of `path`.
    ///
    /// `base_dir` must already be normalized to `sep` (see
    /// [`normalize_base_dir`]); it is empty in list mode.
    pub fn new(path: &str, base_dir: &str, sep: Separator) -> Self {
        let path = sep.normalize(path);
        let sep_char = sep.as_char();

        let (dir, file_name) = match path.rfind(sep_char) {
            Some(idx) => (path[..idx].to_string(), path[idx + 1..].to_string()),
            None => (String::new(), path.clone()),
        };

        let rel = dir.strip_prefix(base_dir).unwrap_or(&dir);
        let rel_dir = if rel.is_empty() {
            ".".to_string()
        } else {
            rel.to_string()
        };

        // A trailing dot belongs to neither: `archive.` has stem `archive`
        // and no extension.
        let (stem, extension) = match file_name.rfind('.') {
            Some(idx) if idx + 1 < file_name.len() => (
                file_name[..idx].to_string(),
                file_name[idx..].to_string(),
            ),
            Some(idx) => (file_name[..idx].to_string(), String::new()),
            None => (file_name.clone(), String::new()),
        };

        Self {
            path,
            dir,
            rel_dir,
            file_name,
            stem,
            extension,
        }
    }

    /// Value for a placeholder letter, if it is one of the six.
    pub fn get(&self, key: char) -> Option<&str> {
        match key {
            'P' => Some(&self.path),
            'D' => Some(&self.dir),
            'R' => Some(&self.rel_dir),
            'F' => Some(&self.file_name),
            'N' => Some(&self.stem),
            'E' => Some(&self.extension),
            _ => None,
        }
    }

    /// Replace every placeholder in `template`.
    pub fn substitute(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + self.path.len());
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '$' {
                if let Some(value) = chars.peek().and_then(|k| self.get(*k)) {
                    out.push_str(value);
                    chars.next();
                    continue;
                }
            }
            out.push(c);
        }

        out
    }
}

/// Normalize a base directory for prefix stripping: unify separators and
/// drop trailing ones.
pub fn normalize_base_dir(base_dir: &str, sep: Separator) -> String {
    let normalized = sep.normalize(base_dir);
    normalized.trim_end_matches(sep.as_char()).to_string()
}

/// Expand `template` for `path` in one call.
pub fn substitute(template: &str, path: &str, base_dir: &str, sep: Separator) -> String {
    PathTokens::new(path, base_dir, sep).substitute(template)
}
