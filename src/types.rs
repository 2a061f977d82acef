use std::str::FromStr;
use serde::Deserialize;

/// Directory separator that path tokens are normalized to.
///
/// Every `/` and `\` in a file path is rewritten to this character before
/// `$P`, `$D` and `$R` are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    #[default]
    Backslash,
    Slash,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Backslash => '\\',
            Separator::Slash => '/',
        }
    }

    /// Rewrite both separator styles in `path` to this separator.
    pub fn normalize(self, path: &str) -> String {
        let sep = self.as_char();
        path.chars()
            .map(|c| if c == '/' || c == '\\' { sep } else { c })
            .collect()
    }

    /// Rewrite this separator to the platform's own, so an expanded
    /// template can be handed to the filesystem.
    pub fn to_native(self, path: &str) -> String {
        let sep = self.as_char();
        if sep == std::path::MAIN_SEPARATOR {
            return path.to_string();
        }
        path.replace(sep, std::path::MAIN_SEPARATOR_STR)
    }
}

impl FromStr for Separator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "backslash" | "\\" => Ok(Separator::Backslash),
            "slash" | "/" => Ok(Separator::Slash),
            other => Err(format!(
                "invalid separator: {other} (expected \"backslash\" or \"slash\")"
            )),
        }
    }
}
