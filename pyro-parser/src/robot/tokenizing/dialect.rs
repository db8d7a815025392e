//! Cell-delimiting conventions
//!
//! Robot files come in two plain-text flavours: tab separated (`.tsv`) and
//! space separated (`.txt`, `.robot`), the latter also accepting the pipe
//! table form. Anything else is read as [`Dialect::Unsupported`], which
//! tokenizes to nothing.

use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Cells separated by literal tab characters
    TabSeparated,
    /// Cells separated by two or more spaces, or by ` | ` in pipe rows
    SpaceSeparated,
    /// Degenerate dialect producing an empty row sequence
    #[default]
    Unsupported,
}

impl Dialect {
    /// Pick a dialect from a file extension (without the leading dot).
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "tsv" => Dialect::TabSeparated,
            "txt" | "robot" => Dialect::SpaceSeparated,
            _ => Dialect::Unsupported,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Dialect::from_extension)
            .unwrap_or_default()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::TabSeparated => "tab",
            Dialect::SpaceSeparated => "space",
            Dialect::Unsupported => "unsupported",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Dialect::Unsupported)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a dialect name is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialectError {
    Unknown(String),
}

impl fmt::Display for DialectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialectError::Unknown(name) => write!(
                f,
                "Unknown dialect '{}' (expected one of: tab, space, unsupported)",
                name
            ),
        }
    }
}

impl std::error::Error for DialectError {}

impl FromStr for Dialect {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tab" | "tsv" => Ok(Dialect::TabSeparated),
            "space" | "txt" | "robot" => Ok(Dialect::SpaceSeparated),
            "unsupported" | "none" => Ok(Dialect::Unsupported),
            _ => Err(DialectError::Unknown(s.to_string())),
        }
    }
}
