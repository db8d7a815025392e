//! Shared configuration loader for the pyro toolchain.
//!
//! `defaults/pyro.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`PyroConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use pyro_parser::robot::tokenizing::Dialect;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub use config::ConfigError as Error;

const DEFAULT_TOML: &str = include_str!("../defaults/pyro.default.toml");

/// Top-level configuration consumed by pyro applications.
#[derive(Debug, Clone, Deserialize)]
pub struct PyroConfig {
    pub dialects: DialectConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

/// Which dialect a file is read with, by extension.
///
/// Dialect names are anything `Dialect::from_str` accepts. A name it rejects
/// reads as `unsupported`.
#[derive(Debug, Clone, Deserialize)]
pub struct DialectConfig {
    pub extensions: HashMap<String, String>,
    pub fallback: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive, e.g. `warn` or `pyro_parser=debug`
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub pretty_json: bool,
}

impl PyroConfig {
    /// Dialect for `path`, looked up by extension (case-insensitive).
    pub fn dialect_for_path(&self, path: impl AsRef<Path>) -> Dialect {
        let extension = path.as_ref().extension().and_then(|ext| ext.to_str());
        let name = extension
            .and_then(|ext| self.extension_dialect(ext))
            .unwrap_or(&self.dialects.fallback);
        name.parse().unwrap_or_default()
    }

    /// An exact key wins; otherwise the lowest key equal ignoring ASCII case.
    fn extension_dialect(&self, extension: &str) -> Option<&str> {
        let extensions = &self.dialects.extensions;
        if let Some(name) = extensions.get(extension) {
            return Some(name);
        }
        extensions
            .iter()
            .filter(|(known, _)| known.eq_ignore_ascii_case(extension))
            .min_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, name)| name.as_str())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (CLI flags end up here).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<PyroConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PyroConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.dialects.fallback, "unsupported");
        assert_eq!(config.dialects.extensions.len(), 3);
        assert_eq!(config.logging.level, "warn");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn default_dialects_by_extension() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.dialect_for_path("a/b.tsv"), Dialect::TabSeparated);
        assert_eq!(config.dialect_for_path("b.ROBOT"), Dialect::SpaceSeparated);
        assert_eq!(config.dialect_for_path("b.txt"), Dialect::SpaceSeparated);
        assert_eq!(config.dialect_for_path("b.html"), Dialect::Unsupported);
        assert_eq!(config.dialect_for_path("Makefile"), Dialect::Unsupported);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("dialects.fallback", "space")
            .expect("override to apply")
            .set_override("output.pretty_json", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.dialect_for_path("notes"), Dialect::SpaceSeparated);
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn unknown_dialect_name_reads_as_unsupported() {
        let config = Loader::new()
            .set_override("dialects.fallback", "csv")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.dialect_for_path("x.csv"), Dialect::Unsupported);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[dialects.extensions]\nresource = \"space\"\n\n[logging]\nlevel = \"debug\"")
            .expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.dialect_for_path("common.resource"), Dialect::SpaceSeparated);
        // defaults survive alongside the user's table
        assert_eq!(config.dialect_for_path("data.tsv"), Dialect::TabSeparated);
    }

    #[test]
    fn exact_extension_key_wins_over_case_folded_one() {
        let mut config = load_defaults().expect("defaults to deserialize");
        config
            .dialects
            .extensions
            .insert("TSV".to_string(), "space".to_string());
        assert_eq!(config.dialect_for_path("data.tsv"), Dialect::TabSeparated);
        assert_eq!(config.dialect_for_path("data.TSV"), Dialect::SpaceSeparated);
        // no exact key: the case-folded match is the lowest key, "TSV"
        assert_eq!(config.dialect_for_path("data.Tsv"), Dialect::SpaceSeparated);
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new().with_file("/nonexistent/pyro.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/pyro.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.logging.level, "warn");
    }
}
