//! Configuration types for lookmlint.
//!
//! The configuration is read from `.lintconfig.yml` (YAML) or
//! `lookmlint.toml` (TOML); both carry the same keys:
//!
//! ```yaml
//! acronyms: [ID, SQL]
//! abbreviations: [qty, amt]
//! checks:
//!   unused-view-files:
//!     enabled: false
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::labels::LabelRules;

/// Top-level configuration for lookmlint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Words that must be written upper-case in labels.
    #[serde(default)]
    pub acronyms: Vec<String>,

    /// Words that must be spelled out in labels.
    #[serde(default)]
    pub abbreviations: Vec<String>,

    /// Per-check configurations, keyed by check name.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

/// Configuration file syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yml` / `.yaml`
    Yaml,
    /// `.toml`
    Toml,
}

impl ConfigFormat {
    /// Picks the format from a file extension; anything but `.toml` is YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

impl LintConfig {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML or TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::read(path, ConfigFormat::from_path(path))
    }

    /// Loads configuration from a file whose syntax is already known.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn read(path: &Path, format: ConfigFormat) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, format)
    }

    /// Parses configuration text in the given format.
    ///
    /// Empty YAML text yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is invalid.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Yaml if content.trim().is_empty() => Ok(Self::default()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
                message: e.to_string(),
            }),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| ConfigError::Parse {
                message: e.to_string(),
            }),
        }
    }

    /// Returns the label word lists.
    #[must_use]
    pub fn label_rules(&self) -> LabelRules<'_> {
        LabelRules::new(&self.acronyms, &self.abbreviations)
    }

    /// Checks if a check is enabled; unlisted checks are enabled.
    #[must_use]
    pub fn is_check_enabled(&self, name: &str) -> bool {
        self.checks
            .get(name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }
}

/// Per-check configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Whether this check runs.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(lookmlint::config::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    #[diagnostic(code(lookmlint::config::parse))]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LintConfig::default();
        assert!(config.acronyms.is_empty());
        assert!(config.label_rules().is_empty());
        assert!(config.is_check_enabled("unused-includes"));
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r"
acronyms:
  - ID
  - SQL
abbreviations:
  - qty
checks:
  unused-view-files:
    enabled: false
";
        let config = LintConfig::parse(yaml, ConfigFormat::Yaml).expect("Failed to parse");
        assert_eq!(config.acronyms, vec!["ID", "SQL"]);
        assert_eq!(config.abbreviations, vec!["qty"]);
        assert!(!config.is_check_enabled("unused-view-files"));
        assert!(config.is_check_enabled("unused-includes"));
    }

    #[test]
    fn test_yaml_and_toml_agree() {
        let yaml = "acronyms: [ID]\nabbreviations: [qty]\nchecks:\n  labels:\n    enabled: false\n";
        let toml = r#"
acronyms = ["ID"]
abbreviations = ["qty"]

[checks.labels]
enabled = false
"#;
        let from_yaml = LintConfig::parse(yaml, ConfigFormat::Yaml).unwrap();
        let from_toml = LintConfig::parse(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(from_yaml, from_toml);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = LintConfig::parse("\n", ConfigFormat::Yaml).unwrap();
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = LintConfig::parse("acronyms: {", ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("lookmlint.toml")),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new(".lintconfig.yml")),
            ConfigFormat::Yaml
        );
    }

    #[test]
    fn test_from_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LintConfig::from_file(&dir.path().join("missing.yml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_read_uses_given_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lookmlint.conf");
        std::fs::write(&path, "acronyms = [\"ID\"]\n").unwrap();

        let config = LintConfig::read(&path, ConfigFormat::Toml).unwrap();
        assert_eq!(config.acronyms, vec!["ID"]);
        assert!(LintConfig::from_file(&path).is_err());
    }
}
