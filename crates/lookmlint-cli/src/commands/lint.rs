//! Lint command implementation.

use anyhow::{Context, Result};
use lookmlint_core::{ExternalParser, JsonFileParser, LintConfig, LookmlParser};
use lookmlint_rules::{lint, lint_checks, Check};
use std::path::PathBuf;

use crate::config_resolver::ConfigFile;
use crate::OutputFormat;

/// Arguments of the lint command.
pub struct LintOptions {
    /// Repository to lint.
    pub repo: PathBuf,
    /// Pre-produced parser output, bypassing the parser.
    pub json: Option<PathBuf>,
    /// Parser executable.
    pub parser: String,
    /// Comma-separated check selection.
    pub checks: Option<String>,
    /// Output format.
    pub format: OutputFormat,
}

/// Runs the lint command.
pub fn run(options: &LintOptions, config_file: Option<&ConfigFile>) -> Result<()> {
    let config = load_config(config_file)?;

    let selected = options
        .checks
        .as_deref()
        .map(Check::parse_list)
        .transpose()
        .context("Invalid --checks")?;

    let parser: Box<dyn LookmlParser> = match &options.json {
        Some(path) => Box::new(JsonFileParser::new(path)),
        None => Box::new(ExternalParser::new().program(options.parser.as_str())),
    };
    let doc = parser
        .load(&options.repo)
        .with_context(|| format!("Failed to load LookML from {}", options.repo.display()))?;

    tracing::info!(
        "Loaded {} model(s) and {} view(s)",
        doc.models().len(),
        doc.views().len()
    );

    let report = match selected {
        Some(checks) => lint_checks(&doc, &config, &checks),
        None => lint(&doc, &config),
    };

    super::output::print(&report, options.format)?;

    // Exit with error code if anything was reported
    if !report.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(file: Option<&ConfigFile>) -> Result<LintConfig> {
    let Some(file) = file else {
        return Ok(LintConfig::default());
    };
    let config = file.load()?;

    for name in config.checks.keys() {
        if name.parse::<Check>().is_err() {
            tracing::warn!("Unknown check in config: {}", name);
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_resolver::locate;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn no_config_file_gives_default_config() {
        let config = load_config(None).unwrap();
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn loads_repo_yaml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".lintconfig.yml"), "acronyms: [ID]\n").unwrap();

        let file = locate(tmp.path(), None);
        let config = load_config(file.as_ref()).unwrap();
        assert_eq!(config.acronyms, vec!["ID"]);
    }

    #[test]
    fn unknown_checks_in_config_are_tolerated() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.yml");
        fs::write(&path, "checks:\n  no-such-check:\n    enabled: false\n").unwrap();

        let file = locate(tmp.path(), Some(&path));
        let config = load_config(file.as_ref()).unwrap();
        assert!(!config.is_check_enabled("no-such-check"));
    }
}
