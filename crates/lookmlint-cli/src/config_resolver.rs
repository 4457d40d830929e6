//! Locating and loading the lookmlint configuration for a repository.
//!
//! Lookup order, first hit wins:
//!
//! 1. `--config FILE`, syntax picked from its extension
//! 2. the repository files in [`REPO_CONFIG_FILES`]
//! 3. `config.yml` in the user config directory
//!
//! When nothing is found the built-in defaults apply.

use anyhow::{Context, Result};
use lookmlint_core::{ConfigFormat, LintConfig};
use std::path::{Path, PathBuf};

/// Repository config files with their syntax, in lookup order.
///
/// The first entry is the file `lookmlint init` writes.
pub const REPO_CONFIG_FILES: [(&str, ConfigFormat); 3] = [
    (".lintconfig.yml", ConfigFormat::Yaml),
    (".lintconfig.yaml", ConfigFormat::Yaml),
    ("lookmlint.toml", ConfigFormat::Toml),
];

const USER_CONFIG_FILE: &str = "config.yml";

/// Which lookup step produced a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// `--config` flag.
    Flag,
    /// The linted repository.
    Repo,
    /// The user config directory.
    User,
}

/// A located configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// File to read.
    pub path: PathBuf,
    /// Syntax of the file.
    pub format: ConfigFormat,
    /// Lookup step that found it.
    pub origin: ConfigOrigin,
}

impl ConfigFile {
    fn new(path: PathBuf, format: ConfigFormat, origin: ConfigOrigin) -> Self {
        Self {
            path,
            format,
            origin,
        }
    }

    /// Reads and parses the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed.
    pub fn load(&self) -> Result<LintConfig> {
        if self.origin == ConfigOrigin::User {
            tracing::info!("Using user config: {}", self.path.display());
        }
        LintConfig::read(&self.path, self.format)
            .with_context(|| format!("Failed to load config: {}", self.path.display()))
    }
}

/// Existing repository config files, in lookup order.
pub fn repo_config_files(repo: &Path) -> impl Iterator<Item = ConfigFile> + '_ {
    REPO_CONFIG_FILES
        .into_iter()
        .map(move |(name, format)| ConfigFile::new(repo.join(name), format, ConfigOrigin::Repo))
        .filter(|file| file.path.is_file())
}

/// Path `lookmlint init` writes for `repo`.
#[must_use]
pub fn init_target(repo: &Path) -> PathBuf {
    repo.join(REPO_CONFIG_FILES[0].0)
}

/// Finds the configuration for `repo`; `None` means defaults.
#[must_use]
pub fn locate(repo: &Path, flag: Option<&Path>) -> Option<ConfigFile> {
    locate_with_user_dir(repo, flag, user_config_dir().as_deref())
}

fn locate_with_user_dir(
    repo: &Path,
    flag: Option<&Path>,
    user_dir: Option<&Path>,
) -> Option<ConfigFile> {
    if let Some(path) = flag {
        return Some(ConfigFile::new(
            path.to_path_buf(),
            ConfigFormat::from_path(path),
            ConfigOrigin::Flag,
        ));
    }

    let found = repo_config_files(repo).next().or_else(|| {
        let path = user_dir?.join(USER_CONFIG_FILE);
        path.is_file()
            .then(|| ConfigFile::new(path, ConfigFormat::Yaml, ConfigOrigin::User))
    });
    match &found {
        Some(file) => tracing::debug!("Found config: {}", file.path.display()),
        None => tracing::debug!("No config found, using defaults"),
    }
    found
}

/// `$LOOKMLINT_CONFIG_DIR`, else `~/.lookmlint`.
fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("LOOKMLINT_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|home| home.join(".lookmlint")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn flag_wins_and_picks_format_from_extension() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".lintconfig.yml"), "").unwrap();
        let flag = tmp.path().join("ci.toml");

        let file = locate_with_user_dir(tmp.path(), Some(&flag), None).unwrap();
        assert_eq!(file, ConfigFile::new(flag, ConfigFormat::Toml, ConfigOrigin::Flag));
    }

    #[test]
    fn repo_files_follow_lookup_order() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("lookmlint.toml"), "").unwrap();
        fs::write(tmp.path().join(".lintconfig.yaml"), "").unwrap();

        let names: Vec<PathBuf> = repo_config_files(tmp.path()).map(|f| f.path).collect();
        assert_eq!(
            names,
            vec![
                tmp.path().join(".lintconfig.yaml"),
                tmp.path().join("lookmlint.toml")
            ]
        );

        let file = locate_with_user_dir(tmp.path(), None, None).unwrap();
        assert_eq!(file.format, ConfigFormat::Yaml);
        assert_eq!(file.origin, ConfigOrigin::Repo);
    }

    #[test]
    fn toml_repo_config_is_read_as_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("lookmlint.toml"), "abbreviations = [\"qty\"]\n").unwrap();

        let config = locate_with_user_dir(tmp.path(), None, None)
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(config.abbreviations, vec!["qty"]);
    }

    #[test]
    fn user_config_is_the_fallback() {
        let repo = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(user.path().join(USER_CONFIG_FILE), "acronyms: [ID]\n").unwrap();

        let file = locate_with_user_dir(repo.path(), None, Some(user.path())).unwrap();
        assert_eq!(file.origin, ConfigOrigin::User);
        assert_eq!(file.load().unwrap().acronyms, vec!["ID"]);
    }

    #[test]
    fn nothing_found_means_defaults() {
        let repo = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();

        assert_eq!(locate_with_user_dir(repo.path(), None, Some(user.path())), None);
    }

    #[test]
    fn init_target_is_first_lookup_candidate() {
        let tmp = TempDir::new().unwrap();
        let target = init_target(tmp.path());
        fs::write(&target, "").unwrap();

        let file = locate_with_user_dir(tmp.path(), None, None).unwrap();
        assert_eq!(file.path, target);
    }

    #[test]
    fn broken_file_names_the_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lookmlint.toml");
        fs::write(&path, "acronyms = [").unwrap();

        let err = ConfigFile::new(path, ConfigFormat::Toml, ConfigOrigin::Repo)
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}
