//! Access to the external LookML parser.
//!
//! The core never parses LookML itself. A [`LookmlParser`] turns a
//! repository into the JSON that [`LookmlDocument`] is built from.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::lookml::{loader::LoadError, LookmlDocument};

/// Default parser executable.
pub const DEFAULT_PARSER_PROGRAM: &str = "lookml-parser";

/// Produces parser JSON for a LookML repository.
pub trait LookmlParser {
    /// Returns the JSON describing every file under `repo`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be produced.
    fn parse(&self, repo: &Path) -> Result<String, ParseError>;

    /// Parses `repo` and builds the resolved document.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the output is malformed.
    fn load(&self, repo: &Path) -> Result<LookmlDocument, ParseError> {
        let json = self.parse(repo)?;
        Ok(LookmlDocument::from_json_str(&json)?)
    }
}

/// Errors from producing or loading parser output.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ParseError {
    /// The repository root holds no `.lkml` files.
    #[error("no .lkml files found in {}", path.display())]
    #[diagnostic(code(lookmlint::parser::no_files))]
    NoLookmlFiles {
        /// The repository path.
        path: PathBuf,
    },

    /// The parser could not be started.
    #[error("failed to run `{program}`: {source}")]
    #[diagnostic(
        code(lookmlint::parser::spawn),
        help("install it with `npm install -g lookml-parser` or pass --json")
    )]
    Spawn {
        /// The executable that failed.
        program: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The parser exited unsuccessfully.
    #[error("`{program}` exited with {status}: {stderr}")]
    #[diagnostic(code(lookmlint::parser::failed))]
    Failed {
        /// The executable.
        program: String,
        /// Exit status description.
        status: String,
        /// Captured standard error.
        stderr: String,
    },

    /// A parser JSON file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    #[diagnostic(code(lookmlint::parser::io))]
    Io {
        /// The file that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Invalid glob built from the repository path.
    #[error("invalid repository path pattern: {0}")]
    #[diagnostic(code(lookmlint::parser::pattern))]
    Pattern(#[from] glob::PatternError),

    /// The parser output is malformed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),
}

/// Runs the `lookml-parser` executable inside the repository.
#[derive(Debug, Clone)]
pub struct ExternalParser {
    program: String,
}

impl Default for ExternalParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ExternalParser {
    /// Creates a parser invoking [`DEFAULT_PARSER_PROGRAM`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PARSER_PROGRAM.to_string(),
        }
    }

    /// Sets the executable to run.
    #[must_use]
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn has_lookml_files(repo: &Path) -> Result<bool, ParseError> {
        let pattern = format!("{}/*.lkml", glob::Pattern::escape(&repo.to_string_lossy()));
        Ok(glob::glob(&pattern)?.flatten().next().is_some())
    }
}

impl LookmlParser for ExternalParser {
    fn parse(&self, repo: &Path) -> Result<String, ParseError> {
        if !Self::has_lookml_files(repo)? {
            return Err(ParseError::NoLookmlFiles {
                path: repo.to_path_buf(),
            });
        }

        info!("Parsing LookML in {} with {}", repo.display(), self.program);
        let output = Command::new(&self.program)
            .args(["--input=*.lkml", "--whitespace=2"])
            .current_dir(repo)
            .output()
            .map_err(|e| ParseError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(ParseError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!("Parser produced {} bytes", output.stdout.len());
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Reads parser JSON produced ahead of time.
#[derive(Debug, Clone)]
pub struct JsonFileParser {
    path: PathBuf,
}

impl JsonFileParser {
    /// Creates a parser reading `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LookmlParser for JsonFileParser {
    fn parse(&self, _repo: &Path) -> Result<String, ParseError> {
        debug!("Reading parser output from {}", self.path.display());
        std::fs::read_to_string(&self.path).map_err(|e| ParseError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}
