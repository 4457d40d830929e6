//! Catalogue of the available checks.

use std::fmt;
use std::str::FromStr;

use crate::{
    duplicate_view_labels, labels, missing_sql_definitions, primary_keys, sql_references,
    unused_includes, unused_view_files,
};

/// One lint pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Check {
    /// Acronyms and abbreviations in labels.
    Labels,
    /// Raw `table.column` references in join conditions.
    RawSqlRefs,
    /// Views without a primary key.
    PrimaryKeys,
    /// Includes no explore uses.
    UnusedIncludes,
    /// Views no explore uses.
    UnusedViewFiles,
    /// Views sharing a label.
    DuplicateViewLabels,
    /// Views and fields without `sql`.
    MissingSqlDefinitions,
}

impl Check {
    /// Every check, in code order.
    pub const ALL: [Self; 7] = [
        Self::Labels,
        Self::RawSqlRefs,
        Self::PrimaryKeys,
        Self::UnusedIncludes,
        Self::UnusedViewFiles,
        Self::DuplicateViewLabels,
        Self::MissingSqlDefinitions,
    ];

    /// Returns the kebab-case name (e.g., "unused-includes").
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Labels => labels::NAME,
            Self::RawSqlRefs => sql_references::NAME,
            Self::PrimaryKeys => primary_keys::NAME,
            Self::UnusedIncludes => unused_includes::NAME,
            Self::UnusedViewFiles => unused_view_files::NAME,
            Self::DuplicateViewLabels => duplicate_view_labels::NAME,
            Self::MissingSqlDefinitions => missing_sql_definitions::NAME,
        }
    }

    /// Returns the check code (e.g., "LK004").
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Labels => labels::CODE,
            Self::RawSqlRefs => sql_references::CODE,
            Self::PrimaryKeys => primary_keys::CODE,
            Self::UnusedIncludes => unused_includes::CODE,
            Self::UnusedViewFiles => unused_view_files::CODE,
            Self::DuplicateViewLabels => duplicate_view_labels::CODE,
            Self::MissingSqlDefinitions => missing_sql_definitions::CODE,
        }
    }

    /// Returns a brief description of what this check reports.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Labels => "Acronyms in the wrong case and abbreviations in labels",
            Self::RawSqlRefs => "Raw table.column references in join sql_on",
            Self::PrimaryKeys => "Views without a primary_key dimension",
            Self::UnusedIncludes => "Model includes not used by any explore",
            Self::UnusedViewFiles => "Views not used by any explore",
            Self::DuplicateViewLabels => "Views sharing the same label",
            Self::MissingSqlDefinitions => "Views and fields without an SQL definition",
        }
    }

    /// Parses a comma-separated list of check names or codes.
    ///
    /// # Errors
    ///
    /// Returns an error for the first unknown entry.
    pub fn parse_list(list: &str) -> Result<Vec<Self>, UnknownCheck> {
        let mut checks: Vec<Self> = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect::<Result<_, _>>()?;
        checks.sort();
        checks.dedup();
        Ok(checks)
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Check {
    type Err = UnknownCheck;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s || c.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCheck {
                name: s.to_string(),
            })
    }
}

/// A requested check name matched no check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
#[error("unknown check `{name}`")]
#[diagnostic(
    code(lookmlint::check::unknown),
    help("run `lookmlint list-checks` to see the available checks")
)]
pub struct UnknownCheck {
    /// The unrecognized name.
    pub name: String,
}
