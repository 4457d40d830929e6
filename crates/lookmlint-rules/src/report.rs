//! Running checks and collecting their results.

use std::collections::BTreeMap;

use lookmlint_core::{default_label, LintConfig, LookmlDocument};
use serde::Serialize;
use tracing::{debug, info};

use crate::check::Check;
use crate::labels::{lint_labels, LabelIssues};
use crate::missing_sql_definitions::{lint_missing_view_sql_definitions, MissingSqlDefinitions};
use crate::sql_references::{lint_sql_references, RawSqlRefs};
use crate::{
    duplicate_view_labels::lint_duplicate_view_labels, primary_keys::lint_view_primary_keys,
    unused_includes::lint_unused_includes, unused_view_files::lint_unused_view_files,
};

/// Results of every check that ran.
///
/// Each field is empty when its check found nothing (or did not run);
/// empty fields are skipped when serialized, so a clean run serializes to
/// an empty map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LintReport {
    /// Views no explore uses.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unused_view_files: Vec<String>,
    /// model → includes no explore uses.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub unused_includes: BTreeMap<String, Vec<String>>,
    /// Views without a primary key.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub views_missing_primary_keys: Vec<String>,
    /// Label issues by category.
    #[serde(skip_serializing_if = "LabelIssues::is_empty")]
    pub label_issues: LabelIssues,
    /// Join conditions with raw SQL references.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub raw_sql_refs: RawSqlRefs,
    /// label → views sharing it.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub duplicate_view_labels: BTreeMap<String, Vec<String>>,
    /// Views and fields without SQL.
    #[serde(skip_serializing_if = "MissingSqlDefinitions::is_empty")]
    pub missing_sql_definitions: MissingSqlDefinitions,
}

/// A titled, YAML-rendered part of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Human-readable heading (e.g., "Unused Includes").
    pub title: String,
    /// YAML body.
    pub body: String,
}

impl LintReport {
    /// Returns true if no check found anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unused_view_files.is_empty()
            && self.unused_includes.is_empty()
            && self.views_missing_primary_keys.is_empty()
            && self.label_issues.is_empty()
            && self.raw_sql_refs.is_empty()
            && self.duplicate_view_labels.is_empty()
            && self.missing_sql_definitions.is_empty()
    }

    /// Returns the checks that reported something.
    #[must_use]
    pub fn failed_checks(&self) -> Vec<Check> {
        Check::ALL
            .into_iter()
            .filter(|check| !self.is_clean(*check))
            .collect()
    }

    /// Returns true if `check` reported nothing.
    #[must_use]
    pub fn is_clean(&self, check: Check) -> bool {
        match check {
            Check::Labels => self.label_issues.is_empty(),
            Check::RawSqlRefs => self.raw_sql_refs.is_empty(),
            Check::PrimaryKeys => self.views_missing_primary_keys.is_empty(),
            Check::UnusedIncludes => self.unused_includes.is_empty(),
            Check::UnusedViewFiles => self.unused_view_files.is_empty(),
            Check::DuplicateViewLabels => self.duplicate_view_labels.is_empty(),
            Check::MissingSqlDefinitions => self.missing_sql_definitions.is_empty(),
        }
    }

    /// Renders every non-empty result as a titled YAML section.
    ///
    /// Label issues get one section per category.
    ///
    /// # Errors
    ///
    /// Returns an error if YAML serialization fails.
    pub fn sections(&self) -> Result<Vec<Section>, serde_yaml::Error> {
        let mut sections = Vec::new();
        if !self.unused_view_files.is_empty() {
            sections.push(section("Unused View Files", &self.unused_view_files)?);
        }
        if !self.unused_includes.is_empty() {
            sections.push(section("Unused Includes", &self.unused_includes)?);
        }
        if !self.views_missing_primary_keys.is_empty() {
            sections.push(section(
                "Views Missing Primary Keys",
                &self.views_missing_primary_keys,
            )?);
        }
        if !self.raw_sql_refs.is_empty() {
            sections.push(section("Raw SQL Field References", &self.raw_sql_refs)?);
        }
        if !self.duplicate_view_labels.is_empty() {
            sections.push(section("Duplicate View Labels", &self.duplicate_view_labels)?);
        }
        if !self.missing_sql_definitions.is_empty() {
            sections.push(section(
                "Missing SQL Definitions",
                &self.missing_sql_definitions,
            )?);
        }

        let labels = &self.label_issues;
        if !labels.explores.is_empty() {
            sections.push(label_section("explores", &labels.explores)?);
        }
        if !labels.explore_views.is_empty() {
            sections.push(label_section("explore_views", &labels.explore_views)?);
        }
        if !labels.fields.is_empty() {
            sections.push(label_section("fields", &labels.fields)?);
        }
        if !labels.views.is_empty() {
            sections.push(label_section("views", &labels.views)?);
        }
        Ok(sections)
    }
}

fn section<T: Serialize>(title: &str, issues: &T) -> Result<Section, serde_yaml::Error> {
    Ok(Section {
        title: title.to_string(),
        body: serde_yaml::to_string(issues)?,
    })
}

fn label_section<T: Serialize>(category: &str, issues: &T) -> Result<Section, serde_yaml::Error> {
    section(&format!("Label Issues - {}", default_label(category)), issues)
}

/// Runs every check the configuration enables.
#[must_use]
pub fn lint(doc: &LookmlDocument, config: &LintConfig) -> LintReport {
    let checks: Vec<Check> = Check::ALL
        .into_iter()
        .filter(|check| {
            let enabled = config.is_check_enabled(check.name());
            if !enabled {
                debug!("Skipping disabled check: {}", check.name());
            }
            enabled
        })
        .collect();
    lint_checks(doc, config, &checks)
}

/// Runs the given checks.
///
/// Checks are independent and never modify the document, so the order of
/// `checks` does not affect the result.
#[must_use]
pub fn lint_checks(doc: &LookmlDocument, config: &LintConfig, checks: &[Check]) -> LintReport {
    let mut report = LintReport::default();
    for check in checks {
        debug!("Running {} ({})", check.name(), check.code());
        match check {
            Check::Labels => report.label_issues = lint_labels(doc, config.label_rules()),
            Check::RawSqlRefs => report.raw_sql_refs = lint_sql_references(doc),
            Check::PrimaryKeys => report.views_missing_primary_keys = lint_view_primary_keys(doc),
            Check::UnusedIncludes => report.unused_includes = lint_unused_includes(doc),
            Check::UnusedViewFiles => report.unused_view_files = lint_unused_view_files(doc),
            Check::DuplicateViewLabels => {
                report.duplicate_view_labels = lint_duplicate_view_labels(doc);
            }
            Check::MissingSqlDefinitions => {
                report.missing_sql_definitions = lint_missing_view_sql_definitions(doc);
            }
        }
    }

    info!(
        "Ran {} check(s): {} reported issues",
        checks.len(),
        report.failed_checks().len()
    );
    report
}
