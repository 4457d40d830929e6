//! # lookmlint-rules
//!
//! Built-in checks for lookmlint.
//!
//! Every check is a pure function over a resolved
//! [`LookmlDocument`](lookmlint_core::LookmlDocument) returning plain maps
//! and lists; an empty result means no issues.
//!
//! ## Available Checks
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | LK001 | `labels` | Acronyms in the wrong case and abbreviations in labels |
//! | LK002 | `raw-sql-refs` | Raw `table.column` references in join `sql_on` |
//! | LK003 | `primary-keys` | Views without a `primary_key` dimension |
//! | LK004 | `unused-includes` | Model includes not used by any explore |
//! | LK005 | `unused-view-files` | Views not used by any explore |
//! | LK006 | `duplicate-view-labels` | Views sharing the same label |
//! | LK007 | `missing-sql-definitions` | Views and fields without an SQL definition |
//!
//! ## Usage
//!
//! ```ignore
//! use lookmlint_core::{LintConfig, LookmlDocument};
//! use lookmlint_rules::lint;
//!
//! let doc = LookmlDocument::from_json_str(&json)?;
//! let report = lint(&doc, &LintConfig::default());
//! if !report.is_empty() {
//!     println!("{}", serde_yaml::to_string(&report)?);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod check;
mod duplicate_view_labels;
mod labels;
mod missing_sql_definitions;
mod primary_keys;
mod report;
mod sql_references;
mod unused_includes;
mod unused_view_files;

pub use check::{Check, UnknownCheck};
pub use duplicate_view_labels::lint_duplicate_view_labels;
pub use labels::{lint_labels, IssuesByLabel, LabelIssues};
pub use missing_sql_definitions::{lint_missing_view_sql_definitions, MissingSqlDefinitions};
pub use primary_keys::lint_view_primary_keys;
pub use report::{lint, lint_checks, LintReport, Section};
pub use sql_references::{lint_sql_references, RawSqlRefs};
pub use unused_includes::lint_unused_includes;
pub use unused_view_files::lint_unused_view_files;

/// Re-export core types for convenience.
pub use lookmlint_core::{LintConfig, LookmlDocument};

#[cfg(test)]
mod test_support {
    use lookmlint_core::LookmlDocument;
    use serde_json::{json, Map, Value};

    /// Builds a document with the given view files and one `shop` model.
    pub(crate) fn document(views: Value, explores: Value) -> LookmlDocument {
        LookmlDocument::from_value(json!({
            "file": {
                "view": views,
                "model": { "shop": { "model": { "shop": {
                    "_model": "shop",
                    "explores": explores
                } } } }
            }
        }))
        .expect("test document should load")
    }

    /// Builds view files declaring bare views with the given names.
    pub(crate) fn view_file(names: &[&str]) -> Value {
        let files: Map<String, Value> = names
            .iter()
            .map(|name| {
                (
                    (*name).to_string(),
                    json!({ "view": { (*name): { "_view": name } } }),
                )
            })
            .collect();
        Value::Object(files)
    }
}
