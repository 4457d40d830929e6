//! Check for views and fields without an SQL definition.
//!
//! # Rationale
//!
//! A view without `sql_table_name` or `derived_table` silently falls back
//! to a table named after the view. A field without `sql` silently falls
//! back to a column named after the field. Both defaults break as soon as
//! the name and the warehouse drift apart.
//!
//! `type: count` measures are exempt: they count rows, not a column.

use std::collections::BTreeMap;

use lookmlint_core::LookmlDocument;
use serde::Serialize;

/// Check code for missing SQL definitions.
pub const CODE: &str = "LK007";

/// Check name for missing SQL definitions.
pub const NAME: &str = "missing-sql-definitions";

/// Views and fields lacking an SQL definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MissingSqlDefinitions {
    /// Sorted names of views with neither `sql_table_name` nor `derived_table`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub views: Vec<String>,
    /// view → names of fields without `sql`, in declaration order.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, Vec<String>>,
}

impl MissingSqlDefinitions {
    /// Returns true if nothing is missing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty() && self.fields.is_empty()
    }
}

/// Collects views and fields that lack an SQL definition.
#[must_use]
pub fn lint_missing_view_sql_definitions(doc: &LookmlDocument) -> MissingSqlDefinitions {
    let mut missing = MissingSqlDefinitions::default();
    for view in doc.views() {
        if !view.has_sql_definition() {
            missing.views.push(view.name().to_string());
        }
        let fields: Vec<String> = view
            .fields()
            .filter(|f| f.is_missing_sql())
            .map(|f| f.name().to_string())
            .collect();
        if !fields.is_empty() {
            missing.fields.insert(view.name().to_string(), fields);
        }
    }
    missing.views.sort();
    missing
}
