//! Check for views without a primary key.
//!
//! # Rationale
//!
//! Looker needs a primary key to compute symmetric aggregates correctly
//! when a view is joined with fan-out. Every view should mark one dimension
//! `primary_key: yes`.

use lookmlint_core::{LookmlDocument, View};

/// Check code for missing primary keys.
pub const CODE: &str = "LK003";

/// Check name for missing primary keys.
pub const NAME: &str = "primary-keys";

/// Returns the sorted names of views without a primary-key dimension.
#[must_use]
pub fn lint_view_primary_keys(doc: &LookmlDocument) -> Vec<String> {
    let mut missing: Vec<String> = doc
        .views()
        .iter()
        .filter(|v| !v.has_primary_key())
        .map(View::name)
        .map(String::from)
        .collect();
    missing.sort();
    missing
}
