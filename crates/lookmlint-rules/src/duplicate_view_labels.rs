//! Check for views sharing a label.
//!
//! # Rationale
//!
//! In the field picker, views are grouped under their label. Two views with
//! the same label merge into one group and users cannot tell their fields
//! apart.

use std::collections::BTreeMap;

use lookmlint_core::{Labeled, LookmlDocument};

/// Check code for duplicate view labels.
pub const CODE: &str = "LK006";

/// Check name for duplicate view labels.
pub const NAME: &str = "duplicate-view-labels";

/// Returns label → sorted view names, for labels used by two or more views.
#[must_use]
pub fn lint_duplicate_view_labels(doc: &LookmlDocument) -> BTreeMap<String, Vec<String>> {
    let mut by_label: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for view in doc.views() {
        by_label
            .entry(view.label().to_string())
            .or_default()
            .push(view.name().to_string());
    }
    by_label.retain(|_, views| views.len() > 1);
    for views in by_label.values_mut() {
        views.sort();
    }
    by_label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::document;
    use serde_json::json;

    #[test]
    fn groups_views_by_shared_label() {
        let doc = document(
            json!({
                "users": { "view": { "users": { "_view": "users", "label": "Customers" } } },
                "customers": { "view": { "customers": { "_view": "customers" } } },
                "orders": { "view": { "orders": { "_view": "orders" } } }
            }),
            json!([]),
        );
        let duplicates = lint_duplicate_view_labels(&doc);
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates["Customers"], vec!["customers", "users"]);
    }

    #[test]
    fn distinct_labels_are_clean() {
        let doc = document(
            json!({
                "users": { "view": { "users": { "_view": "users" } } },
                "orders": { "view": { "orders": { "_view": "orders" } } }
            }),
            json!([]),
        );
        assert!(lint_duplicate_view_labels(&doc).is_empty());
    }
}
