//! Check for views no explore reads from.
//!
//! # Rationale
//!
//! A view that is never the base of an explore nor joined anywhere cannot
//! be queried. It is either dead code or a join someone forgot.

use lookmlint_core::LookmlDocument;

/// Check code for unused view files.
pub const CODE: &str = "LK005";

/// Check name for unused view files.
pub const NAME: &str = "unused-view-files";

/// Returns the sorted names of views no explore view references.
#[must_use]
pub fn lint_unused_view_files(doc: &LookmlDocument) -> Vec<String> {
    doc.unused_view_files()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{document, view_file};
    use serde_json::json;

    #[test]
    fn views_referenced_anywhere_are_used() {
        let doc = document(
            view_file(&["orders", "users", "stale", "archive"]),
            json!([{
                "_explore": "orders",
                "joins": [{ "_join": "buyer", "from": "users" }]
            }]),
        );
        assert_eq!(lint_unused_view_files(&doc), vec!["archive", "stale"]);
    }
}
