//! Check for acronym and abbreviation misuse in labels.
//!
//! # Rationale
//!
//! Labels are what Looker users read. `Order Id` should read `Order ID`, and
//! `Qty` should be spelled `Quantity`. The word lists come from the lint
//! configuration; with empty lists this check never reports anything.
//!
//! Labels are checked on explores, explore views (after custom view labels
//! were propagated), fields and views.

use std::collections::BTreeMap;

use lookmlint_core::{LabelRules, LookmlDocument};
use serde::Serialize;

/// Check code for label issues.
pub const CODE: &str = "LK001";

/// Check name for label issues.
pub const NAME: &str = "labels";

/// Label → flagged words.
pub type IssuesByLabel = BTreeMap<String, Vec<String>>;

/// Label issues grouped by the kind of entity carrying the label.
///
/// Empty categories are skipped when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelIssues {
    /// model → explore label → issues
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub explores: BTreeMap<String, IssuesByLabel>,
    /// model → explore → explore view label → issues
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub explore_views: BTreeMap<String, BTreeMap<String, IssuesByLabel>>,
    /// view → field label → issues
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, IssuesByLabel>,
    /// view label → issues
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub views: IssuesByLabel,
}

impl LabelIssues {
    /// Returns true if no category has issues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.explores.is_empty()
            && self.explore_views.is_empty()
            && self.fields.is_empty()
            && self.views.is_empty()
    }
}

/// Collects label issues across the whole document.
#[must_use]
pub fn lint_labels(doc: &LookmlDocument, rules: LabelRules<'_>) -> LabelIssues {
    let mut issues = LabelIssues::default();
    if rules.is_empty() {
        return issues;
    }

    for model in doc.models() {
        let explore_issues = model.explore_label_issues(rules);
        if !explore_issues.is_empty() {
            issues
                .explores
                .insert(model.name().to_string(), explore_issues);
        }

        for explore in model.explores() {
            let view_issues = explore.view_label_issues(rules);
            if !view_issues.is_empty() {
                issues
                    .explore_views
                    .entry(model.name().to_string())
                    .or_default()
                    .insert(explore.name().to_string(), view_issues);
            }
        }
    }

    for view in doc.views() {
        let field_issues = view.field_label_issues(rules);
        if !field_issues.is_empty() {
            issues.fields.insert(view.name().to_string(), field_issues);
        }
    }

    issues.views = doc.view_label_issues(rules);
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::document;
    use serde_json::json;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn sample() -> LookmlDocument {
        document(
            json!({
                "order_items": { "view": { "order_items": {
                    "_view": "order_items",
                    "label": "Order Items Qty",
                    "dimensions": [
                        { "_dimension": "sku_id", "primary_key": true },
                        { "_dimension": "name" }
                    ]
                } } }
            }),
            json!([{ "_explore": "order_items", "label": "Sku Explorer" }]),
        )
    }

    #[test]
    fn empty_word_lists_report_nothing() {
        let issues = lint_labels(&sample(), LabelRules::default());
        assert!(issues.is_empty());
    }

    #[test]
    fn groups_issues_by_category() {
        let acronyms = words(&["sku", "id"]);
        let abbreviations = words(&["qty"]);
        let issues = lint_labels(&sample(), LabelRules::new(&acronyms, &abbreviations));

        assert_eq!(issues.explores["shop"]["Sku Explorer"], vec!["SKU"]);
        // the explore view inherited the view's custom label
        assert_eq!(
            issues.explore_views["shop"]["order_items"]["Order Items Qty"],
            vec!["Qty"]
        );
        assert_eq!(issues.fields["order_items"]["Sku Id"], vec!["SKU", "ID"]);
        assert_eq!(issues.views["Order Items Qty"], vec!["Qty"]);
        assert!(!issues.fields["order_items"].contains_key("Name"));
    }

    #[test]
    fn empty_categories_are_not_serialized() {
        let abbreviations = words(&["qty"]);
        let issues = lint_labels(&sample(), LabelRules::new(&[], &abbreviations));
        let value = serde_json::to_value(&issues).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["explore_views", "views"]);
    }
}
