//! The resolved repository snapshot.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;

use super::dto::DocumentDto;
use super::explore::ExploreView;
use super::loader::{self, LoadError};
use super::model::Model;
use super::view::View;
use crate::labels::{self, LabelRules};

/// Every model and view of a LookML repository, with references resolved.
///
/// Models and views are ordered by file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookmlDocument {
    models: Vec<Model>,
    views: Vec<View>,
}

impl LookmlDocument {
    pub(crate) fn new(models: Vec<Model>, views: Vec<View>) -> Self {
        Self { models, views }
    }

    /// Builds a document from the parser's JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a reference is dangling.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let dto: DocumentDto = serde_json::from_str(json)?;
        loader::load(dto)
    }

    /// Builds a document from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a reference is dangling.
    pub fn from_value(value: serde_json::Value) -> Result<Self, LoadError> {
        let dto: DocumentDto = serde_json::from_value(value)?;
        loader::load(dto)
    }

    /// Builds a document from a reader yielding the parser's JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails, the JSON is malformed or a
    /// reference is dangling.
    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        let dto: DocumentDto = serde_json::from_reader(reader)?;
        loader::load(dto)
    }

    /// Returns the models.
    #[must_use]
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Returns the views.
    #[must_use]
    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// Looks up a view by name.
    #[must_use]
    pub fn view(&self, name: &str) -> Option<&View> {
        self.views.iter().find(|v| v.name() == name)
    }

    /// Iterates the explore views of every model.
    pub fn all_explore_views(&self) -> impl Iterator<Item = &ExploreView> {
        self.models.iter().flat_map(Model::explore_views)
    }

    /// Returns the views that no explore reads from, sorted.
    #[must_use]
    pub fn unused_view_files(&self) -> Vec<String> {
        let used: BTreeSet<&str> = self
            .all_explore_views()
            .map(ExploreView::source_view)
            .collect();
        self.views
            .iter()
            .map(View::name)
            .filter(|name| !used.contains(name))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Returns label issues of every view, keyed by view label.
    #[must_use]
    pub fn view_label_issues(&self, rules: LabelRules<'_>) -> BTreeMap<String, Vec<String>> {
        labels::rollup(&self.views, rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Labeled;
    use serde_json::json;

    fn document(views: serde_json::Value, explores: serde_json::Value) -> LookmlDocument {
        LookmlDocument::from_value(json!({
            "file": {
                "view": views,
                "model": { "shop": { "model": { "shop": {
                    "_model": "shop",
                    "explores": explores
                } } } }
            }
        }))
        .unwrap()
    }

    #[test]
    fn custom_view_label_propagates_to_explore_view() {
        let doc = document(
            json!({ "orders": { "view": { "orders": { "_view": "orders", "label": "Purchases" } } } }),
            json!([{ "_explore": "orders" }]),
        );
        let explore_view = doc.all_explore_views().next().unwrap();
        assert_eq!(explore_view.label(), "Purchases");
    }

    #[test]
    fn default_view_label_leaves_explore_view_unchanged() {
        let doc = document(
            json!({ "order_items": { "view": { "order_items": { "_view": "order_items" } } } }),
            json!([{ "_explore": "order_items", "view_label": "Line Items" }]),
        );
        let explore_view = doc.all_explore_views().next().unwrap();
        assert_eq!(explore_view.label(), "Line Items");
    }

    #[test]
    fn explicit_label_equal_to_default_is_not_custom() {
        let doc = document(
            json!({ "orders": { "view": { "orders": { "_view": "orders", "label": "Orders" } } } }),
            json!([{ "_explore": "orders", "view_label": "Sales" }]),
        );
        let explore_view = doc.all_explore_views().next().unwrap();
        assert_eq!(explore_view.label(), "Sales");
    }

    #[test]
    fn entities_are_ordered_by_file_name() {
        let doc = document(
            json!({
                "zebra": { "view": { "zebra": { "_view": "zebra" } } },
                "apple": { "view": { "apple": { "_view": "apple" } } }
            }),
            json!([]),
        );
        let names: Vec<&str> = doc.views().iter().map(View::name).collect();
        assert_eq!(names, vec!["apple", "zebra"]);
    }

    #[test]
    fn unused_view_files_are_sorted_set_difference() {
        let doc = document(
            json!({
                "users": { "view": { "users": { "_view": "users" } } },
                "orders": { "view": { "orders": { "_view": "orders" } } },
                "archive": { "view": { "archive": { "_view": "archive" } } }
            }),
            json!([{ "_explore": "orders" }]),
        );
        assert_eq!(doc.unused_view_files(), vec!["archive", "users"]);
        assert!(doc.view("orders").is_some());
        assert!(doc.view("missing").is_none());
    }

    #[test]
    fn reads_from_reader() {
        let json = r#"{"file": {"view": {"v": {"view": {"v": {"_view": "v"}}}}}}"#;
        let doc = LookmlDocument::from_reader(json.as_bytes()).unwrap();
        assert_eq!(doc.views().len(), 1);
        assert!(doc.models().is_empty());
    }
}
