//! Integration test: parser JSON fixture → resolved document.
//!
//! Uses `tests/fixtures/shop.json`, a small repository with one model,
//! one explore joining two views, and one view nothing references.

use lookmlint_core::{JsonFileParser, LabelRules, Labeled, LookmlDocument, LookmlParser};
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/shop.json")
}

fn load_fixture() -> LookmlDocument {
    JsonFileParser::new(fixture_path())
        .load(&PathBuf::from("."))
        .expect("fixture should load")
}

#[test]
fn builds_views_and_models_in_file_order() {
    let doc = load_fixture();

    let views: Vec<&str> = doc.views().iter().map(|v| v.name()).collect();
    assert_eq!(views, vec!["legacy_events", "orders", "users"]);

    assert_eq!(doc.models().len(), 1);
    let model = &doc.models()[0];
    assert_eq!(model.name(), "shop");
    assert_eq!(model.explores().len(), 1);
    assert_eq!(model.explores()[0].views().len(), 2);
}

#[test]
fn base_view_inherits_custom_label_and_join_keeps_default() {
    let doc = load_fixture();
    let explore = &doc.models()[0].explores()[0];

    let base = explore.base_view().expect("explore has a base view");
    assert_eq!(base.source_view(), "orders");
    assert_eq!(base.label(), "Purchases");

    let join = &explore.joins()[0];
    assert_eq!(join.source_view(), "users");
    assert_eq!(join.label(), "Users");
}

#[test]
fn raw_sql_reference_in_join_is_detected() {
    let doc = load_fixture();
    let flagged: Vec<&str> = doc
        .all_explore_views()
        .filter(|ev| ev.contains_raw_sql_ref())
        .map(|ev| ev.name())
        .collect();
    assert_eq!(flagged, vec!["users"]);
}

#[test]
fn unused_includes_and_view_files() {
    let doc = load_fixture();
    assert_eq!(doc.models()[0].unused_includes(), vec!["legacy_events"]);
    assert_eq!(doc.unused_view_files(), vec!["legacy_events"]);
}

#[test]
fn primary_keys() {
    let doc = load_fixture();
    let missing: Vec<&str> = doc
        .views()
        .iter()
        .filter(|v| !v.has_primary_key())
        .map(|v| v.name())
        .collect();
    assert_eq!(missing, vec!["legacy_events"]);
}

#[test]
fn field_label_issues_use_configured_words() {
    let doc = load_fixture();
    let acronyms = vec!["id".to_string()];
    let abbreviations = vec!["amt".to_string()];
    let rules = LabelRules::new(&acronyms, &abbreviations);

    let orders = doc.view("orders").expect("orders view");
    let issues = orders.field_label_issues(rules);
    assert_eq!(issues.len(), 3);
    assert_eq!(issues["Id"], vec!["ID"]);
    assert_eq!(issues["User Id"], vec!["ID"]);
    assert_eq!(issues["Amt"], vec!["Amt"]);
}

#[test]
fn loading_twice_yields_identical_documents() {
    assert_eq!(load_fixture(), load_fixture());
}
