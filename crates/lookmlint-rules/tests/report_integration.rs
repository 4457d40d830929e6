//! Integration test: fixture document → full lint report.

use lookmlint_core::{LintConfig, LookmlDocument};
use lookmlint_rules::{lint, lint_checks, Check};
use serde_json::json;
use std::path::PathBuf;

fn load_fixture() -> LookmlDocument {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/shop.json");
    let json = std::fs::read_to_string(path).expect("fixture should exist");
    LookmlDocument::from_json_str(&json).expect("fixture should load")
}

fn config() -> LintConfig {
    LintConfig {
        acronyms: vec!["id".to_string()],
        abbreviations: vec!["amt".to_string()],
        ..LintConfig::default()
    }
}

#[test]
fn report_serializes_only_non_empty_results() {
    let report = lint(&load_fixture(), &config());
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(
        value,
        json!({
            "unused_view_files": ["legacy_events"],
            "unused_includes": { "shop": ["legacy_events"] },
            "views_missing_primary_keys": ["legacy_events"],
            "label_issues": {
                "fields": {
                    "legacy_events": { "Event Id": ["ID"] },
                    "orders": { "Amt": ["Amt"], "Id": ["ID"], "User Id": ["ID"] },
                    "users": { "Id": ["ID"] }
                }
            },
            "raw_sql_refs": {
                "shop": { "orders": { "users": "${orders.user_id} = users.id" } }
            },
            "missing_sql_definitions": {
                "views": ["legacy_events"],
                "fields": { "orders": ["amount"] }
            }
        })
    );
}

#[test]
fn report_yaml_snapshot() {
    let report = lint(&load_fixture(), &config());
    let yaml = serde_yaml::to_string(&report).unwrap();

    insta::assert_snapshot!(yaml, @r"
    unused_view_files:
    - legacy_events
    unused_includes:
      shop:
      - legacy_events
    views_missing_primary_keys:
    - legacy_events
    label_issues:
      fields:
        legacy_events:
          Event Id:
          - ID
        orders:
          Amt:
          - Amt
          Id:
          - ID
          User Id:
          - ID
        users:
          Id:
          - ID
    raw_sql_refs:
      shop:
        orders:
          users: ${orders.user_id} = users.id
    missing_sql_definitions:
      views:
      - legacy_events
      fields:
        orders:
        - amount
    ");
}

#[test]
fn checks_are_idempotent_and_order_insensitive() {
    let doc = load_fixture();
    let config = config();

    let forward = lint_checks(&doc, &config, &Check::ALL);
    let mut reversed_checks = Check::ALL;
    reversed_checks.reverse();
    let reversed = lint_checks(&doc, &config, &reversed_checks);

    assert_eq!(forward, reversed);
    assert_eq!(forward, lint_checks(&doc, &config, &Check::ALL));
    assert_eq!(doc, load_fixture());
}

#[test]
fn without_word_lists_labels_are_clean() {
    let report = lint(&load_fixture(), &LintConfig::default());
    assert!(report.label_issues.is_empty());
    assert!(!report.is_clean(Check::UnusedViewFiles));
}
