//! Check for raw SQL column references in join conditions.
//!
//! # Rationale
//!
//! `sql_on: ${orders.user_id} = users.id ;;` bypasses LookML: the
//! `users.id` reference breaks when the join is aliased or the view's table
//! changes. Join conditions should only use `${view.field}` substitutions.

use std::collections::BTreeMap;

use lookmlint_core::LookmlDocument;
use tracing::debug;

/// Check code for raw SQL references.
pub const CODE: &str = "LK002";

/// Check name for raw SQL references.
pub const NAME: &str = "raw-sql-refs";

/// model → explore → explore view → offending `sql_on`
pub type RawSqlRefs = BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>;

/// Collects join conditions containing raw `table.column` references.
#[must_use]
pub fn lint_sql_references(doc: &LookmlDocument) -> RawSqlRefs {
    let mut refs = RawSqlRefs::new();
    for model in doc.models() {
        for explore in model.explores() {
            for view in explore.views() {
                let Some(sql_on) = view.sql_on() else {
                    continue;
                };
                if !view.contains_raw_sql_ref() {
                    continue;
                }
                debug!(
                    "{}.{}: raw SQL reference in join `{}`",
                    model.name(),
                    explore.name(),
                    view.name()
                );
                refs.entry(model.name().to_string())
                    .or_default()
                    .entry(explore.name().to_string())
                    .or_default()
                    .insert(view.name().to_string(), sql_on.to_string());
            }
        }
    }
    refs
}
