//! Check for included view files that no explore uses.
//!
//! # Rationale
//!
//! Every `include:` makes Looker load and validate the file for the model.
//! Includes nothing joins are dead weight and hide which views a model
//! really depends on.

use std::collections::BTreeMap;

use lookmlint_core::LookmlDocument;

/// Check code for unused includes.
pub const CODE: &str = "LK004";

/// Check name for unused includes.
pub const NAME: &str = "unused-includes";

/// Returns model → sorted unused includes, for models with any.
#[must_use]
pub fn lint_unused_includes(doc: &LookmlDocument) -> BTreeMap<String, Vec<String>> {
    doc.models()
        .iter()
        .filter_map(|model| {
            let unused = model.unused_includes();
            (!unused.is_empty()).then(|| (model.name().to_string(), unused))
        })
        .collect()
}
