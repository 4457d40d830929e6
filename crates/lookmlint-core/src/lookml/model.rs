//! The model entity.

use std::collections::{BTreeMap, BTreeSet};

use super::explore::{Explore, ExploreView};
use crate::labels::{self, LabelRules};

/// A model file: explores plus the view files it includes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub(crate) name: String,
    pub(crate) includes: Vec<String>,
    pub(crate) explores: Vec<Explore>,
}

impl Model {
    /// Returns the model name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the included view names, with `.view` / `.view.lkml` stripped.
    #[must_use]
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    /// Returns the explores in declaration order.
    #[must_use]
    pub fn explores(&self) -> &[Explore] {
        &self.explores
    }

    /// Iterates the views of every explore.
    pub fn explore_views(&self) -> impl Iterator<Item = &ExploreView> {
        self.explores.iter().flat_map(|e| e.views().iter())
    }

    /// Returns the includes that no explore view reads from, sorted.
    ///
    /// A wildcard include such as `*_facts` is unused when it matches none
    /// of the referenced views.
    #[must_use]
    pub fn unused_includes(&self) -> Vec<String> {
        let sources: BTreeSet<&str> = self.explore_views().map(ExploreView::source_view).collect();
        self.includes
            .iter()
            .filter(|include| !include_is_used(include, &sources))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Returns label issues of every explore, keyed by explore label.
    #[must_use]
    pub fn explore_label_issues(&self, rules: LabelRules<'_>) -> BTreeMap<String, Vec<String>> {
        labels::rollup(&self.explores, rules)
    }
}

fn include_is_used(include: &str, sources: &BTreeSet<&str>) -> bool {
    if sources.contains(include) {
        return true;
    }
    if !include.contains(['*', '?', '[']) {
        return false;
    }
    glob::Pattern::new(include).is_ok_and(|pattern| sources.iter().any(|s| pattern.matches(s)))
}

/// Normalizes an `include:` entry to the view name it refers to.
pub(crate) fn include_view_name(include: &str) -> String {
    let include = include.strip_suffix(".lkml").unwrap_or(include);
    include.strip_suffix(".view").unwrap_or(include).to_string()
}
