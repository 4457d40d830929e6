//! Explores and the views they join.

use std::collections::BTreeMap;

use crate::labels::{self, LabelRules, Labeled};

/// One view's participation in an explore, as its base view or via a join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreView {
    pub(crate) name: String,
    pub(crate) label: String,
    pub(crate) source_view: String,
    pub(crate) explore: String,
    pub(crate) sql_on: Option<String>,
}

impl ExploreView {
    /// Returns the alias under which the view appears in the explore.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the view this alias reads from.
    #[must_use]
    pub fn source_view(&self) -> &str {
        &self.source_view
    }

    /// Returns the name of the owning explore.
    #[must_use]
    pub fn explore(&self) -> &str {
        &self.explore
    }

    /// Returns the join condition, if any.
    #[must_use]
    pub fn sql_on(&self) -> Option<&str> {
        self.sql_on.as_deref()
    }

    /// Replaces the label with the source view's custom label.
    pub(crate) fn inherit_label(&mut self, label: &str) {
        label.clone_into(&mut self.label);
    }

    /// Returns true if the join condition references a column as raw
    /// `table.column` SQL instead of a `${view.field}` substitution.
    #[must_use]
    pub fn contains_raw_sql_ref(&self) -> bool {
        self.sql_on.as_deref().is_some_and(has_raw_sql_ref)
    }
}

impl Labeled for ExploreView {
    fn label(&self) -> &str {
        &self.label
    }
}

fn has_raw_sql_ref(sql: &str) -> bool {
    sql.lines()
        .filter(|line| !is_comment(line))
        .flat_map(str::split_whitespace)
        .any(is_raw_column_ref)
}

fn is_comment(line: &str) -> bool {
    line.replace(' ', "").starts_with("--")
}

fn is_raw_column_ref(word: &str) -> bool {
    // substitutions may be split across words, e.g. `${orders.id }`
    let lookml = word.contains("${") || word.contains('}');
    // function call with arguments on the next lines
    let call = word.ends_with('(');
    !lookml && !call && word.matches('.').count() == 1
}

/// A named query entry point over a base view and its joins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explore {
    pub(crate) name: String,
    pub(crate) label: String,
    pub(crate) model: String,
    pub(crate) views: Vec<ExploreView>,
}

impl Explore {
    /// Returns the explore name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the model declaring this explore.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the explore views; the base view comes first.
    #[must_use]
    pub fn views(&self) -> &[ExploreView] {
        &self.views
    }

    /// Returns the base view.
    #[must_use]
    pub fn base_view(&self) -> Option<&ExploreView> {
        self.views.first()
    }

    /// Returns the joined views.
    #[must_use]
    pub fn joins(&self) -> &[ExploreView] {
        self.views.get(1..).unwrap_or_default()
    }

    /// Returns label issues of every explore view, keyed by label.
    #[must_use]
    pub fn view_label_issues(&self, rules: LabelRules<'_>) -> BTreeMap<String, Vec<String>> {
        labels::rollup(&self.views, rules)
    }
}

impl Labeled for Explore {
    fn label(&self) -> &str {
        &self.label
    }
}
