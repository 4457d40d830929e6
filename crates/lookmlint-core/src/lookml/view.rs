//! The view entity.

use std::collections::BTreeMap;

use super::field::{Dimension, DimensionGroup, Field, Measure};
use crate::labels::{self, LabelRules, Labeled};

/// A reusable set of fields over a table or derived query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub(crate) name: String,
    pub(crate) label: String,
    pub(crate) sql_table_name: Option<String>,
    pub(crate) has_derived_table: bool,
    pub(crate) dimensions: Vec<Dimension>,
    pub(crate) dimension_groups: Vec<DimensionGroup>,
    pub(crate) measures: Vec<Measure>,
}

impl View {
    /// Returns the view name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the `sql_table_name:`, if any.
    #[must_use]
    pub fn sql_table_name(&self) -> Option<&str> {
        self.sql_table_name.as_deref()
    }

    /// Returns true if the view declares a `derived_table:`.
    #[must_use]
    pub fn has_derived_table(&self) -> bool {
        self.has_derived_table
    }

    /// Returns true if the view says where its rows come from.
    #[must_use]
    pub fn has_sql_definition(&self) -> bool {
        self.sql_table_name.is_some() || self.has_derived_table
    }

    /// Returns the dimensions in declaration order.
    #[must_use]
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Returns the dimension groups in declaration order.
    #[must_use]
    pub fn dimension_groups(&self) -> &[DimensionGroup] {
        &self.dimension_groups
    }

    /// Returns the measures in declaration order.
    #[must_use]
    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }

    /// Iterates all fields: dimensions, then dimension groups, then measures.
    pub fn fields(&self) -> impl Iterator<Item = Field<'_>> {
        self.dimensions
            .iter()
            .map(Field::Dimension)
            .chain(self.dimension_groups.iter().map(Field::DimensionGroup))
            .chain(self.measures.iter().map(Field::Measure))
    }

    /// Returns true if any dimension is a primary key.
    #[must_use]
    pub fn has_primary_key(&self) -> bool {
        self.dimensions.iter().any(Dimension::is_primary_key)
    }

    /// Returns label issues of every field, keyed by field label.
    #[must_use]
    pub fn field_label_issues(&self, rules: LabelRules<'_>) -> BTreeMap<String, Vec<String>> {
        let fields: Vec<Field<'_>> = self.fields().collect();
        labels::rollup(&fields, rules)
    }

    /// Returns true if the label differs from the name-derived default.
    #[must_use]
    pub fn has_custom_label(&self) -> bool {
        self.label != labels::default_label(&self.name)
    }
}

impl Labeled for View {
    fn label(&self) -> &str {
        &self.label
    }
}
