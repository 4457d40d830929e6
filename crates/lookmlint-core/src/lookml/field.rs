//! Field entities owned by a view.

use crate::labels::Labeled;

/// A single-value field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    pub(crate) name: String,
    pub(crate) kind: String,
    pub(crate) label: String,
    pub(crate) description: Option<String>,
    pub(crate) sql: Option<String>,
    pub(crate) primary_key: bool,
}

impl Dimension {
    /// Returns the dimension name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the LookML type (`"string"` when not declared).
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the `sql:` expression, if any.
    #[must_use]
    pub fn sql(&self) -> Option<&str> {
        self.sql.as_deref()
    }

    /// Returns true if the dimension is declared `primary_key: yes`.
    #[must_use]
    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }
}

impl Labeled for Dimension {
    fn label(&self) -> &str {
        &self.label
    }
}

/// A time or duration field group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionGroup {
    pub(crate) name: String,
    pub(crate) kind: String,
    pub(crate) label: String,
    pub(crate) description: Option<String>,
    pub(crate) sql: Option<String>,
    pub(crate) timeframes: Vec<String>,
}

impl DimensionGroup {
    /// Returns the dimension group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the LookML type (`"string"` when not declared).
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the `sql:` expression, if any.
    #[must_use]
    pub fn sql(&self) -> Option<&str> {
        self.sql.as_deref()
    }

    /// Returns the declared timeframes.
    #[must_use]
    pub fn timeframes(&self) -> &[String] {
        &self.timeframes
    }
}

impl Labeled for DimensionGroup {
    fn label(&self) -> &str {
        &self.label
    }
}

/// An aggregation field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measure {
    pub(crate) name: String,
    pub(crate) kind: Option<String>,
    pub(crate) label: String,
    pub(crate) description: Option<String>,
    pub(crate) sql: Option<String>,
}

impl Measure {
    /// Returns the measure name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the LookML type, if declared.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the `sql:` expression, if any.
    #[must_use]
    pub fn sql(&self) -> Option<&str> {
        self.sql.as_deref()
    }

    /// Returns true for measures that aggregate rows rather than a column,
    /// which need no `sql:`.
    #[must_use]
    pub fn counts_rows(&self) -> bool {
        self.kind.as_deref() == Some("count")
    }
}

impl Labeled for Measure {
    fn label(&self) -> &str {
        &self.label
    }
}

/// A borrowed reference to any field kind.
#[derive(Debug, Clone, Copy)]
pub enum Field<'a> {
    /// A dimension.
    Dimension(&'a Dimension),
    /// A dimension group.
    DimensionGroup(&'a DimensionGroup),
    /// A measure.
    Measure(&'a Measure),
}

impl Field<'_> {
    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Dimension(d) => d.name(),
            Self::DimensionGroup(g) => g.name(),
            Self::Measure(m) => m.name(),
        }
    }

    /// Returns the `sql:` expression, if any.
    #[must_use]
    pub fn sql(&self) -> Option<&str> {
        match self {
            Self::Dimension(d) => d.sql(),
            Self::DimensionGroup(g) => g.sql(),
            Self::Measure(m) => m.sql(),
        }
    }

    /// Returns true if the field needs an `sql:` expression but has none.
    #[must_use]
    pub fn is_missing_sql(&self) -> bool {
        match self {
            Self::Measure(m) if m.counts_rows() => false,
            _ => self.sql().is_none(),
        }
    }
}

impl Labeled for Field<'_> {
    fn label(&self) -> &str {
        match self {
            Self::Dimension(d) => d.label(),
            Self::DimensionGroup(g) => g.label(),
            Self::Measure(m) => m.label(),
        }
    }
}
