//! Dataset schemas: ordered, typed column declarations.
//!
//! Each page-level dataset (screener, daily snapshot, broker boards) declares
//! its columns once; the normalizer guarantees every declared column exists
//! on every record, so downstream sort/filter code never meets a missing key.

use serde::{Deserialize, Serialize};

/// Semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Free text, defaults to the empty string.
    Text,
    /// Signed decimal number, defaults to zero.
    Number,
    /// Plain number rendered with a `%` suffix, defaults to zero.
    Percent,
}

impl ColumnType {
    /// Returns true for `Number` and `Percent` columns.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Percent)
    }
}

/// A single column declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column header as it appears in the source file.
    pub name: String,
    /// Semantic type.
    pub ty: ColumnType,
}

impl ColumnSpec {
    /// Declares a text column.
    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ColumnType::Text,
        }
    }

    /// Declares a numeric column.
    #[must_use]
    pub fn number(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ColumnType::Number,
        }
    }

    /// Declares a percentage column.
    #[must_use]
    pub fn percent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ColumnType::Percent,
        }
    }
}

/// An ordered set of column declarations for one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<ColumnSpec>,
    /// Column synthesized from 1-based input order when the source leaves
    /// it blank (e.g. a "No" column).
    sequence_column: Option<String>,
}

impl Schema {
    /// Creates a schema from an ordered column list.
    #[must_use]
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self {
            columns,
            sequence_column: None,
        }
    }

    /// Marks `name` as the sequence column.
    #[must_use]
    pub fn with_sequence_column(mut self, name: impl Into<String>) -> Self {
        self.sequence_column = Some(name.into());
        self
    }

    /// The declared columns, in order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Looks up a column's type by header name.
    #[must_use]
    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.ty)
    }

    /// Returns true when the schema declares `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.column_type(name).is_some()
    }

    /// The sequence column, if any.
    #[must_use]
    pub fn sequence_column(&self) -> Option<&str> {
        self.sequence_column.as_deref()
    }

    /// Number of declared columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true when no columns are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
