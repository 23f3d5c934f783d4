//! Column sorting and sort-state lifecycle.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::schema::{ColumnType, Schema};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Which column is sorted and in which direction.
///
/// Clicking the active column flips ascending to descending; clicking a
/// different column resets to ascending. Cleared whenever the underlying
/// filtered set changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    column: Option<String>,
    direction: SortDirection,
}

impl SortState {
    /// Registers a header click and returns the resulting direction.
    pub fn click(&mut self, column: &str) -> SortDirection {
        let direction = if self.column.as_deref() == Some(column) {
            self.direction.flip()
        } else {
            SortDirection::Ascending
        };
        self.column = Some(column.to_string());
        self.direction = direction;
        direction
    }

    /// Sets the state explicitly.
    pub fn set(&mut self, column: impl Into<String>, direction: SortDirection) {
        self.column = Some(column.into());
        self.direction = direction;
    }

    /// Clears the state back to unsorted.
    pub fn clear(&mut self) {
        self.column = None;
        self.direction = SortDirection::Ascending;
    }

    /// The active column, if any.
    #[must_use]
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// The active direction.
    #[must_use]
    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

/// Sorts records by one column, using the column's declared type.
///
/// Text columns compare case-insensitively; numeric and percentage columns
/// compare after coercion, so ordering is well-defined even on call paths
/// where cells still hold raw strings. The sort is stable.
pub fn sort_records(
    records: &mut [Record],
    schema: &Schema,
    column: &str,
    direction: SortDirection,
) {
    let ty = schema.column_type(column).unwrap_or(ColumnType::Text);

    records.sort_by(|a, b| {
        let ord = if ty.is_numeric() {
            compare_numbers(a.number(column), b.number(column))
        } else {
            a.text(column)
                .to_lowercase()
                .cmp(&b.text(column).to_lowercase())
        };
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

/// Total order over coerced cell numbers. Coercion only produces finite
/// values, so incomparable pairs cannot occur in practice.
#[must_use]
pub fn compare_numbers(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
