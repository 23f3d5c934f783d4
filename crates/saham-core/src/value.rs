//! Cell value types shared by ingestion and normalization.
//!
//! Source files mix numeric cells with pre-formatted display strings
//! (`"1,234.5"`, `"12.3%"`), so raw cells keep their source shape until the
//! normalizer maps them onto a [`Schema`](crate::schema::Schema).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::coerce;

/// A raw cell as decoded from a spreadsheet or CSV source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum RawValue {
    /// Missing or blank cell.
    #[default]
    Empty,
    /// Numeric cell (spreadsheet ints, floats and serial dates).
    Number(f64),
    /// Text cell, possibly a formatted number.
    Text(String),
}

impl RawValue {
    /// Returns true for blank cells (missing or empty text).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.is_empty(),
            Self::Number(_) => false,
        }
    }

    /// String form of the cell. Integral numbers render without a decimal
    /// point, matching how spreadsheets display codes stored as numbers.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(n) => display_number(*n),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// A raw record: source column name to raw cell, in source order.
pub type RawRecord = IndexMap<String, RawValue>;

/// A normalized cell: free text or a finite number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Numeric cell, always finite after normalization.
    Number(f64),
    /// Text cell.
    Text(String),
}

impl Value {
    /// Numeric view of the cell. Text cells go through
    /// [`coerce::parse_number`], so comparisons and sorts are well-defined
    /// even on call paths that still hold raw strings.
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(n) if n.is_finite() => *n,
            Self::Number(_) => 0.0,
            Self::Text(s) => coerce::parse_number(s),
        }
    }

    /// Text view of the cell.
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => display_number(*n),
        }
    }
}

fn display_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
