//! Query AST: comparison conditions and their conjunction.

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::value::Value;

/// Absolute tolerance for `=` comparisons. Source values are floating-point
/// approximations of decimal quantities, so exact equality is meaningless.
pub const EQ_EPSILON: f64 = 1e-9;

/// Comparison operator of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    /// Strictly less than.
    Lt,
    /// Strictly greater than.
    Gt,
    /// Less than or equal.
    Le,
    /// Greater than or equal.
    Ge,
    /// Epsilon-tolerant equality.
    Eq,
}

impl CompareOp {
    /// The operator's source token.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Eq => "=",
        }
    }

    pub(crate) fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Self::Lt),
            ">" => Some(Self::Gt),
            "<=" => Some(Self::Le),
            ">=" => Some(Self::Ge),
            "=" => Some(Self::Eq),
            _ => None,
        }
    }

    /// Applies the comparison to two numbers.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Self::Lt => lhs < rhs,
            Self::Gt => lhs > rhs,
            Self::Le => lhs <= rhs,
            Self::Ge => lhs >= rhs,
            Self::Eq => (lhs - rhs).abs() < EQ_EPSILON,
        }
    }
}

/// A single `column op threshold` condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Canonical column name, after alias resolution.
    pub column: String,
    /// Comparison operator.
    pub op: CompareOp,
    /// Numeric threshold.
    pub threshold: f64,
}

impl Condition {
    /// Creates a condition.
    #[must_use]
    pub fn new(column: impl Into<String>, op: CompareOp, threshold: f64) -> Self {
        Self {
            column: column.into(),
            op,
            threshold,
        }
    }

    /// Evaluates the condition against a record. Columns the record does not
    /// carry compare as zero.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        let lhs = record.get(&self.column).map_or(0.0, Value::as_number);
        self.op.apply(lhs, self.threshold)
    }
}

/// A conjunction of conditions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// The ANDed conditions; empty means "no filter".
    pub conditions: Vec<Condition>,
}

impl Query {
    /// Returns true when the query carries no conditions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluates all conditions against a record.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.conditions.iter().all(|c| c.matches(record))
    }

    /// Returns the subset of `records` satisfying every condition. An empty
    /// query returns the input unchanged.
    #[must_use]
    pub fn filter(&self, records: &[Record]) -> Vec<Record> {
        if self.is_empty() {
            return records.to_vec();
        }
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}
