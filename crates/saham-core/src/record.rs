//! Record normalization: raw keyed rows into the fixed schema shape.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::schema::{ColumnType, Schema};
use crate::value::{RawRecord, Value};

/// A normalized record holding exactly the columns its schema declares,
/// in schema order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    values: IndexMap<String, Value>,
}

impl Record {
    /// The cell stored under `column`, if declared.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    /// Numeric view of a column; missing columns read as zero.
    #[must_use]
    pub fn number(&self, column: &str) -> f64 {
        self.values.get(column).map_or(0.0, Value::as_number)
    }

    /// Text view of a column; missing columns read as the empty string.
    #[must_use]
    pub fn text(&self, column: &str) -> &str {
        match self.values.get(column) {
            Some(Value::Text(s)) => s,
            _ => "",
        }
    }

    /// Sets or replaces a cell.
    pub fn set(&mut self, column: impl Into<String>, value: Value) {
        self.values.insert(column.into(), value);
    }

    /// Iterates cells in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when the record holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Normalizes a single raw record against `schema`.
///
/// `position` is the record's 0-based input order, used to synthesize the
/// sequence column when the source leaves it blank. Malformed cells degrade
/// to the column default; this never fails.
#[must_use]
pub fn normalize(schema: &Schema, raw: &RawRecord, position: usize) -> Record {
    let mut record = Record::default();

    for spec in schema.columns() {
        let cell = raw.get(&spec.name);
        let value = match spec.ty {
            ColumnType::Text => Value::Text(cell.map(crate::value::RawValue::display).unwrap_or_default()),
            ColumnType::Number | ColumnType::Percent => {
                Value::Number(cell.map_or(0.0, coerce::to_number))
            }
        };
        record.set(spec.name.clone(), value);
    }

    if let Some(seq) = schema.sequence_column() {
        if record.text(seq).is_empty() {
            record.set(seq, Value::Text((position + 1).to_string()));
        }
    }

    record
}

/// Normalizes a batch of raw records, preserving input order.
#[must_use]
pub fn normalize_rows(schema: &Schema, rows: &[RawRecord]) -> Vec<Record> {
    rows.iter()
        .enumerate()
        .map(|(i, raw)| normalize(schema, raw, i))
        .collect()
}
