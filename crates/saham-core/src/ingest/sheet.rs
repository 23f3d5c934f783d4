//! Spreadsheet ingestion via calamine.
//!
//! Only the first worksheet of a workbook is read, matching the exports this
//! crate consumes.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::error::{Error, Result};
use crate::value::{RawRecord, RawValue};

/// Reads the first worksheet into header-keyed raw records. The first row is
/// the header; empty header cells are skipped.
pub fn records<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let range = first_sheet(path)?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(cell_text).collect())
        .unwrap_or_default();

    let mut out = Vec::new();
    for row in rows {
        let mut record = RawRecord::new();
        for (header, cell) in headers.iter().zip(row) {
            if header.is_empty() {
                continue;
            }
            record.insert(header.clone(), cell_value(cell));
        }
        out.push(record);
    }

    tracing::info!(rows = out.len(), path = %path.display(), "loaded worksheet");
    Ok(out)
}

/// Reads the first worksheet as a positional grid of display strings.
pub fn rows<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let range = first_sheet(path)?;

    let grid: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    tracing::info!(rows = grid.len(), path = %path.display(), "loaded worksheet grid");
    Ok(grid)
}

fn first_sheet(path: &Path) -> Result<Range<Data>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| Error::Decode(e.to_string()))?;
    workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::EmptySheet(path.display().to_string()))?
        .map_err(|e| Error::Decode(e.to_string()))
}

/// Collapses a spreadsheet cell into a raw value. Numeric cells (including
/// serial date-times) stay numeric; everything else becomes text or empty.
pub(crate) fn cell_value(cell: &Data) -> RawValue {
    match cell {
        Data::Empty | Data::Error(_) => RawValue::Empty,
        Data::Int(i) => RawValue::Number(*i as f64),
        Data::Float(f) => RawValue::Number(*f),
        Data::DateTime(dt) => RawValue::Number(dt.as_f64()),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            RawValue::Text(s.clone())
        }
        Data::Bool(b) => RawValue::Text(b.to_string()),
    }
}

fn cell_text(cell: &Data) -> String {
    cell_value(cell).display()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_numeric_variants() {
        assert_eq!(cell_value(&Data::Int(7)), RawValue::Number(7.0));
        assert_eq!(cell_value(&Data::Float(2.5)), RawValue::Number(2.5));
        assert_eq!(cell_value(&Data::Empty), RawValue::Empty);
    }

    #[test]
    fn test_cell_value_text_variants() {
        assert_eq!(
            cell_value(&Data::String("BBCA".into())),
            RawValue::Text("BBCA".into())
        );
        assert_eq!(cell_value(&Data::Bool(true)), RawValue::Text("true".into()));
    }

    #[test]
    fn test_cell_text_of_integral_float() {
        assert_eq!(cell_text(&Data::Float(1000.0)), "1000");
    }

    #[test]
    fn test_missing_file_is_a_decode_error() {
        let err = records("no-such-workbook.xlsx").expect_err("must fail");
        assert_eq!(err.code(), "SAHAM-002");
    }
}
