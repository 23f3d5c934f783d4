//! CSV ingestion.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{Error, Result};
use crate::value::{RawRecord, RawValue};

/// Reads a CSV with a header row into header-keyed raw records. Headers and
/// cells are cleaned of UTF-8 BOMs; blank cells come through as empty values
/// so the normalizer can apply column defaults.
pub fn records<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::Decode(e.to_string()))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::Decode(e.to_string()))?
        .iter()
        .map(clean)
        .collect();

    let mut out = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| Error::Decode(e.to_string()))?;
        let mut record = RawRecord::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            if header.is_empty() {
                continue;
            }
            let cell = clean(cell);
            let value = if cell.is_empty() {
                RawValue::Empty
            } else {
                RawValue::Text(cell)
            };
            record.insert(header.clone(), value);
        }
        out.push(record);
    }

    tracing::info!(rows = out.len(), path = %path.display(), "loaded CSV");
    Ok(out)
}

/// Reads a CSV as a positional grid of cleaned display strings, with no
/// header interpretation. Fully empty lines drop out.
pub fn rows<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::Decode(e.to_string()))?;

    let mut grid = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| Error::Decode(e.to_string()))?;
        let cells: Vec<String> = row.iter().map(clean).collect();
        if cells.iter().any(|c| !c.is_empty()) {
            grid.push(cells);
        }
    }

    tracing::info!(rows = grid.len(), path = %path.display(), "loaded CSV grid");
    Ok(grid)
}

fn clean(cell: &str) -> String {
    cell.replace('\u{feff}', "").trim().to_string()
}
