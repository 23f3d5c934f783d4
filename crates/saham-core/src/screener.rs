//! The IDX stock-screener dataset: schema, query aliases, the qualification
//! rule and the leaderboard ranking.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::query::AliasTable;
use crate::record::Record;
use crate::schema::{ColumnSpec, Schema};
use crate::sort::compare_numbers;
use crate::value::{RawRecord, RawValue, Value};

/// Ticker column, the record's unique key.
pub const CODE: &str = "Kode Saham";
/// Company name column.
pub const NAME: &str = "Nama Perusahaan";
/// Price-to-earnings ratio column.
pub const PER: &str = "PER";
/// Price-to-book ratio column.
pub const PBV: &str = "PBV";
/// Return-on-equity column.
pub const ROE: &str = "ROE %";
/// Debt-to-equity ratio column.
pub const DER: &str = "DER";
/// Traded volume column, joined from the daily snapshot.
pub const VOLUME: &str = "Volume";
/// Traded value column, joined from the daily snapshot.
pub const VALUE: &str = "Nilai";

/// Columns of the screener export, in file order.
#[must_use]
pub fn columns() -> Schema {
    Schema::new(vec![
        ColumnSpec::text("No"),
        ColumnSpec::text(NAME),
        ColumnSpec::text(CODE),
        ColumnSpec::text("Kode Subindustri"),
        ColumnSpec::text("Sektor"),
        ColumnSpec::text("Subsektor"),
        ColumnSpec::text("Industri"),
        ColumnSpec::text("Subindustri"),
        ColumnSpec::text("Index"),
        ColumnSpec::number(PER),
        ColumnSpec::number(PBV),
        ColumnSpec::percent(ROE),
        ColumnSpec::percent("ROA %"),
        ColumnSpec::number(DER),
        ColumnSpec::number("Mkt Cap"),
        ColumnSpec::number("Total Rev"),
        ColumnSpec::percent("4-wk %Pr. Chg."),
        ColumnSpec::percent("13-wk %Pr. Chg."),
        ColumnSpec::percent("26-wk %Pr. Chg."),
        ColumnSpec::percent("52-wk %Pr. Chg."),
        ColumnSpec::percent("NPM %"),
        ColumnSpec::percent("MTD"),
        ColumnSpec::percent("YTD"),
        ColumnSpec::number(VOLUME),
        ColumnSpec::number(VALUE),
    ])
    .with_sequence_column("No")
}

/// Query shorthands for the screener columns.
#[must_use]
pub fn aliases() -> AliasTable {
    AliasTable::new()
        .with("ROE", ROE)
        .with("ROA", "ROA %")
        .with("Market Cap", "Mkt Cap")
        .with("Kode", CODE)
        .with("Value", VALUE)
}

/// Qualification thresholds for the value-stock leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenerLimits {
    /// PER must stay below this.
    pub max_per: f64,
    /// ROE % must exceed this.
    pub min_roe: f64,
    /// PBV must stay below this.
    pub max_pbv: f64,
    /// DER must stay below this.
    pub max_der: f64,
}

impl Default for ScreenerLimits {
    fn default() -> Self {
        Self {
            max_per: 10.0,
            min_roe: 10.0,
            max_pbv: 1.0,
            max_der: 1.0,
        }
    }
}

/// Returns true when a record passes the qualification rule.
#[must_use]
pub fn qualifies(record: &Record, limits: &ScreenerLimits) -> bool {
    record.number(PER) < limits.max_per
        && record.number(ROE) > limits.min_roe
        && record.number(PBV) < limits.max_pbv
        && record.number(DER) < limits.max_der
}

/// Leaderboard comparator: higher ROE % first, then lower PER, then lower
/// PBV, then lower DER. The first non-zero difference decides.
#[must_use]
pub fn rank_compare(a: &Record, b: &Record) -> Ordering {
    compare_numbers(b.number(ROE), a.number(ROE))
        .then_with(|| compare_numbers(a.number(PER), b.number(PER)))
        .then_with(|| compare_numbers(a.number(PBV), b.number(PBV)))
        .then_with(|| compare_numbers(a.number(DER), b.number(DER)))
}

/// Qualifying records ordered by the leaderboard comparator.
#[must_use]
pub fn qualified_ranking(records: &[Record], limits: &ScreenerLimits) -> Vec<Record> {
    let mut ranking: Vec<Record> = records
        .iter()
        .filter(|r| qualifies(r, limits))
        .cloned()
        .collect();
    ranking.sort_by(rank_compare);
    ranking
}

/// Ticker to 1-based leaderboard position. Recomputed per record set and
/// looked up by ticker, so rank badges stay stable under any display sort.
#[must_use]
pub fn rank_map(ranking: &[Record]) -> HashMap<String, usize> {
    ranking
        .iter()
        .enumerate()
        .map(|(i, r)| (r.text(CODE).to_string(), i + 1))
        .collect()
}

/// Joins traded volume and value from a daily snapshot into the screener
/// records, matched by ticker. Tickers absent from the snapshot get zero.
pub fn merge_volume(rows: &mut [Record], snapshot: &[RawRecord]) {
    let mut by_code: HashMap<String, (f64, f64)> = HashMap::new();
    for raw in snapshot {
        let code = raw.get(CODE).map(RawValue::display).unwrap_or_default();
        if code.is_empty() {
            continue;
        }
        let volume = raw.get(VOLUME).map_or(0.0, coerce::to_number);
        let value = raw.get(VALUE).map_or(0.0, coerce::to_number);
        by_code.insert(code, (volume, value));
    }

    for row in rows {
        let (volume, value) = by_code
            .get(row.text(CODE))
            .copied()
            .unwrap_or((0.0, 0.0));
        row.set(VOLUME, Value::Number(volume));
        row.set(VALUE, Value::Number(value));
    }
}
