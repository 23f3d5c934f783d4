//! Daily price/volume snapshot ranking boards.
//!
//! The daily trading summary ("Ringkasan Saham") ranks by traded volume and
//! feeds the top foreign buy/sell boards. Rank is a derived column assigned
//! after sorting, not a value carried by the source file.

use crate::record::Record;
use crate::schema::{ColumnSpec, Schema};
use crate::sort::{compare_numbers, SortDirection};
use crate::value::Value;

/// Derived 1-based position column.
pub const RANKING: &str = "Ranking";
/// Traded volume column.
pub const VOLUME: &str = "Volume";
/// Foreign buy volume column.
pub const FOREIGN_BUY: &str = "Foreign Buy";
/// Foreign sell volume column.
pub const FOREIGN_SELL: &str = "Foreign Sell";

/// Columns of the daily snapshot board.
#[must_use]
pub fn columns() -> Schema {
    Schema::new(vec![
        ColumnSpec::number(RANKING),
        ColumnSpec::text("Kode Saham"),
        ColumnSpec::text("Nama Perusahaan"),
        ColumnSpec::number(VOLUME),
        ColumnSpec::number("Offer"),
        ColumnSpec::number("Offer Volume"),
        ColumnSpec::number("Bid"),
        ColumnSpec::number("Bid Volume"),
        ColumnSpec::number(FOREIGN_SELL),
        ColumnSpec::number(FOREIGN_BUY),
    ])
}

/// Sorts records numerically by `column` and assigns `Ranking` from the
/// resulting 1-based order.
#[must_use]
pub fn rank_by(records: &[Record], column: &str, direction: SortDirection) -> Vec<Record> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| {
        let ord = compare_numbers(a.number(column), b.number(column));
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    assign_ranking(&mut ranked);
    ranked
}

/// The top `n` records by `column` descending, re-ranked within the slice.
#[must_use]
pub fn top_by(records: &[Record], column: &str, n: usize) -> Vec<Record> {
    let mut board = rank_by(records, column, SortDirection::Descending);
    board.truncate(n);
    assign_ranking(&mut board);
    board
}

fn assign_ranking(records: &mut [Record]) {
    for (i, record) in records.iter_mut().enumerate() {
        record.set(RANKING, Value::Number((i + 1) as f64));
    }
}
