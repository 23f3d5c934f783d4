//! Multi-day net buy/sell accumulation and broker-group aggregation.
//!
//! Daily export sheets carry two side-by-side tables, each shaped
//! `broker | volume | value`: the first is the net-buy table, the second the
//! net-sell table. A header row naming both "net buy" and "net sell" sits
//! above them; the row below it carries the repeated column labels.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::groups::{BrokerGroups, UNKNOWN_GROUP};
use crate::sort::compare_numbers;

/// How many leading rows are searched for the net buy/sell header.
const HEADER_SCAN_ROWS: usize = 10;

/// Whether boards aggregate by traded value or by volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowMode {
    /// Rank by accumulated value.
    #[default]
    Value,
    /// Rank by accumulated volume.
    Volume,
}

/// Column indices of one `broker | volume | value` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnTriple {
    broker: usize,
    volume: usize,
    value: usize,
}

/// Extracts a `DD-MM-YYYY` date from an export file name
/// (e.g. `20-11-2025.xlsx`).
#[must_use]
pub fn parse_file_date(name: &str) -> Option<NaiveDate> {
    let bytes = name.as_bytes();
    for start in 0..bytes.len().saturating_sub(9) {
        let window = &bytes[start..start + 10];
        let shaped = window.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
        if !shaped {
            continue;
        }
        let parsed = std::str::from_utf8(window)
            .ok()
            .and_then(|w| NaiveDate::parse_from_str(w, "%d-%m-%Y").ok());
        if let Some(date) = parsed {
            return Some(date);
        }
    }
    None
}

fn find_header_row(rows: &[Vec<String>]) -> Option<usize> {
    rows.iter().take(HEADER_SCAN_ROWS).position(|row| {
        let joined = row
            .iter()
            .map(|cell| cell.to_lowercase())
            .collect::<Vec<_>>()
            .join("|");
        joined.contains("net buy") && joined.contains("net sell")
    })
}

/// Scans a label row left-to-right for consecutive `broker, volume, value`
/// cells. The first match addresses the buy table, the second the sell table.
fn column_triples(row: &[String]) -> Vec<ColumnTriple> {
    let mut triples = Vec::new();
    if row.len() < 3 {
        return triples;
    }
    for i in 0..row.len() - 2 {
        let label = |j: usize| row[j].trim().to_lowercase();
        if label(i) == "broker" && label(i + 1) == "volume" && label(i + 2) == "value" {
            triples.push(ColumnTriple {
                broker: i,
                volume: i + 1,
                value: i + 2,
            });
        }
    }
    triples
}

#[derive(Debug, Clone, Default)]
struct SideTotals {
    volume: f64,
    value: f64,
    dates: BTreeSet<NaiveDate>,
}

impl SideTotals {
    fn add(&mut self, volume: f64, value: f64, date: Option<NaiveDate>) {
        self.volume += volume;
        self.value += value;
        if let Some(date) = date {
            self.dates.insert(date);
        }
    }
}

/// One broker's accumulated flow on one side of the book.
#[derive(Debug, Clone, PartialEq)]
pub struct NetFlow {
    /// Broker code.
    pub broker: String,
    /// Accumulated volume.
    pub volume: f64,
    /// Accumulated value.
    pub value: f64,
    /// Average price, `value / volume` (zero when volume is zero).
    pub avg: f64,
    /// Distinct dates that contributed, ascending.
    pub dates: Vec<NaiveDate>,
}

/// Accumulates net buy/sell tables across any number of daily sheets.
#[derive(Debug, Default)]
pub struct Accumulator {
    buy: IndexMap<String, SideTotals>,
    sell: IndexMap<String, SideTotals>,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
}

impl Accumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one sheet into the running totals. Returns false when the sheet
    /// carries no recognizable net buy/sell header and was skipped (its date
    /// still counts toward the covered range).
    pub fn ingest_sheet(&mut self, rows: &[Vec<String>], date: Option<NaiveDate>) -> bool {
        if let Some(date) = date {
            self.min_date = Some(self.min_date.map_or(date, |d| d.min(date)));
            self.max_date = Some(self.max_date.map_or(date, |d| d.max(date)));
        }

        let Some(header_row) = find_header_row(rows) else {
            tracing::warn!("sheet has no net buy/net sell header, skipping");
            return false;
        };
        let Some(label_row) = rows.get(header_row + 1) else {
            tracing::warn!("sheet ends after the net buy/net sell header, skipping");
            return false;
        };

        let triples = column_triples(label_row);
        let data = &rows[(header_row + 2).min(rows.len())..];

        if let Some(buy_cols) = triples.first() {
            for row in data {
                let Some((broker, volume, value)) = read_flow_row(row, *buy_cols) else {
                    continue;
                };
                // Only genuine buy-side accumulation counts.
                if volume > 0.0 && value > 0.0 {
                    self.buy.entry(broker).or_default().add(volume, value, date);
                }
            }
        }

        if let Some(sell_cols) = triples.get(1) {
            for row in data {
                let Some((broker, volume, value)) = read_flow_row(row, *sell_cols) else {
                    continue;
                };
                // Sell-side values may carry either sign depending on the
                // export; only all-zero rows are noise.
                if volume != 0.0 && value != 0.0 {
                    self.sell
                        .entry(broker)
                        .or_default()
                        .add(volume, value, date);
                }
            }
        }

        true
    }

    /// Accumulated net-buy flows, by value descending.
    #[must_use]
    pub fn net_buy(&self) -> Vec<NetFlow> {
        let mut flows = collect_flows(&self.buy);
        flows.sort_by(|a, b| compare_numbers(b.value, a.value));
        flows
    }

    /// Accumulated net-sell flows, by absolute value descending.
    #[must_use]
    pub fn net_sell(&self) -> Vec<NetFlow> {
        let mut flows = collect_flows(&self.sell);
        flows.sort_by(|a, b| compare_numbers(b.value.abs(), a.value.abs()));
        flows
    }

    /// The min and max dates seen across ingested files.
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.min_date?, self.max_date?))
    }
}

fn read_flow_row(row: &[String], cols: ColumnTriple) -> Option<(String, f64, f64)> {
    let broker = row.get(cols.broker)?.trim().to_string();
    if broker.is_empty() || broker.eq_ignore_ascii_case("broker") {
        return None;
    }
    let volume = row.get(cols.volume).map_or(0.0, |c| coerce::parse_number(c));
    let value = row.get(cols.value).map_or(0.0, |c| coerce::parse_number(c));
    Some((broker, volume, value))
}

fn collect_flows(side: &IndexMap<String, SideTotals>) -> Vec<NetFlow> {
    side.iter()
        .map(|(broker, totals)| NetFlow {
            broker: broker.clone(),
            volume: totals.volume,
            value: totals.value,
            avg: if totals.volume == 0.0 {
                0.0
            } else {
                totals.value / totals.volume
            },
            dates: totals.dates.iter().copied().collect(),
        })
        .collect()
}

/// Per-group aggregate of buy and sell flows.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotals {
    /// Group name.
    pub group: String,
    /// Accumulated buy volume.
    pub buy_volume: f64,
    /// Accumulated buy value.
    pub buy_value: f64,
    /// Accumulated sell volume, absolute.
    pub sell_volume: f64,
    /// Accumulated sell value, absolute.
    pub sell_value: f64,
    /// Buy plus sell volume.
    pub total_volume: f64,
    /// Buy plus sell value.
    pub total_value: f64,
    /// Buy minus sell volume.
    pub net_volume: f64,
    /// Buy minus sell value.
    pub net_value: f64,
}

impl GroupTotals {
    fn new(group: &str) -> Self {
        Self {
            group: group.to_string(),
            buy_volume: 0.0,
            buy_value: 0.0,
            sell_volume: 0.0,
            sell_value: 0.0,
            total_volume: 0.0,
            total_value: 0.0,
            net_volume: 0.0,
            net_value: 0.0,
        }
    }

    /// Buy-side figure for the given mode.
    #[must_use]
    pub fn buy(&self, mode: FlowMode) -> f64 {
        match mode {
            FlowMode::Value => self.buy_value,
            FlowMode::Volume => self.buy_volume,
        }
    }

    /// Sell-side figure for the given mode.
    #[must_use]
    pub fn sell(&self, mode: FlowMode) -> f64 {
        match mode {
            FlowMode::Value => self.sell_value,
            FlowMode::Volume => self.sell_volume,
        }
    }

    /// Total figure for the given mode.
    #[must_use]
    pub fn total(&self, mode: FlowMode) -> f64 {
        match mode {
            FlowMode::Value => self.total_value,
            FlowMode::Volume => self.total_volume,
        }
    }

    /// Net figure for the given mode.
    #[must_use]
    pub fn net(&self, mode: FlowMode) -> f64 {
        match mode {
            FlowMode::Value => self.net_value,
            FlowMode::Volume => self.net_volume,
        }
    }
}

/// Aggregates flows per broker group. A broker in several groups contributes
/// to each of them; brokers no group claims land in the `Unknown` bucket.
/// Groups with no activity at all drop out, `Unknown` included.
#[must_use]
pub fn aggregate_groups(
    groups: &BrokerGroups,
    buy: &[NetFlow],
    sell: &[NetFlow],
) -> Vec<GroupTotals> {
    let mut acc: IndexMap<String, GroupTotals> = groups
        .names()
        .map(|name| (name.to_string(), GroupTotals::new(name)))
        .collect();
    acc.entry(UNKNOWN_GROUP.to_string())
        .or_insert_with(|| GroupTotals::new(UNKNOWN_GROUP));

    for flow in buy {
        for group in groups.groups_for(&flow.broker) {
            let row = acc
                .entry(group.to_string())
                .or_insert_with(|| GroupTotals::new(group));
            row.buy_volume += flow.volume;
            row.buy_value += flow.value;
        }
    }
    for flow in sell {
        for group in groups.groups_for(&flow.broker) {
            let row = acc
                .entry(group.to_string())
                .or_insert_with(|| GroupTotals::new(group));
            row.sell_volume += flow.volume.abs();
            row.sell_value += flow.value.abs();
        }
    }

    acc.into_values()
        .map(|mut row| {
            row.total_volume = row.buy_volume + row.sell_volume;
            row.total_value = row.buy_value + row.sell_value;
            row.net_volume = row.buy_volume - row.sell_volume;
            row.net_value = row.buy_value - row.sell_value;
            row
        })
        .filter(|row| row.total_value != 0.0 || row.total_volume != 0.0)
        .collect()
}

/// Ranks group totals by the mode's total, descending.
#[must_use]
pub fn rank_groups(mut totals: Vec<GroupTotals>, mode: FlowMode) -> Vec<GroupTotals> {
    totals.sort_by(|a, b| compare_numbers(b.total(mode), a.total(mode)));
    totals
}
