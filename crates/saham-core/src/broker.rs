//! Broker transaction boards: all-broker totals and the daily summary.
//!
//! Both sources are positional CSV layouts without reliable headers. The
//! daily summary in particular ships with banner rows above the data, so
//! rows only count when their first cell looks like a ticker.

use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::sort::compare_numbers;

/// One broker's aggregate transaction totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerTotals {
    /// Broker code (e.g. "AK").
    pub code: String,
    /// Brokerage firm name.
    pub name: String,
    /// Total buy-side value, thousands.
    pub total_buy: f64,
    /// Total sell-side value, thousands.
    pub total_sell: f64,
    /// Total transaction value, thousands.
    pub total_value: f64,
}

impl BrokerTotals {
    /// Builds totals from one positional row: `code, name, buy, sell, value`.
    /// Rows without a code or name, or with all three numerics zero, yield
    /// `None`.
    #[must_use]
    pub fn from_row(row: &[String]) -> Option<Self> {
        let code = row.first()?.trim().to_string();
        let name = row.get(1)?.trim().to_string();
        if code.is_empty() || name.is_empty() {
            return None;
        }

        let total_buy = row.get(2).map_or(0.0, |c| coerce::parse_number(c));
        let total_sell = row.get(3).map_or(0.0, |c| coerce::parse_number(c));
        let total_value = row.get(4).map_or(0.0, |c| coerce::parse_number(c));
        if total_buy == 0.0 && total_sell == 0.0 && total_value == 0.0 {
            return None;
        }

        Some(Self {
            code,
            name,
            total_buy,
            total_sell,
            total_value,
        })
    }

    /// Token search over code and name. The needle splits on commas and
    /// whitespace; every token must be a case-insensitive substring of the
    /// code or the name. An empty needle matches everything.
    #[must_use]
    pub fn matches_tokens(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let code = self.code.to_lowercase();
        let name = self.name.to_lowercase();
        needle
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .all(|t| code.contains(t) || name.contains(t))
    }
}

/// Parses the all-broker transaction rows (header row first) and ranks by
/// total value descending.
#[must_use]
pub fn transaction_ranking(rows: &[Vec<String>]) -> Vec<BrokerTotals> {
    let mut brokers: Vec<BrokerTotals> = rows
        .iter()
        .skip(1)
        .filter_map(|row| BrokerTotals::from_row(row))
        .collect();
    brokers.sort_by(|a, b| compare_numbers(b.total_value, a.total_value));
    brokers
}

/// Filters a broker list by token search.
#[must_use]
pub fn search(brokers: &[BrokerTotals], needle: &str) -> Vec<BrokerTotals> {
    brokers
        .iter()
        .filter(|b| b.matches_tokens(needle))
        .cloned()
        .collect()
}

/// One stock's row in the daily broker summary export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrokerSummary {
    /// Ticker.
    pub code: String,
    /// Net value, millions.
    pub net_val_m: f64,
    /// Net volume.
    pub net_vol: f64,
    /// Foreign net value, millions.
    pub foreign_net_val_m: f64,
    /// Foreign net volume.
    pub foreign_net_vol: f64,
    /// Buy-side frequency.
    pub buy_freq: f64,
    /// Buy-side volume.
    pub buy_vol: f64,
    /// Buy-side value, millions.
    pub buy_val_m: f64,
    /// Buy-side average price.
    pub buy_avg: f64,
    /// Sell-side frequency.
    pub sell_freq: f64,
    /// Sell-side volume.
    pub sell_vol: f64,
    /// Sell-side value, millions.
    pub sell_val_m: f64,
    /// Sell-side average price.
    pub sell_avg: f64,
    /// Foreign buy frequency.
    pub foreign_buy_freq: f64,
    /// Foreign buy volume.
    pub foreign_buy_vol: f64,
    /// Foreign buy value, millions.
    pub foreign_buy_val_m: f64,
    /// Foreign buy average price.
    pub foreign_buy_avg: f64,
    /// Foreign sell frequency.
    pub foreign_sell_freq: f64,
    /// Foreign sell volume.
    pub foreign_sell_vol: f64,
    /// Foreign sell value, millions.
    pub foreign_sell_val_m: f64,
    /// Foreign sell average price.
    pub foreign_sell_avg: f64,
}

impl BrokerSummary {
    fn from_row(row: &[String]) -> Self {
        let num = |i: usize| row.get(i).map_or(0.0, |c| coerce::parse_number(c));
        Self {
            code: row.first().cloned().unwrap_or_default(),
            net_val_m: num(1),
            net_vol: num(2),
            foreign_net_val_m: num(3),
            foreign_net_vol: num(4),
            buy_freq: num(5),
            buy_vol: num(6),
            buy_val_m: num(7),
            buy_avg: num(8),
            sell_freq: num(9),
            sell_vol: num(10),
            sell_val_m: num(11),
            sell_avg: num(12),
            foreign_buy_freq: num(13),
            foreign_buy_vol: num(14),
            foreign_buy_val_m: num(15),
            foreign_buy_avg: num(16),
            foreign_sell_freq: num(17),
            foreign_sell_vol: num(18),
            foreign_sell_val_m: num(19),
            foreign_sell_avg: num(20),
        }
    }
}

/// Returns true for strings shaped like an IDX ticker: 2 to 5 uppercase
/// ASCII letters.
#[must_use]
pub fn looks_like_ticker(s: &str) -> bool {
    (2..=5).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_uppercase())
}

/// Parses the daily broker summary grid.
///
/// Cells are cleaned of UTF-8 BOMs and surrounding whitespace; fully empty
/// rows drop out. Data starts at the first row whose leading cell looks like
/// a ticker (falling back to skipping one header row when none is found),
/// and any leftover non-ticker rows below are discarded.
#[must_use]
pub fn parse_summary(rows: &[Vec<String>]) -> Vec<BrokerSummary> {
    let cleaned: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.replace('\u{feff}', "").trim().to_string())
                .collect::<Vec<String>>()
        })
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect();

    let first_data = cleaned
        .iter()
        .position(|row| row.first().is_some_and(|c| looks_like_ticker(c)))
        .unwrap_or(1);

    cleaned
        .iter()
        .skip(first_data)
        .map(|row| BrokerSummary::from_row(row))
        .filter(|summary| looks_like_ticker(&summary.code))
        .collect()
}

/// The accumulation-candidate board: rows with zero sell volume, ordered by
/// buy volume descending. Position is the rank.
#[must_use]
pub fn sell_zero_board(rows: &[BrokerSummary]) -> Vec<BrokerSummary> {
    let mut board: Vec<BrokerSummary> = rows
        .iter()
        .filter(|r| r.sell_vol == 0.0)
        .cloned()
        .collect();
    board.sort_by(|a, b| compare_numbers(b.buy_vol, a.buy_vol));
    board
}
