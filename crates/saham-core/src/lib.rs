//! # Saham Core
//!
//! Tabular normalization, query-filter and ranking engine for Indonesia
//! Stock Exchange (IDX) market exports.
//!
//! The same small engine sits behind every board: spreadsheet and CSV
//! exports are decoded into raw rows, normalized against a per-dataset
//! [`Schema`] into fixed-shape records, then filtered with a conjunctive
//! comparison query, sorted, ranked and paginated.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use saham_core::{ingest, record, screener, TableView};
//!
//! // Load and normalize the screener export
//! let raw = ingest::sheet::records("stock-screener.xlsx")?;
//! let rows = record::normalize_rows(&screener::columns(), &raw);
//!
//! // One view = filter + sort + pagination over one record set
//! let mut view = TableView::new(screener::columns(), screener::aliases(), rows, 10);
//! view.apply_query("PER < 12 AND ROE % > 15 AND Volume > 1000000");
//! view.sort_by("Mkt Cap");
//!
//! for record in view.page_records() {
//!     println!("{}", record.text(screener::CODE));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod accumulate;
pub mod broker;
#[cfg(test)]
mod broker_tests;
pub mod coerce;
#[cfg(test)]
mod coerce_tests;
pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod format;
pub mod groups;
pub mod ingest;
pub mod page;
pub mod query;
pub mod rank;
#[cfg(test)]
mod rank_tests;
pub mod record;
#[cfg(test)]
mod record_tests;
pub mod schema;
pub mod screener;
pub mod sort;
#[cfg(test)]
mod sort_tests;
pub mod value;
pub mod view;

pub use config::{ConfigError, DataConfig, DisplayConfig, LoggingConfig, SahamConfig};
pub use error::{Error, Result};
pub use groups::BrokerGroups;
pub use page::Pager;
pub use query::{AliasTable, CompareOp, Condition, ParseError, Query};
pub use record::{normalize_rows, Record};
pub use schema::{ColumnSpec, ColumnType, Schema};
pub use screener::ScreenerLimits;
pub use sort::{sort_records, SortDirection, SortState};
pub use value::{RawRecord, RawValue, Value};
pub use view::TableView;
