//! `saham rank` - daily snapshot volume ranking and foreign boards.

use std::path::PathBuf;

use saham_core::sort::SortDirection;
use saham_core::{ingest, normalize_rows, rank, Pager, SahamConfig};

use crate::output;

/// Options for the rank command.
pub struct RankOptions {
    /// Snapshot workbook path.
    pub file: PathBuf,
    /// Ranking column.
    pub by: String,
    /// Foreign board size.
    pub top: usize,
    /// Requested page.
    pub page: usize,
    /// Page-size override.
    pub per_page: Option<usize>,
}

pub fn run(options: &RankOptions, config: &SahamConfig) -> anyhow::Result<()> {
    let schema = rank::columns();
    let raw = ingest::sheet::records(&options.file)?;
    let rows = normalize_rows(&schema, &raw);

    let ranked = rank::rank_by(&rows, &options.by, SortDirection::Descending);

    let mut pager = Pager::new(options.per_page.unwrap_or(config.display.per_page));
    pager.set_page(options.page);

    output::print_records(&schema, pager.slice(&ranked), None);
    output::print_page_footer(
        pager.clamped_page(ranked.len()),
        pager.total_pages(ranked.len()),
        ranked.len(),
    );

    println!();
    println!("Top {} Foreign Buy", options.top);
    output::print_records(&schema, &rank::top_by(&ranked, rank::FOREIGN_BUY, options.top), None);

    println!();
    println!("Top {} Foreign Sell", options.top);
    output::print_records(
        &schema,
        &rank::top_by(&ranked, rank::FOREIGN_SELL, options.top),
        None,
    );

    Ok(())
}
