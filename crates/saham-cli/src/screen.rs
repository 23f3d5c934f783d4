//! `saham screen` - the stock-screener board.

use std::path::PathBuf;

use saham_core::sort::SortDirection;
use saham_core::{ingest, normalize_rows, screener, SahamConfig, TableView};

use crate::output;

/// Options for the screen command.
pub struct ScreenOptions {
    /// Screener workbook path.
    pub file: PathBuf,
    /// Optional daily snapshot joined by ticker.
    pub volume_file: Option<PathBuf>,
    /// Query string; empty means no filter.
    pub query: String,
    /// Restrict the table to qualifying stocks.
    pub qualified_only: bool,
    /// Sort column, if any.
    pub sort: Option<String>,
    /// Sort direction flag.
    pub descending: bool,
    /// Requested page.
    pub page: usize,
    /// Page-size override.
    pub per_page: Option<usize>,
    /// Emit JSON instead of a table.
    pub json: bool,
}

pub fn run(options: &ScreenOptions, config: &SahamConfig) -> anyhow::Result<()> {
    let schema = screener::columns();
    let raw = ingest::sheet::records(&options.file)?;
    let mut rows = normalize_rows(&schema, &raw);

    if let Some(volume_file) = &options.volume_file {
        let snapshot = ingest::sheet::records(volume_file)?;
        screener::merge_volume(&mut rows, &snapshot);
    }

    // The leaderboard ranks the full dataset, independent of the query.
    let limits = config.screener;
    let ranking = screener::qualified_ranking(&rows, &limits);
    let ranks = screener::rank_map(&ranking);

    let per_page = options.per_page.unwrap_or(config.display.per_page);
    let mut view = TableView::new(schema, screener::aliases(), rows, per_page);
    view.apply_query(&options.query);
    if options.qualified_only {
        view.retain(|r| screener::qualifies(r, &limits));
    }
    if let Some(column) = &options.sort {
        let direction = if options.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        view.set_sort(column, direction);
    }
    view.set_page(options.page);

    if options.json {
        return output::print_json(view.page_records());
    }

    output::print_leaderboard(&ranking, config.display.per_page);
    println!();
    output::print_records(
        view.schema(),
        view.page_records(),
        Some((screener::CODE, &ranks)),
    );
    output::print_page_footer(view.current_page(), view.total_pages(), view.len());
    Ok(())
}
