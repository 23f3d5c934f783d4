//! `saham brokers` - broker transaction ranking and daily summary boards.

use std::path::PathBuf;

use anyhow::bail;
use saham_core::{broker, ingest, Pager, SahamConfig};

use crate::output;

/// Options for the brokers command.
pub struct BrokerOptions {
    /// All-broker transaction CSV.
    pub trx: Option<PathBuf>,
    /// Daily broker summary CSV.
    pub summary: Option<PathBuf>,
    /// Token search over code and name.
    pub query: String,
    /// Restrict the summary to zero sell-volume rows.
    pub sell_zero: bool,
    /// Requested page.
    pub page: usize,
    /// Page-size override.
    pub per_page: Option<usize>,
}

pub fn run(options: &BrokerOptions, config: &SahamConfig) -> anyhow::Result<()> {
    if options.trx.is_none() && options.summary.is_none() {
        bail!("nothing to show: pass --trx and/or --summary");
    }

    let mut pager = Pager::new(options.per_page.unwrap_or(config.display.per_page));
    pager.set_page(options.page);

    if let Some(trx) = &options.trx {
        let grid = ingest::csv::rows(trx)?;
        let brokers = broker::transaction_ranking(&grid);
        let filtered = broker::search(&brokers, &options.query);

        println!("Broker ranking by Total Value(K)");
        let offset = (pager.clamped_page(filtered.len()) - 1) * pager.per_page();
        output::print_broker_ranking(pager.slice(&filtered), offset);
        output::print_page_footer(
            pager.clamped_page(filtered.len()),
            pager.total_pages(filtered.len()),
            filtered.len(),
        );
    }

    if let Some(summary) = &options.summary {
        let grid = ingest::csv::rows(summary)?;
        let summaries = broker::parse_summary(&grid);
        let board = if options.sell_zero {
            broker::sell_zero_board(&summaries)
        } else {
            summaries
        };

        println!();
        if options.sell_zero {
            println!("Daily summary: Sell Vol = 0, by Buy Vol");
        } else {
            println!("Daily summary");
        }
        let offset = (pager.clamped_page(board.len()) - 1) * pager.per_page();
        output::print_summaries(pager.slice(&board), offset);
        output::print_page_footer(
            pager.clamped_page(board.len()),
            pager.total_pages(board.len()),
            board.len(),
        );
    }

    Ok(())
}
