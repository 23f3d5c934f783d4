//! `saham accumulate` - multi-day net buy/sell accumulation.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use saham_core::accumulate::{
    aggregate_groups, parse_file_date, rank_groups, Accumulator, FlowMode,
};
use saham_core::{ingest, Result, SahamConfig};

use crate::output;

/// Options for the accumulate command.
pub struct AccumulateOptions {
    /// Daily export files.
    pub files: Vec<PathBuf>,
    /// Aggregation mode.
    pub mode: FlowMode,
    /// Board-size override.
    pub top: Option<usize>,
}

pub fn run(options: &AccumulateOptions, config: &SahamConfig) -> anyhow::Result<()> {
    let mut accumulator = Accumulator::new();
    let progress = create_progress_bar(options.files.len());
    let mut skipped = 0usize;

    for file in &options.files {
        let name = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        progress.set_message(name.to_string());

        let rows = load_grid(file)?;
        let date = parse_file_date(name);
        if !accumulator.ingest_sheet(&rows, date) {
            tracing::warn!(file = %file.display(), "no net buy/net sell tables found");
            skipped += 1;
        }
        progress.inc(1);
    }
    progress.finish_with_message("Accumulation complete");

    if skipped > 0 {
        println!("Skipped {skipped} file(s) without net buy/net sell tables.");
    }
    if let Some((start, end)) = accumulator.date_range() {
        println!(
            "Period: {} to {}",
            start.format("%d-%m-%Y"),
            end.format("%d-%m-%Y")
        );
    }

    let net_buy = accumulator.net_buy();
    let net_sell = accumulator.net_sell();
    let top = options.top.unwrap_or(config.display.top_flows);

    let groups = rank_groups(
        aggregate_groups(&config.groups, &net_buy, &net_sell),
        options.mode,
    );
    println!();
    output::print_group_ranking(&groups, options.mode);

    println!();
    output::print_flows(&format!("Net Buy (Top {top})"), &net_buy, top, true);
    println!();
    output::print_flows(&format!("Net Sell (Top {top})"), &net_sell, top, false);

    Ok(())
}

/// Loads a daily export as a positional grid, dispatching on the extension:
/// spreadsheet formats go through the workbook reader, anything else is CSV.
fn load_grid(path: &Path) -> Result<Vec<Vec<String>>> {
    let is_workbook = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| matches!(e.to_lowercase().as_str(), "xlsx" | "xls" | "xlsb" | "ods"));
    if is_workbook {
        ingest::sheet::rows(path)
    } else {
        ingest::csv::rows(path)
    }
}

fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}
