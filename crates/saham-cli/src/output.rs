//! Table and JSON rendering for the boards.

use std::collections::HashMap;

use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use saham_core::accumulate::{FlowMode, GroupTotals, NetFlow};
use saham_core::broker::{BrokerSummary, BrokerTotals};
use saham_core::format::{format_cell, format_compact, format_number, format_percent};
use saham_core::{Record, Schema};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cells<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<Cell> {
    names
        .into_iter()
        .map(|name| Cell::new(name).fg(Color::Cyan))
        .collect()
}

/// Prints records as a table, one column per schema column. Rank badges
/// attach to the ticker in `rank_column`, when a rank is known.
pub fn print_records(
    schema: &Schema,
    records: &[Record],
    rank_column: Option<(&str, &HashMap<String, usize>)>,
) {
    if records.is_empty() {
        println!("{}", "No results.".dimmed());
        return;
    }

    let mut table = base_table();
    table.set_header(header_cells(
        schema.columns().iter().map(|c| c.name.as_str()),
    ));

    for record in records {
        let cells: Vec<Cell> = schema
            .columns()
            .iter()
            .map(|spec| {
                let content = record
                    .get(&spec.name)
                    .map_or_else(|| "-".to_string(), |v| format_cell(v, spec.ty));
                match rank_column {
                    Some((column, ranks)) if column == spec.name => {
                        match ranks.get(record.text(column)) {
                            Some(rank) => Cell::new(format!("{content} (Rank #{rank})"))
                                .fg(Color::Green),
                            None => Cell::new(content),
                        }
                    }
                    _ => Cell::new(content),
                }
            })
            .collect();
        table.add_row(cells);
    }

    println!("{table}");
}

/// Prints records as pretty JSON.
pub fn print_json(records: &[Record]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

/// Prints the qualification leaderboard header line and its top slice.
pub fn print_leaderboard(ranking: &[Record], limit: usize) {
    println!(
        "{} {}",
        "Qualifying stocks:".bold(),
        format_number(ranking.len() as f64)
    );
    if ranking.is_empty() {
        return;
    }

    let mut table = base_table();
    table.set_header(header_cells([
        "#", "Kode", "Nama", "ROE %", "PER", "PBV", "DER", "Volume", "Value",
    ]));

    for (i, record) in ranking.iter().take(limit).enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(record.text("Kode Saham")).fg(Color::Green),
            Cell::new(record.text("Nama Perusahaan")),
            Cell::new(format_percent(record.number("ROE %"))),
            Cell::new(format_number(record.number("PER"))),
            Cell::new(format_number(record.number("PBV"))),
            Cell::new(format_number(record.number("DER"))),
            Cell::new(format_number(record.number("Volume"))),
            Cell::new(format_number(record.number("Nilai"))),
        ]);
    }
    println!("{table}");
}

/// Prints the all-broker transaction ranking.
pub fn print_broker_ranking(brokers: &[BrokerTotals], offset: usize) {
    if brokers.is_empty() {
        println!("{}", "No results.".dimmed());
        return;
    }

    let mut table = base_table();
    table.set_header(header_cells([
        "#",
        "Broker Name",
        "Kode Broker",
        "Total Buy(K)",
        "Total Sell(K)",
        "Total Value(K)",
    ]));

    for (i, broker) in brokers.iter().enumerate() {
        table.add_row(vec![
            Cell::new(offset + i + 1),
            Cell::new(&broker.name),
            Cell::new(&broker.code).fg(Color::Green),
            Cell::new(format_number(broker.total_buy)),
            Cell::new(format_number(broker.total_sell)),
            Cell::new(format_number(broker.total_value)),
        ]);
    }
    println!("{table}");
}

/// Prints daily broker summary rows.
pub fn print_summaries(rows: &[BrokerSummary], offset: usize) {
    if rows.is_empty() {
        println!("{}", "No results.".dimmed());
        return;
    }

    let mut table = base_table();
    table.set_header(header_cells([
        "#",
        "Code",
        "Net Val(M)",
        "Net Vol",
        "Buy Freq",
        "Buy Vol",
        "Buy Val(M)",
        "Buy AVG",
        "Sell Freq",
        "Sell Vol",
        "Sell Val(M)",
        "Sell AVG",
    ]));

    for (i, row) in rows.iter().enumerate() {
        table.add_row(vec![
            Cell::new(offset + i + 1),
            Cell::new(&row.code).fg(Color::Green),
            Cell::new(format_number(row.net_val_m)),
            Cell::new(format_number(row.net_vol)),
            Cell::new(format_number(row.buy_freq)),
            Cell::new(format_number(row.buy_vol)),
            Cell::new(format_number(row.buy_val_m)),
            Cell::new(format_number(row.buy_avg)),
            Cell::new(format_number(row.sell_freq)),
            Cell::new(format_number(row.sell_vol)),
            Cell::new(format_number(row.sell_val_m)),
            Cell::new(format_number(row.sell_avg)),
        ]);
    }
    println!("{table}");
}

/// Prints one side's accumulated net flows.
pub fn print_flows(title: &str, flows: &[NetFlow], limit: usize, buy_side: bool) {
    let heading = if buy_side {
        title.green().bold()
    } else {
        title.red().bold()
    };
    println!("{heading}");

    if flows.is_empty() {
        println!("{}", "No results.".dimmed());
        return;
    }

    let mut table = base_table();
    table.set_header(header_cells(["#", "Broker", "Volume", "Value", "Avg"]));

    for (i, flow) in flows.iter().take(limit).enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&flow.broker),
            Cell::new(format_number(flow.volume)),
            Cell::new(format_compact(flow.value)),
            Cell::new(format_number(flow.avg)),
        ]);
    }
    println!("{table}");
}

/// Prints the ranked broker-group aggregation.
pub fn print_group_ranking(groups: &[GroupTotals], mode: FlowMode) {
    let label = match mode {
        FlowMode::Value => "Value",
        FlowMode::Volume => "Volume",
    };
    println!("{} ({label})", "Broker group accumulation".bold());

    if groups.is_empty() {
        println!("{}", "No results.".dimmed());
        return;
    }

    let mut table = base_table();
    table.set_header(header_cells(["#", "Group", "Buy", "Sell", "Total", "Net"]));

    for (i, group) in groups.iter().enumerate() {
        let net = group.net(mode);
        let net_cell = if net >= 0.0 {
            Cell::new(format!("+{}", format_compact(net))).fg(Color::Green)
        } else {
            Cell::new(format!("-{}", format_compact(net.abs()))).fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&group.group),
            Cell::new(format_compact(group.buy(mode))),
            Cell::new(format_compact(group.sell(mode))),
            Cell::new(format_compact(group.total(mode))),
            net_cell,
        ]);
    }
    println!("{table}");
}

/// Prints the "Page X of Y" footer.
pub fn print_page_footer(page: usize, total_pages: usize, total_rows: usize) {
    println!(
        "{}",
        format!(
            "Page {page} of {total_pages} ({} rows)",
            format_number(total_rows as f64)
        )
        .dimmed()
    );
}
