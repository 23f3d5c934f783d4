#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
//! saham CLI - IDX screening boards in the terminal
//!
//! Usage:
//!   `saham screen ./data/stock-screener.xlsx --query "PER < 12 AND ROE > 15"`
//!   `saham rank ./data/ringkasan-saham.xlsx --by Volume`
//!   `saham brokers --trx ./data/allbrokertrx.csv --query "ubs"`
//!   `saham accumulate ./exports/*.xlsx --mode value`

mod accumulate;
mod brokers;
mod output;
mod rank;
mod screen;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use saham_core::accumulate::FlowMode;
use saham_core::SahamConfig;

#[derive(Parser)]
#[command(name = "saham")]
#[command(
    author,
    version,
    about = "IDX stock screening, broker rankings and net-flow boards"
)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a saham.toml configuration file
    #[arg(long, global = true, env = "SAHAM_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format option
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum FormatArg {
    #[default]
    Table,
    Json,
}

/// Aggregation mode option
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum ModeArg {
    #[default]
    Value,
    Volume,
}

impl From<ModeArg> for FlowMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Value => FlowMode::Value,
            ModeArg::Volume => FlowMode::Volume,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Screen stocks with a query over the ratio columns
    Screen {
        /// Path to the screener workbook (XLSX)
        file: PathBuf,

        /// Daily snapshot workbook joined by ticker for Volume/Value
        #[arg(long)]
        volume_file: Option<PathBuf>,

        /// Query, e.g. "PER < 12 AND ROE % > 15"
        #[arg(short, long, default_value = "")]
        query: String,

        /// Show only stocks passing the qualification rule
        #[arg(long)]
        qualified_only: bool,

        /// Sort column
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,

        /// Page number
        #[arg(long, default_value = "1")]
        page: usize,

        /// Rows per page (defaults to the configured page size)
        #[arg(long)]
        per_page: Option<usize>,

        /// Output format (table, json)
        #[arg(long, value_enum, default_value = "table")]
        format: FormatArg,
    },

    /// Rank the daily snapshot by a numeric column
    Rank {
        /// Path to the daily snapshot workbook (XLSX)
        file: PathBuf,

        /// Ranking column
        #[arg(long, default_value = "Volume")]
        by: String,

        /// Size of the foreign buy/sell boards
        #[arg(long, default_value = "10")]
        top: usize,

        /// Page number
        #[arg(long, default_value = "1")]
        page: usize,

        /// Rows per page (defaults to the configured page size)
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Broker transaction ranking and daily summary boards
    Brokers {
        /// All-broker transaction CSV
        #[arg(long)]
        trx: Option<PathBuf>,

        /// Daily broker summary CSV
        #[arg(long)]
        summary: Option<PathBuf>,

        /// Token search over broker code and name
        #[arg(short, long, default_value = "")]
        query: String,

        /// Show only summary rows with zero sell volume, by buy volume
        #[arg(long)]
        sell_zero: bool,

        /// Page number
        #[arg(long, default_value = "1")]
        page: usize,

        /// Rows per page (defaults to the configured page size)
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Accumulate net buy/sell tables across daily export files
    Accumulate {
        /// Export files (XLSX or CSV), dates taken from DD-MM-YYYY names
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Aggregate by value or volume
        #[arg(long, value_enum, default_value = "value")]
        mode: ModeArg,

        /// Rows on the net buy/sell boards (defaults to configuration)
        #[arg(long)]
        top: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SahamConfig::load_from_path(path)?,
        None => SahamConfig::load()?,
    };
    config.validate()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Screen {
            file,
            volume_file,
            query,
            qualified_only,
            sort,
            desc,
            page,
            per_page,
            format,
        } => screen::run(
            &screen::ScreenOptions {
                file,
                volume_file,
                query,
                qualified_only,
                sort,
                descending: desc,
                page,
                per_page,
                json: matches!(format, FormatArg::Json),
            },
            &config,
        ),

        Commands::Rank {
            file,
            by,
            top,
            page,
            per_page,
        } => rank::run(
            &rank::RankOptions {
                file,
                by,
                top,
                page,
                per_page,
            },
            &config,
        ),

        Commands::Brokers {
            trx,
            summary,
            query,
            sell_zero,
            page,
            per_page,
        } => brokers::run(
            &brokers::BrokerOptions {
                trx,
                summary,
                query,
                sell_zero,
                page,
                per_page,
            },
            &config,
        ),

        Commands::Accumulate { files, mode, top } => accumulate::run(
            &accumulate::AccumulateOptions {
                files,
                mode: mode.into(),
                top,
            },
            &config,
        ),
    }
}
