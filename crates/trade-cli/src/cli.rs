//! CLI argument definitions for the trade extractor.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use trade_model::ItemKind;

/// Date format accepted by `--date` and stored in the database.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Parser)]
#[command(
    name = "trade-extract",
    version,
    about = "Extract high-tech trade data with fuzzy country and product lookup",
    long_about = "Extract trade transactions from a SQLite database.\n\n\
                  Countries and products may be given as codes or names; names are\n\
                  resolved exactly first, then by similarity."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub paths: PathArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Locations of the database, reference data and exports.
#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// SQLite database with the trade transactions.
    #[arg(
        long = "database",
        env = "DB_PATH",
        value_name = "PATH",
        default_value = "data/high_tech_2024.db",
        global = true
    )]
    pub database: PathBuf,

    /// Directory holding countries_codes.csv and H5.json.
    #[arg(
        long = "data-dir",
        env = "DATA_DIR",
        value_name = "DIR",
        default_value = "data",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Directory for CSV exports without an explicit --output.
    #[arg(
        long = "output-dir",
        env = "OUTPUT_DIR",
        value_name = "DIR",
        default_value = "outputs",
        global = true
    )]
    pub output_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract trade records matching the given filters.
    Extract(ExtractArgs),

    /// List every known country or product code.
    List {
        #[arg(value_enum)]
        kind: KindArg,
    },

    /// Search countries or products by similar name.
    Search {
        #[arg(value_enum)]
        kind: KindArg,

        /// Name or fragment to look for.
        #[arg(value_name = "TERM", value_parser = parse_query)]
        term: String,
    },
}

#[derive(Args, Debug, Clone)]
#[command(group(
    ArgGroup::new("filters")
        .args(["date", "country", "product"])
        .required(true)
        .multiple(true)
))]
pub struct ExtractArgs {
    /// Transaction date (YYYY-MM-DD).
    #[arg(short = 'd', long = "date", value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Reporter country code or name.
    #[arg(short = 'c', long = "country", value_parser = parse_query)]
    pub country: Option<String>,

    /// HS product code or description.
    #[arg(short = 'p', long = "product", value_parser = parse_query)]
    pub product: Option<String>,

    /// Save the extract as CSV.
    #[arg(long = "csv")]
    pub csv: bool,

    /// CSV file path (default: <OUTPUT_DIR>/trade_data_<timestamp>.csv).
    #[arg(short = 'o', long = "output", value_name = "FILE", requires = "csv")]
    pub output: Option<PathBuf>,

    /// Number of records to display.
    #[arg(short = 'l', long = "limit", default_value_t = 20)]
    pub limit: usize,
}

/// Reference table selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Countries,
    Products,
}

impl From<KindArg> for ItemKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Countries => ItemKind::Country,
            KindArg::Products => ItemKind::Product,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| format!("invalid date '{value}', expected YYYY-MM-DD"))
}

fn parse_query(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("value must not be blank".to_string());
    }
    Ok(trimmed.to_string())
}
