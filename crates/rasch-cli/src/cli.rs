//! CLI argument definitions for the response matrix cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use rasch_model::FillMissing;

#[derive(Parser)]
#[command(
    name = "rasch-clean",
    version,
    about = "Clean spreadsheet answer sheets into Rasch response matrices",
    long_about = "Clean spreadsheet answer sheets into Rasch response matrices.\n\n\
                  Item columns are inferred from header text and cell content; the\n\
                  result is a header-less 0/1 grid with empty fields for missing answers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

#[derive(Subcommand)]
pub enum Command {
    /// Clean a raw matrix and write the estimation input.
    Clean(CleanArgs),

    /// Show how each column was classified and which were selected.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Raw matrix: `.json` request body or delimited text export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// Replace missing responses with 0 or 1.
    #[arg(long = "fill-missing", value_name = "0|1")]
    pub fill_missing: Option<FillMissing>,

    /// JSON file overriding cleaning thresholds.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Raw matrix: `.json` request body or delimited text export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// JSON file overriding cleaning thresholds.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Header-less estimation CSV.
    Csv,
    /// `{"items": [...], "responses": [[...]]}`.
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
