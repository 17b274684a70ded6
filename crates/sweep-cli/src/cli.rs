//! CLI argument definitions for the sweeper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use sweep_model::{Format, Operation};

#[derive(Parser)]
#[command(
    name = "sweeper",
    version,
    about = "Clean and convert CSV/XLSX tabular files",
    long_about = "Clean and convert tabular data files.\n\n\
                  Reads CSV and XLSX inputs, applies cleaning operations \
                  (duplicate removal, mean imputation, column selection), and \
                  writes the result as CSV or XLSX."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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

#[derive(Subcommand)]
pub enum Command {
    /// Convert files, optionally cleaning them on the way.
    Convert(ConvertArgs),

    /// Show the first rows of a file, optionally with a bar chart.
    Preview(PreviewArgs),

    /// List supported formats.
    Formats,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Input files; each is processed independently.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Target format.
    #[arg(long = "to", value_enum)]
    pub to: FormatArg,

    /// Source format (default: derived from each file's extension).
    #[arg(long = "from", value_enum)]
    pub from: Option<FormatArg>,

    /// Cleaning operation to apply; repeatable, applied in the order given.
    #[arg(long = "apply", value_enum, value_name = "OPERATION")]
    pub apply: Vec<OperationArg>,

    /// Comma-separated column names to keep (default: all columns).
    #[arg(long = "keep-columns", value_name = "NAME", value_delimiter = ',')]
    pub keep_columns: Vec<String>,

    /// Directory for output files (default: next to each input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Run the pipeline and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// File to preview.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Source format (default: derived from the file's extension).
    #[arg(long = "from", value_enum)]
    pub from: Option<FormatArg>,

    /// Number of rows to show.
    #[arg(long = "rows", default_value_t = 5)]
    pub rows: usize,

    /// Also render a bar chart of the first two numeric columns.
    #[arg(long = "chart")]
    pub chart: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Csv,
    Xlsx,
}

impl From<FormatArg> for Format {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => Self::Csv,
            FormatArg::Xlsx => Self::Xlsx,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OperationArg {
    RemoveDuplicates,
    FillMissingWithMean,
}

impl From<OperationArg> for Operation {
    fn from(value: OperationArg) -> Self {
        match value {
            OperationArg::RemoveDuplicates => Self::RemoveDuplicates,
            OperationArg::FillMissingWithMean => Self::FillMissingWithMean,
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
