//! CLI argument definitions for fieldmap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fieldmap",
    version,
    about = "Map spreadsheet fields and transfer them into a new workbook",
    long_about = "Map fields from a source spreadsheet to destination column names.\n\n\
                  Reads xlsx, xlsm, xlsb, xls, ods and csv files (first sheet only).\n\
                  Writes a single-sheet xlsx workbook, or csv."
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

    /// Allow cell values to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the header fields of a source file.
    Fields(FieldsArgs),

    /// Show the first values of one source field.
    Preview(PreviewArgs),

    /// Copy mapped fields into a new spreadsheet.
    Transfer(TransferArgs),
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Source spreadsheet (prompted for when omitted).
    #[arg(value_name = "SOURCE")]
    pub source: Option<PathBuf>,

    /// Print the boundary response as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Source spreadsheet.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Header name of the field to preview.
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Print the boundary response as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct TransferArgs {
    /// JSON file holding the mapping list.
    #[arg(
        long = "mappings",
        value_name = "FILE",
        conflicts_with_all = ["map", "source"],
        required_unless_present = "map"
    )]
    pub mappings: Option<PathBuf>,

    /// A SOURCE=DEST field pair; repeat for more columns, in output order.
    #[arg(long = "map", value_name = "SOURCE=DEST", requires = "source")]
    pub map: Vec<String>,

    /// Source spreadsheet for --map pairs.
    #[arg(long = "source", value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Output path (prompted for when omitted).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format, overriding the output file's extension.
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,

    /// File name suggested at the save prompt.
    #[arg(long = "default-name", value_name = "NAME")]
    pub default_name: Option<String>,

    /// Print the boundary response as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Xlsx,
    Csv,
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
