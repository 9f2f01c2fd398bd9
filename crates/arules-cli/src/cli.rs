//! CLI argument definitions for the itemset preprocessor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "arules-prep",
    version,
    about = "Itemset preprocessor - turn fixed-width microdata into transactions",
    long_about = "Convert fixed-width survey and administrative records into itemset\n\
                  transactions for association-rule mining.\n\n\
                  Fields are encoded per a JSON layout: binary and categorical codes\n\
                  through value maps (with an optional shared OTHERS bucket), and\n\
                  continuous values through equal-width interval discretization."
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
    /// Preprocess a fixed-width data file into transactions.
    Process(ProcessArgs),

    /// Validate a layout file and show its fields.
    Layout(LayoutArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the fixed-width data file.
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Path to the JSON field layout.
    #[arg(long = "layout", value_name = "LAYOUT_FILE")]
    pub layout: PathBuf,

    /// Output directory for generated files (default: next to DATA_FILE).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: OutputFormatArg,

    /// How to handle records that fail to encode.
    ///
    /// `abort` fails the run at the first bad record; `skip` drops bad
    /// records with a warning and keeps going.
    #[arg(long = "on-error", value_enum, default_value = "abort")]
    pub on_error: RecordPolicyArg,

    /// Assign transaction IDs only to committed transactions.
    ///
    /// By default the counter advances once per record attempt, so a
    /// skipped record leaves a gap in the ID sequence.
    #[arg(long = "deferred-ids")]
    pub deferred_ids: bool,

    /// Preprocess and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Show at most this many transactions in the summary table.
    #[arg(long = "preview", value_name = "N", default_value_t = 20)]
    pub preview: usize,
}

#[derive(Parser)]
pub struct LayoutArgs {
    /// Path to the JSON field layout.
    #[arg(value_name = "LAYOUT_FILE")]
    pub layout: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    Csv,
    Both,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RecordPolicyArg {
    Abort,
    Skip,
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
