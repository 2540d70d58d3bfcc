//! CLI argument definitions for the bibliography cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bibtidy",
    version,
    about = "BibTeX bibliography cleaner - normalize references for publication",
    long_about = "Normalize BibTeX bibliographies for publication.\n\n\
                  Resolves journal names to CASSI abbreviations, applies title\n\
                  casing, strips DOI resolver prefixes, fixes page-range dashes,\n\
                  and prunes reference-manager clutter fields."
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
    /// Clean a BibTeX file and write the normalized result.
    Clean(CleanArgs),

    /// Show the default field order, pruned fields, and casing word lists.
    Defaults,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the BibTeX file to clean.
    #[arg(value_name = "BIB_FILE")]
    pub input: PathBuf,

    /// CSV table mapping publication names to CASSI abbreviations.
    #[arg(long = "cassi", value_name = "CSV")]
    pub cassi: PathBuf,

    /// Output path (default: `<input stem>_clean.bib` next to the input).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report what would change without writing the cleaned file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Re-emit comment blocks at the top of the output.
    #[arg(long = "keep-comments")]
    pub keep_comments: bool,

    /// Sort entries by citation key instead of keeping input order.
    #[arg(long = "sort")]
    pub sort: bool,

    /// Field deleted from every record; repeat to replace the default set.
    #[arg(long = "remove-field", value_name = "NAME")]
    pub remove_field: Vec<String>,

    /// Keep all fields, skipping the pruning stage entirely.
    #[arg(long = "no-prune")]
    pub no_prune: bool,

    /// Field written first in each entry; repeat to replace the default order.
    #[arg(long = "field-order", value_name = "NAME")]
    pub field_order: Vec<String>,

    /// Additional minor word lowercased inside titles.
    #[arg(long = "lower-word", value_name = "WORD")]
    pub lower_word: Vec<String>,

    /// Additional acronym forced to uppercase in titles.
    #[arg(long = "upper-word", value_name = "WORD")]
    pub upper_word: Vec<String>,

    /// Additional word left exactly as authored in titles.
    #[arg(long = "ignore-word", value_name = "WORD")]
    pub ignore_word: Vec<String>,
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
