//! CLI argument definitions for the Compliance Compass pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "compass",
    version,
    about = "Compliance Compass - build the static control-mapping API",
    long_about = "Convert OWASP, ISO27001 and NIST control exports into one normalized\n\
                  record set and expand it into static JSON API files.\n\n\
                  Paths default to compass.toml (if present) and may be overridden per command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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

    /// Pipeline configuration file (default: ./compass.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert the per-standard CSV exports into one JSON record set.
    Import(ImportArgs),

    /// Expand the record set into the static JSON API tree.
    Generate(GenerateArgs),

    /// Run import, then generate.
    Build(GenerateArgs),

    /// Filter the record set by text, standard and category.
    Search(SearchArgs),

    /// List the distinct categories and their slugs.
    Categories(SourceArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Output path for the combined record set.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Record set to read (ignored by `build`, which uses the import output).
    #[arg(long = "source", value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Directory the API tree is written to.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Public site URL written to the index usage block.
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Case-insensitive text matched against id, title and description.
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Only controls of this standard (OWASP, ISO27001, NIST).
    #[arg(long = "standard", value_name = "STANDARD")]
    pub standard: Option<String>,

    /// Only controls with exactly this category label.
    #[arg(long = "category", value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Print matching records as a JSON array instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Parser)]
pub struct SourceArgs {
    /// Record set to read.
    #[arg(long = "source", value_name = "PATH")]
    pub source: Option<PathBuf>,
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
