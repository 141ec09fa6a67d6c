//! CLI argument definitions for the model price synthesizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pareto",
    version,
    about = "Join model leaderboards with price catalogs",
    long_about = "Join a model leaderboard with provider price catalogs.\n\n\
                  Names are resolved by exact, normalized and fuzzy matching; \
                  unmatched models receive a rule-based price estimate."
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
    /// Resolve every ranked model to a price and write the merged data.
    Synthesize(SynthesizeArgs),

    /// Print the normalized comparison form of model names.
    Normalize(NormalizeArgs),

    /// List the provider families used for fallback price estimates.
    Families,
}

#[derive(Parser)]
pub struct SynthesizeArgs {
    /// Leaderboard file (.json or .csv).
    #[arg(long = "ranks", value_name = "FILE")]
    pub ranks: PathBuf,

    /// Price catalog file (.json).
    #[arg(long = "prices", value_name = "FILE")]
    pub prices: PathBuf,

    /// Output directory for generated files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Format of the resolved model list.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: OutputFormatArg,

    /// TOML file with [synthesis] and [matching] tables.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Minimum leaderboard score for a model to be included.
    #[arg(long = "min-score", value_name = "N")]
    pub min_score: Option<i64>,

    /// Keep models whose price is zero.
    #[arg(long = "include-free")]
    pub include_free: bool,

    /// Drop models priced only by the fallback estimator.
    #[arg(long = "exclude-default-estimates")]
    pub exclude_default_estimates: bool,

    /// Fuzzy scores must be strictly above this to match.
    #[arg(long = "fuzzy-threshold", value_name = "F")]
    pub fuzzy_threshold: Option<f64>,

    /// Score bonus for a shared model family.
    #[arg(long = "family-bonus", value_name = "F")]
    pub family_bonus: Option<f64>,

    /// Additional bonus when the family version numbers agree.
    #[arg(long = "version-bonus", value_name = "F")]
    pub version_bonus: Option<f64>,

    /// Resolve and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Model names to normalize.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    Js,
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
