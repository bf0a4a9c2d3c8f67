//! CLI argument parsing for speech-comparator

use crate::score::InputMode;
use crate::thornton::SearchStrategy;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "speech-comparator")]
#[command(version)]
#[command(
    about = "Critical differences and normative limits for speech-recognition scores",
    long_about = None
)]
pub struct Cli {
    /// Load analysis defaults from a TOML file
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Enable debug tracing on stderr
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Test whether two scores differ significantly (Thornton & Raffin)
    Thornton(ThorntonArgs),

    /// Test whether a PB-max score is below normal limits (Dubno et al.)
    Dubno(DubnoArgs),

    /// Print the critical-difference table for a list size
    Table(TableArgs),

    /// Re-derive score inputs when switching between percent and count
    Convert(ConvertArgs),
}

/// Shared Thornton model options
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Word-list size, at most 10000 (non-numeric or non-positive values fall back to 50)
    #[arg(short = 'n', long = "list-size", value_name = "N")]
    pub list_size: Option<String>,

    /// Confidence level in percent (80, 90 or 95)
    #[arg(short = 'c', long = "confidence", value_name = "PERCENT")]
    pub confidence: Option<u32>,

    /// Boundary search strategy
    #[arg(long = "search", value_enum)]
    pub search: Option<SearchStrategy>,
}

#[derive(Args, Debug, Clone)]
pub struct ThorntonArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Baseline score (percent or word count, see --mode)
    #[arg(long = "score1", value_name = "SCORE", allow_hyphen_values = true)]
    pub score1: String,

    /// Comparison score (percent or word count, see --mode)
    #[arg(long = "score2", value_name = "SCORE", allow_hyphen_values = true)]
    pub score2: String,

    /// How scores are entered
    #[arg(short = 'm', long = "mode", value_enum)]
    pub mode: Option<InputMode>,
}

#[derive(Args, Debug, Clone)]
pub struct DubnoArgs {
    /// Threshold at 500 Hz (dB HL)
    #[arg(long = "pta500", value_name = "DB", allow_hyphen_values = true)]
    pub pta500: String,

    /// Threshold at 1000 Hz (dB HL)
    #[arg(long = "pta1000", value_name = "DB", allow_hyphen_values = true)]
    pub pta1000: String,

    /// Threshold at 2000 Hz (dB HL)
    #[arg(long = "pta2000", value_name = "DB", allow_hyphen_values = true)]
    pub pta2000: String,

    /// Measured PB-max score in percent
    #[arg(long = "pb-max", value_name = "PERCENT", allow_hyphen_values = true)]
    pub pb_max: String,

    /// Word-list size of the normative table (25 or 50)
    #[arg(short = 'n', long = "list-size", value_name = "N")]
    pub list_size: Option<u32>,
}

#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    #[command(flatten)]
    pub model: ModelArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Word-list size, at most 10000 (non-numeric or non-positive values fall back to 50)
    #[arg(short = 'n', long = "list-size", value_name = "N")]
    pub list_size: Option<String>,

    /// Mode to convert into; values are read in the other mode
    #[arg(long = "to", value_enum)]
    pub to: InputMode,

    /// Values to convert
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}
