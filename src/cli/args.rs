//! Command-line argument definitions for the agronomic CSV translator

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the agronomic CSV translator
///
/// Translates multi-section agronomic trial CSV files (or ZIP bundles of
/// them) into normalized experiment, weather and soil records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "agcsv-translator",
    version,
    about = "Translate agronomic trial CSV dialects into normalized domain records"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Translate one or more input files into the domain record model
    Translate(TranslateArgs),
}

/// Arguments for the translate command
#[derive(Debug, Clone, Parser)]
pub struct TranslateArgs {
    /// Input files: delimited text files or ZIP bundles of them
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output file for the translated records; stdout if not specified
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// JSON document with experiments, weathers and soils collections
    Json,
    /// Summary counts only
    Summary,
}

impl TranslateArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
