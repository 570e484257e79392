//! CLI argument definitions using clap
//!
//! Commands:
//! - jsonvet check <file> [--format plain|json] [--max-errors N]
//! - jsonvet print <file> [--color]
//! - jsonvet tokens <file>

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// jsonvet - a lenient JSON parser paired with a strict schema validator
#[derive(Parser, Debug)]
#[command(name = "jsonvet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Report rendering for the check command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// One `path: message` line per error
    Plain,
    /// The serialized validation report
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a JSON document and validate it against the built-in schema
    Check {
        /// Path to the JSON document
        file: PathBuf,

        /// Report output format
        #[arg(long, value_enum, default_value = "plain")]
        format: ReportFormat,

        /// Record at most this many validation errors
        #[arg(long)]
        max_errors: Option<usize>,
    },

    /// Parse a JSON document and pretty-print its tree
    Print {
        /// Path to the JSON document
        file: PathBuf,

        /// Colorize the output
        #[arg(long)]
        color: bool,
    },

    /// Dump the raw token stream, one token per line
    Tokens {
        /// Path to the JSON document
        file: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
