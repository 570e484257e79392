//! CLI module for jsonvet
//!
//! Provides the command-line interface:
//! - check: parse a document and validate it against the built-in schema
//! - print: parse a document and pretty-print its tree
//! - tokens: dump the raw token stream

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, ReportFormat};
pub use commands::{check, print, run, run_command, tokens};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_line, write_report_json, write_report_plain};
