//! Report output for the CLI
//!
//! Command output goes to stdout; failure diagnostics are propagated as
//! `CliError` and printed to stderr by main. The validation report has
//! two renderings: plain (one line per error) and JSON (the serialized
//! report).

use std::io::{self, Write};

use crate::schema::ValidationReport;

use super::errors::CliResult;

/// Write one line to stdout
pub fn write_line(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", text)?;
    stdout.flush()?;

    Ok(())
}

/// Write the human-readable report to stdout
pub fn write_report_plain(report: &ValidationReport) -> CliResult<()> {
    let mut stdout = io::stdout();
    if report.valid {
        writeln!(stdout, "valid")?;
    } else {
        for error in &report.errors {
            writeln!(stdout, "{}", error)?;
        }
    }
    stdout.flush()?;

    Ok(())
}

/// Write the serialized report to stdout
pub fn write_report_json(report: &ValidationReport) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, report)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
