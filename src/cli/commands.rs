//! CLI command implementations
//!
//! All commands are one-shot: read the file, run the pipeline, write
//! the result to stdout, and surface failures through `CliResult` so
//! main can exit non-zero.
//!
//! `check` validates against a built-in example schema describing a
//! webserver configuration document; there is no schema interchange
//! format.

use std::path::Path;

use crate::json::{Lexer, Parser, PrettyPrinter, Value};
use crate::schema::{
    ArraySchema, NumberSchema, ObjectSchema, SchemaArena, SchemaHandle, SchemaValidator,
    StringSchema, ValidationReport, ValidatorContext,
};

use super::args::{Cli, Command, ReportFormat};
use super::errors::{CliError, CliResult};
use super::io::{write_line, write_report_json, write_report_plain};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Check {
            file,
            format,
            max_errors,
        } => check(&file, format, max_errors),
        Command::Print { file, color } => print(&file, color),
        Command::Tokens { file } => tokens(&file),
    }
}

/// Parse a document and validate it against the built-in schema.
///
/// The report goes to stdout in the requested format. Returns an error
/// when parsing fails or the document violates the schema, so the
/// process exits non-zero in both cases.
pub fn check(file: &Path, format: ReportFormat, max_errors: Option<usize>) -> CliResult<()> {
    let value = parse_file(file)?;

    let mut arena = SchemaArena::new();
    let root = example_schema(&mut arena);
    let validator = SchemaValidator::new(&arena);

    let mut ctx = match max_errors {
        Some(max) => ValidatorContext::with_max_errors(max),
        None => ValidatorContext::new(),
    };
    let valid = validator.validate_with(root, &value, &mut ctx);
    let report = ValidationReport::new(valid, ctx.into_errors());

    match format {
        ReportFormat::Plain => write_report_plain(&report)?,
        ReportFormat::Json => write_report_json(&report)?,
    }

    if !report.valid {
        return Err(CliError::validation_failed());
    }

    Ok(())
}

/// Parse a document and pretty-print its tree to stdout.
pub fn print(file: &Path, color: bool) -> CliResult<()> {
    let value = parse_file(file)?;
    let rendered = PrettyPrinter::new().colored(color).render(&value);
    write_line(&rendered)
}

/// Dump the raw token stream, one token per line.
///
/// Malformed input shows up as error tokens in the dump; this command
/// never fails on document content, only on I/O.
pub fn tokens(file: &Path) -> CliResult<()> {
    let mut lexer = Lexer::open(file)
        .map_err(|e| CliError::io_error(format!("Failed to read {}: {}", file.display(), e)))?;

    loop {
        let token = lexer.next_token();
        write_line(&token.to_string())?;
        if token.is_eof() {
            break;
        }
    }

    Ok(())
}

/// Parse one JSON document from a file.
fn parse_file(file: &Path) -> CliResult<Value> {
    let mut parser = Parser::open(file)
        .map_err(|e| CliError::io_error(format!("Failed to read {}: {}", file.display(), e)))?;
    parser.parse()?;
    parser
        .release()
        .ok_or_else(|| CliError::parse_failed("Parser produced no tree"))
}

/// Builds the example schema for a webserver configuration document.
///
/// The document is an object with two optional members:
/// - `webserver`: requires `host` (string, min 1 char) and `port`
///   (number, 1024 to 65535); optionally `enable_https` (bool),
///   `supported_protocols` (unique non-empty array of strings), and
///   `timeout` (non-negative number)
/// - `array`: a unique tuple of [string(5..50), number(0..60), bool, null]
fn example_schema(arena: &mut SchemaArena) -> SchemaHandle {
    let host = arena.insert(StringSchema::new().min(1));
    let port = arena.insert(NumberSchema::new().min(1024.0).max(65535.0));
    let https = arena.bool();
    let protocol = arena.insert(StringSchema::new());
    let protocols = arena.insert(ArraySchema::new().item(protocol).unique(true).min(1));
    let timeout = arena.insert(NumberSchema::new().min(0.0));

    let webserver = arena.insert(
        ObjectSchema::new()
            .property("host", host)
            .property("port", port)
            .property("enable_https", https)
            .property("supported_protocols", protocols)
            .property("timeout", timeout)
            .required("host")
            .required("port"),
    );

    let first = arena.insert(StringSchema::new().max(50).min(5));
    let second = arena.insert(NumberSchema::new().max(60.0).min(0.0));
    let third = arena.bool();
    let fourth = arena.null();
    let tuple = arena.insert(
        ArraySchema::new()
            .tuple(vec![first, second, third, fourth])
            .unique(true),
    );

    arena.insert(
        ObjectSchema::new()
            .property("array", tuple)
            .property("webserver", webserver),
    )
}
