//! CLI-specific error types
//!
//! Every CLI failure maps to one code so scripts can match on the
//! first token of the stderr line.

use std::fmt;
use std::io;

use crate::json::ParseError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// I/O error (file access, stdout)
    IoError,
    /// The document could not be parsed
    ParseFailed,
    /// The document parsed but violates the schema
    ValidationFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::IoError => "JSONVET_IO_ERROR",
            Self::ParseFailed => "JSONVET_PARSE_FAILED",
            Self::ValidationFailed => "JSONVET_VALIDATION_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Parse failure
    pub fn parse_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ParseFailed, msg)
    }

    /// Validation failure
    pub fn validation_failed() -> Self {
        Self::new(
            CliErrorCode::ValidationFailed,
            "Document does not satisfy the schema",
        )
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        Self::parse_failed(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
