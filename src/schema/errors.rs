//! Validation error records
//!
//! Semantic violations are recorded, not thrown: every failed check
//! pushes one [`ValidationError`] into the run's context, and a whole
//! run is summarized as a [`ValidationReport`]. Both serialize for
//! machine-readable report output.

use std::fmt;

use serde::Serialize;

use crate::json::ValueKind;

use super::types::SchemaKind;

/// One recorded constraint violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Location inside the instance, e.g. `.webserver.supported_protocols[2]`.
    /// The root is the empty string.
    pub path: String,
    /// Human-readable description of the violation
    pub message: String,
    /// Kind the schema expected at this location
    pub expected: SchemaKind,
    /// Kind the instance actually held
    pub actual: ValueKind,
}

impl ValidationError {
    pub fn new(
        path: impl Into<String>,
        message: impl Into<String>,
        expected: SchemaKind,
        actual: ValueKind,
    ) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            expected,
            actual,
        }
    }

    /// Error for a value of the wrong kind.
    pub fn kind_mismatch(path: impl Into<String>, expected: SchemaKind, actual: ValueKind) -> Self {
        let message = format!("Expected {}, found {}", expected.name(), actual.name());
        Self::new(path, message, expected, actual)
    }

    /// Error for a required object member that is not present. The
    /// actual kind is a null sentinel, since the member has no value.
    pub fn missing_required(path: impl Into<String>, name: &str, expected: SchemaKind) -> Self {
        Self::new(
            path,
            format!("Missing required property '{}'", name),
            expected,
            ValueKind::Null,
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Outcome of one validation run.
///
/// `valid` reflects the run's boolean result and is authoritative even
/// when an error cap suppressed some of the records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// True when the run recorded no failures
    pub valid: bool,
    /// Violations in recording order
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new(valid: bool, errors: Vec<ValidationError>) -> Self {
        Self { valid, errors }
    }
}
