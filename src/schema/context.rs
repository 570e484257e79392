//! Per-run validation state
//!
//! A [`ValidatorContext`] carries the mutable state of one validation
//! pass: the path of the node currently being checked and the errors
//! recorded so far. A context belongs to exactly one run and is
//! discarded afterwards, never persisted or shared.

use super::errors::ValidationError;

/// Path stack plus ordered error accumulator for one validation pass.
#[derive(Debug, Default)]
pub struct ValidatorContext {
    paths: Vec<String>,
    errors: Vec<ValidationError>,
    max_errors: Option<usize>,
}

impl ValidatorContext {
    /// Creates a context with unlimited error recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context that stops recording once `max_errors` errors
    /// are held. Validation still walks the whole tree and the boolean
    /// outcome is unaffected; only the recorded list is capped.
    pub fn with_max_errors(max_errors: usize) -> Self {
        Self {
            max_errors: Some(max_errors),
            ..Self::default()
        }
    }

    /// Pushes one path segment. Empty segments are ignored.
    pub fn push_path(&mut self, segment: impl Into<String>) {
        let segment = segment.into();
        if segment.is_empty() {
            return;
        }
        self.paths.push(segment);
    }

    /// Pops the innermost path segment. Popping an empty stack is a no-op.
    pub fn pop_path(&mut self) {
        if self.paths.is_empty() {
            return;
        }
        self.paths.pop();
    }

    /// Renders the current location by concatenating all segments.
    /// The root renders as the empty string.
    pub fn current_path(&self) -> String {
        self.paths.concat()
    }

    /// Records one error, unless the cap is already reached.
    pub fn push_error(&mut self, error: ValidationError) {
        if let Some(max) = self.max_errors {
            if self.errors.len() >= max {
                return;
            }
        }
        self.errors.push(error);
    }

    /// Returns the errors recorded so far, in recording order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes the context, yielding the recorded errors.
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}
