//! Parse-time error types
//!
//! Parsing is all-or-nothing: the first wrong token, error token, or
//! premature end of input aborts the whole operation. There is no
//! recovery or resynchronization; the parser additionally retains the
//! offending token for later inspection.

use thiserror::Error;

use super::token::{Token, TokenKind};

/// Result type for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that abort a parse wholesale.
///
/// `line` and `col` are 0-based, matching token positions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A well-formed token appeared where a different kind was
    /// required.
    #[error("expected {expected}, found {found} at line {line}, col {col}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        line: usize,
        col: usize,
    },

    /// The lexer produced an error token.
    #[error("{message} at line {line}, col {col}")]
    Lexical {
        message: String,
        line: usize,
        col: usize,
    },

    /// Input ended before the document was complete.
    #[error("unexpected end of input at line {line}, col {col}")]
    UnexpectedEof { line: usize, col: usize },
}

impl ParseError {
    /// Classifies a token that failed an expectation.
    pub(crate) fn from_token(expected: &'static str, token: &Token) -> Self {
        match token.kind {
            TokenKind::Error => ParseError::Lexical {
                message: token.text.clone(),
                line: token.line,
                col: token.col,
            },
            TokenKind::Eof => ParseError::UnexpectedEof {
                line: token.line,
                col: token.col,
            },
            _ => ParseError::UnexpectedToken {
                expected,
                found: token.describe(),
                line: token.line,
                col: token.col,
            },
        }
    }

    /// Source line of the failure (0-based).
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { line, .. }
            | ParseError::Lexical { line, .. }
            | ParseError::UnexpectedEof { line, .. } => *line,
        }
    }

    /// Source column of the failure (0-based).
    pub fn col(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { col, .. }
            | ParseError::Lexical { col, .. }
            | ParseError::UnexpectedEof { col, .. } => *col,
        }
    }
}
