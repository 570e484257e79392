//! JSON parsing subsystem for jsonvet
//!
//! A hand-written lexer and recursive-descent parser producing an owned
//! [`Value`] tree. The pipeline is deliberately lenient where the input
//! is recoverable and explicit where it is not.
//!
//! # Design Principles
//!
//! - The lexer never fails: malformed input becomes [`TokenKind::Error`] tokens
//! - The parser fails fast and keeps the offending token for diagnostics
//! - Positions are zero-based line and column pairs
//! - Duplicate object keys keep the first occurrence
//! - Number text is converted with longest-prefix fallback, never rejected

mod errors;
mod lexer;
mod parser;
mod pretty;
mod token;
mod value;

pub use errors::{ParseError, ParseResult};
pub use lexer::Lexer;
pub use parser::Parser;
pub use pretty::PrettyPrinter;
pub use token::{Token, TokenKind};
pub use value::{Value, ValueKind};
