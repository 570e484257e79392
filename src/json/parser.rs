//! Recursive-descent JSON parser
//!
//! Grammar (standard JSON):
//! - `value  := object | array | string | number | true | false | null`
//! - `object := '{' (string ':' value (',' string ':' value)*)? '}'`
//! - `array  := '[' (value (',' value)*)? ']'`
//!
//! One document per source: after the root value the parser requires
//! end of input. Parsing is single-attempt and deterministic; any
//! mismatch aborts the whole operation with no partial tree retained.
//! Recursion depth equals document nesting depth, so pathologically
//! deep documents can exhaust the call stack.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use super::errors::{ParseError, ParseResult};
use super::lexer::Lexer;
use super::token::{Token, TokenKind};
use super::value::Value;

/// Recursive-descent consumer of lexer tokens.
///
/// Owns its lexer and, after a successful `parse`, the resulting
/// value tree until the caller takes it via `release`. Holds
/// exclusive per-instance state; not for concurrent use.
pub struct Parser {
    lexer: Lexer,
    tree: Option<Value>,
    last_error: Option<Token>,
}

impl Parser {
    /// Creates a parser over the given lexer.
    pub fn new(lexer: Lexer) -> Self {
        Self {
            lexer,
            tree: None,
            last_error: None,
        }
    }

    /// Creates a parser reading from a file.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(Lexer::open(path)?))
    }

    /// Parses one JSON document.
    ///
    /// Any previously held tree and diagnostic are discarded first and
    /// the lexer restarts from the beginning of its source, so
    /// repeated calls are independent attempts. On failure no partial
    /// tree survives and the offending token is retained (see
    /// [`Parser::last_error`]).
    pub fn parse(&mut self) -> ParseResult<()> {
        self.tree = None;
        self.last_error = None;
        self.lexer.reset();

        let first = self.lexer.next_token();
        let root = self.parse_value(first)?;

        let end = self.lexer.next_token();
        if end.kind != TokenKind::Eof {
            return Err(self.fail("end of input", end));
        }

        self.tree = Some(root);
        Ok(())
    }

    /// Returns whether the parser currently holds a parsed tree.
    pub fn is_parsed(&self) -> bool {
        self.tree.is_some()
    }

    /// Borrows the parsed tree, if any.
    pub fn tree(&self) -> Option<&Value> {
        self.tree.as_ref()
    }

    /// Transfers the parsed tree to the caller and resets the parser
    /// to the unparsed state. Yields `None` when called twice or
    /// before a successful parse.
    pub fn release(&mut self) -> Option<Value> {
        self.tree.take()
    }

    /// The offending token of the most recent failed parse, if any.
    /// Overwritten by each new parse attempt.
    pub fn last_error(&self) -> Option<&Token> {
        self.last_error.as_ref()
    }

    /// Swaps in a new lexer, discarding the held tree and diagnostic.
    pub fn replace_lexer(&mut self, lexer: Lexer) {
        self.lexer = lexer;
        self.tree = None;
        self.last_error = None;
    }

    /// Discards the held tree and diagnostic and rewinds the lexer.
    pub fn reset(&mut self) {
        self.lexer.reset();
        self.tree = None;
        self.last_error = None;
    }

    /// Records the offending token and produces the matching error.
    fn fail(&mut self, expected: &'static str, token: Token) -> ParseError {
        let err = ParseError::from_token(expected, &token);
        self.last_error = Some(token);
        err
    }

    fn parse_value(&mut self, token: Token) -> ParseResult<Value> {
        match token.kind {
            TokenKind::BraceOpen => self.parse_object(),
            TokenKind::BracketOpen => self.parse_array(),
            TokenKind::String => Ok(Value::String(token.text)),
            TokenKind::Number => Ok(Value::Number(lenient_number(&token.text))),
            TokenKind::True => Ok(Value::Bool(true)),
            TokenKind::False => Ok(Value::Bool(false)),
            TokenKind::Null => Ok(Value::Null),
            _ => Err(self.fail("a value", token)),
        }
    }

    /// Parses the members of an object; the opening brace is already
    /// consumed.
    fn parse_object(&mut self) -> ParseResult<Value> {
        let mut members = BTreeMap::new();

        let mut token = self.lexer.next_token();
        if token.kind == TokenKind::BraceClose {
            return Ok(Value::Object(members));
        }

        loop {
            if token.kind != TokenKind::String {
                return Err(self.fail("a member name", token));
            }
            let key = token.text;

            let colon = self.lexer.next_token();
            if colon.kind != TokenKind::Colon {
                return Err(self.fail("':'", colon));
            }

            let value_token = self.lexer.next_token();
            let value = self.parse_value(value_token)?;
            // Duplicate keys: first occurrence wins.
            members.entry(key).or_insert(value);

            let sep = self.lexer.next_token();
            match sep.kind {
                TokenKind::Comma => token = self.lexer.next_token(),
                TokenKind::BraceClose => return Ok(Value::Object(members)),
                _ => return Err(self.fail("',' or '}'", sep)),
            }
        }
    }

    /// Parses the elements of an array; the opening bracket is already
    /// consumed.
    fn parse_array(&mut self) -> ParseResult<Value> {
        let mut elements = Vec::new();

        let mut token = self.lexer.next_token();
        if token.kind == TokenKind::BracketClose {
            return Ok(Value::Array(elements));
        }

        loop {
            let element = self.parse_value(token)?;
            elements.push(element);

            let sep = self.lexer.next_token();
            match sep.kind {
                TokenKind::Comma => token = self.lexer.next_token(),
                TokenKind::BracketClose => return Ok(Value::Array(elements)),
                _ => return Err(self.fail("',' or ']'", sep)),
            }
        }
    }
}

/// Best-effort text-to-number conversion, in the spirit of `strtod`:
/// the full text if it parses, otherwise the longest prefix that
/// does, otherwise zero. Never fails.
fn lenient_number(text: &str) -> f64 {
    if let Ok(value) = text.parse::<f64>() {
        return value;
    }
    // Number tokens are ASCII, so byte slicing is safe here.
    for end in (1..text.len()).rev() {
        if let Ok(value) = text[..end].parse::<f64>() {
            return value;
        }
    }
    0.0
}
