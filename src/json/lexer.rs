//! Streaming lexer
//!
//! A cursor over the full input buffer with line/column bookkeeping.
//! One token per `next_token` call; `reset` rewinds to the start.
//!
//! Lexing rules:
//! - Space, tab, and carriage return are skipped; newline advances the
//!   line counter and resets the column
//! - `{ } [ ] : ,` are single-character tokens
//! - Strings decode the escapes `\" \\ \/ \b \f \n \r \t`; any other
//!   escaped character is kept literally with the backslash dropped
//!   (so `\u` is NOT decoded). A raw newline inside a string is
//!   consumed into the text. Only an unterminated string is an error
//! - Numbers start on a digit or `-` and greedily consume digits,
//!   `.`, `-`, `+`, `e`, `E` with no grammar validation; the parser
//!   converts the text leniently
//! - Letter runs must spell `true`, `false`, or `null`; anything else
//!   is an error token naming the bad literal
//!
//! The lexer never fails: malformed input surfaces as
//! `TokenKind::Error` tokens and the parser turns those into parse
//! failures.

use std::fs;
use std::io;
use std::path::Path;

use super::token::{Token, TokenKind};

/// Character-cursor lexer over one JSON document.
///
/// Holds exclusive per-instance state (position, line, column); a
/// single instance must not be shared across concurrent operations.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    /// Creates a lexer over in-memory source text.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 0,
            col: 0,
        }
    }

    /// Creates a lexer over the contents of a file.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let source = fs::read_to_string(path)?;
        Ok(Self::new(&source))
    }

    /// Rewinds to the beginning of the source and reinitializes
    /// line/column state.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.line = 0;
        self.col = 0;
    }

    /// Returns the next token. At end of input this keeps returning
    /// `Eof` tokens.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let (line, col) = (self.line, self.col);
        let c = match self.peek() {
            Some(c) => c,
            None => return Token::new(TokenKind::Eof, "", line, col),
        };

        match c {
            '{' => self.punct(TokenKind::BraceOpen, line, col),
            '}' => self.punct(TokenKind::BraceClose, line, col),
            '[' => self.punct(TokenKind::BracketOpen, line, col),
            ']' => self.punct(TokenKind::BracketClose, line, col),
            ':' => self.punct(TokenKind::Colon, line, col),
            ',' => self.punct(TokenKind::Comma, line, col),
            '"' => self.read_string(line, col),
            c if c.is_ascii_digit() || c == '-' => self.read_number(line, col),
            c if c.is_ascii_alphabetic() => self.read_literal(line, col),
            other => {
                self.bump();
                Token::new(
                    TokenKind::Error,
                    format!("unexpected character '{}'", other),
                    line,
                    col,
                )
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Consumes one character, maintaining line/column counters.
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\r' | '\n')) {
            self.bump();
        }
    }

    fn punct(&mut self, kind: TokenKind, line: usize, col: usize) -> Token {
        let c = self.bump().unwrap_or_default();
        Token::new(kind, c.to_string(), line, col)
    }

    fn read_string(&mut self, line: usize, col: usize) -> Token {
        self.bump(); // opening quote
        let mut text = String::new();
        loop {
            match self.bump() {
                None => {
                    return Token::new(TokenKind::Error, "unterminated string", line, col);
                }
                Some('"') => return Token::new(TokenKind::String, text, line, col),
                Some('\\') => match self.bump() {
                    None => {
                        return Token::new(TokenKind::Error, "unterminated string", line, col);
                    }
                    Some('"') => text.push('"'),
                    Some('\\') => text.push('\\'),
                    Some('/') => text.push('/'),
                    Some('b') => text.push('\u{0008}'),
                    Some('f') => text.push('\u{000C}'),
                    Some('n') => text.push('\n'),
                    Some('r') => text.push('\r'),
                    Some('t') => text.push('\t'),
                    // Lenient: unknown escapes keep the escaped
                    // character and drop the backslash.
                    Some(other) => text.push(other),
                },
                Some(c) => text.push(c),
            }
        }
    }

    fn read_number(&mut self, line: usize, col: usize) -> Token {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' | '.' | '-' | '+' | 'e' | 'E' => {
                    text.push(c);
                    self.bump();
                }
                _ => break,
            }
        }
        Token::new(TokenKind::Number, text, line, col)
    }

    fn read_literal(&mut self, line: usize, col: usize) -> Token {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphabetic() {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        match text.as_str() {
            "true" => Token::new(TokenKind::True, text, line, col),
            "false" => Token::new(TokenKind::False, text, line, col),
            "null" => Token::new(TokenKind::Null, text, line, col),
            _ => Token::new(
                TokenKind::Error,
                format!("invalid literal '{}'", text),
                line,
                col,
            ),
        }
    }
}
