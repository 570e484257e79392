//! Lexical tokens
//!
//! The lexer emits exactly one `Token` per call. Malformed input is
//! represented as `TokenKind::Error` tokens whose `text` carries the
//! diagnostic message; the lexer itself never fails.

use std::fmt;

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// A quoted string; `text` holds the decoded contents.
    String,
    /// A number; `text` holds the raw character run, converted later
    /// by the parser.
    Number,
    /// The literal `true`.
    True,
    /// The literal `false`.
    False,
    /// The literal `null`.
    Null,
    /// Malformed input; `text` holds the diagnostic message.
    Error,
    /// End of input. Emitted repeatedly once the source is exhausted.
    Eof,
}

impl TokenKind {
    /// Returns a short human-readable name, used in diagnostics
    /// ("expected ':', found 'true'").
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::BraceOpen => "'{'",
            TokenKind::BraceClose => "'}'",
            TokenKind::BracketOpen => "'['",
            TokenKind::BracketClose => "']'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Null => "'null'",
            TokenKind::Error => "error",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One lexical unit with its source position.
///
/// `line` and `col` are 0-based and locate the token's first
/// character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub col: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            col,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Describes the token without its position, for "expected X,
    /// found Y" diagnostics.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::String => format!("string \"{}\"", self.text),
            TokenKind::Number => format!("number '{}'", self.text),
            TokenKind::Error => format!("invalid input ({})", self.text),
            _ => self.kind.name().to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, col {}",
            self.describe(),
            self.line,
            self.col
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_for_punctuation() {
        assert_eq!(TokenKind::BraceOpen.name(), "'{'");
        assert_eq!(TokenKind::Comma.name(), "','");
        assert_eq!(TokenKind::Eof.name(), "end of input");
    }

    #[test]
    fn test_describe_includes_text() {
        let t = Token::new(TokenKind::String, "host", 0, 4);
        assert_eq!(t.describe(), "string \"host\"");

        let t = Token::new(TokenKind::Number, "12e", 1, 0);
        assert_eq!(t.describe(), "number '12e'");

        let t = Token::new(TokenKind::True, "true", 0, 0);
        assert_eq!(t.describe(), "'true'");
    }

    #[test]
    fn test_display_carries_position() {
        let t = Token::new(TokenKind::Colon, ":", 3, 7);
        assert_eq!(t.to_string(), "':' at line 3, col 7");
    }
}
