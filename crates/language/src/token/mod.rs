use serde::Serialize;
use std::fmt;

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Constant,
    Operator,
    SpecialSymbol,
    /// End-of-stream sentinel. Never produced by the lexer, only returned
    /// when the parser looks past the last token.
    Eof,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Constant => "CONSTANT",
            TokenKind::Operator => "OPERATOR",
            TokenKind::SpecialSymbol => "SPECIAL_SYMBOL",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// Byte offset of the first character in the source.
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, offset: usize) -> Self {
        Token { kind, value: value.into(), offset }
    }

    pub fn eof(offset: usize) -> Self {
        Token { kind: TokenKind::Eof, value: String::new(), offset }
    }

    pub fn is(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && self.value == value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, '{}')", self.kind, self.value)
    }
}
