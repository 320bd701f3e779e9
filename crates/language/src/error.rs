/// Diagnostics produced by the lexer and the parser.
/// The two channels stay separate: lexical errors never abort tokenizing,
/// syntax errors always abort the parse.

use crate::token::TokenKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Lexer Error : Unknown character {ch} at position {position}")]
    UnknownCharacter { ch: char, position: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected}, got {found} at position {position}")]
    UnexpectedKind {
        expected: TokenKind,
        found: TokenKind,
        position: usize,
    },
    #[error("expected '{expected}', got '{found}' at position {position}")]
    UnexpectedValue {
        expected: &'static str,
        found: String,
        position: usize,
    },
    #[error("expected '{{' after if condition")]
    MissingBody,
    #[error("syntax error: cannot use assignment '=' in if condition, did you mean '=='?")]
    AssignmentInCondition,
    #[error("invalid operator '{0}' in condition")]
    InvalidOperator(String),
    #[error("unexpected token: {kind} ({value})")]
    UnexpectedPrimary { kind: TokenKind, value: String },
    #[error("syntax error: '{name} {operator}' - comparison cannot be used as a statement (did you mean '{name} = ...'?)")]
    ComparisonAsStatement { name: String, operator: String },
    #[error("expected '=' in assignment")]
    MissingAssign,
    #[error("expected ';' after expression")]
    MissingSemicolonAfterExpression,
    #[error("expected ';' after assignment '{name} = ...'")]
    MissingSemicolonAfterAssignment { name: String },
}
