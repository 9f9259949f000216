//! Parse error types.
//!
//! Each error renders to the one-line diagnostic shown to the user. Errors
//! are collected, never thrown: the parser records one, skips to the next
//! statement boundary and carries on.

use monkey_ir::TokenKind;

/// A parser diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A specific token was required next.
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    /// No expression can start with this token.
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParse { kind: TokenKind },

    /// The token has infix precedence but no infix form.
    #[error("no infix parse function for {kind} found")]
    NoInfixParse { kind: TokenKind },

    /// An integer literal outside the `i64` range.
    #[error("could not parse {literal:?} as integer")]
    InvalidInteger { literal: String },
}

impl ParseError {
    pub(crate) fn unexpected(expected: TokenKind, found: TokenKind) -> Self {
        ParseError::UnexpectedToken { expected, found }
    }
}
