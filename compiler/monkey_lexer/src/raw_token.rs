//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! conversion to the shared `Token` type. Keywords are not matched here:
//! they lex as `Ident` and are resolved by `TokenKind::lookup_ident`.

use logos::Logos;
use monkey_ir::TokenKind;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    // === Operators ===
    #[token("==")]
    Eq,
    #[token("=")]
    Assign,
    #[token("!=")]
    NotEq,
    #[token("!")]
    Bang,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // === Delimiters ===
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // === Literals ===
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r#""[^"]*""#)]
    String,
}

impl RawToken {
    /// Token kind for a raw match; identifier-shaped words are resolved
    /// against the keyword table.
    pub(crate) fn kind(self, slice: &str) -> TokenKind {
        match self {
            Self::Eq => TokenKind::Eq,
            Self::Assign => TokenKind::Assign,
            Self::NotEq => TokenKind::NotEq,
            Self::Bang => TokenKind::Bang,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Asterisk => TokenKind::Asterisk,
            Self::Slash => TokenKind::Slash,
            Self::Lt => TokenKind::Lt,
            Self::Gt => TokenKind::Gt,
            Self::Comma => TokenKind::Comma,
            Self::Semicolon => TokenKind::Semicolon,
            Self::Colon => TokenKind::Colon,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::LBrace => TokenKind::LBrace,
            Self::RBrace => TokenKind::RBrace,
            Self::LBracket => TokenKind::LBracket,
            Self::RBracket => TokenKind::RBracket,
            Self::Ident => TokenKind::lookup_ident(slice),
            Self::Int => TokenKind::Int,
            Self::String => TokenKind::String,
        }
    }

    /// Literal text carried by the token; string literals drop their quotes.
    pub(crate) fn literal(self, slice: &str) -> &str {
        match self {
            Self::String => slice
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(slice),
            _ => slice,
        }
    }
}
