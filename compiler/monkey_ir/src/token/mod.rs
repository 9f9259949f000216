//! Token types and the token source contract.

use std::fmt;

/// Token kinds for Monkey.
///
/// `Display` yields the canonical kind name used in parser diagnostics
/// (`IDENT`, `=`, `LET`, ...).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Illegal,
    Eof,

    // === Identifiers and literals ===
    Ident,
    Int,
    String,

    // === Operators ===
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    Lt,
    Gt,
    Eq,
    NotEq,

    // === Delimiters ===
    Comma,
    Semicolon,
    Colon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // === Keywords ===
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
    Macro,
}

impl TokenKind {
    /// Canonical name of this kind, as printed in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::String => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Macro => "MACRO",
        }
    }

    /// Map an identifier-shaped word to its keyword kind, or `Ident`.
    pub fn lookup_ident(word: &str) -> TokenKind {
        match word {
            "fn" => Self::Function,
            "let" => Self::Let,
            "true" => Self::True,
            "false" => Self::False,
            "if" => Self::If,
            "else" => Self::Else,
            "return" => Self::Return,
            "macro" => Self::Macro,
            _ => Self::Ident,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token: its kind plus the literal source text.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input sentinel.
    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "")
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Pull interface the parser reads tokens from.
///
/// Once input is exhausted an implementation must return an `Eof` token,
/// and keep returning it on every further call.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

impl<T: TokenSource + ?Sized> TokenSource for Box<T> {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

/// A token source over an already materialized token list.
///
/// Trailing `Eof` tokens in the list are optional; the stream yields `Eof`
/// forever once the list runs out.
#[derive(Clone, Debug)]
pub struct TokenStream {
    tokens: std::vec::IntoIter<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream {
            tokens: tokens.into_iter(),
        }
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenStream::new(iter.into_iter().collect())
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        self.tokens.next().unwrap_or_else(Token::eof)
    }
}
