//! Prefix and infix operators.

use std::fmt;

use crate::TokenKind;

/// Prefix (unary) operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrefixOp {
    /// Logical not: `!x`
    Not,
    /// Integer negation: `-x`
    Neg,
}

impl PrefixOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Neg => "-",
        }
    }

    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Bang => Some(Self::Not),
            TokenKind::Minus => Some(Self::Neg),
            _ => None,
        }
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Infix (binary) operators.
///
/// Call `(` and index `[` are parsed as infix forms too, but they build
/// dedicated `Call`/`Index` nodes rather than an `InfixOp`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum InfixOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Lt,
    Gt,
    Eq,
    NotEq,
}

impl InfixOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in rendering and in runtime error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        }
    }

    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Asterisk => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            TokenKind::Lt => Some(Self::Lt),
            TokenKind::Gt => Some(Self::Gt),
            TokenKind::Eq => Some(Self::Eq),
            TokenKind::NotEq => Some(Self::NotEq),
            _ => None,
        }
    }

    /// `==` and `!=`.
    pub const fn is_equality(self) -> bool {
        matches!(self, Self::Eq | Self::NotEq)
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
