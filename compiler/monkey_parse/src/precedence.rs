//! Operator precedence table.

use monkey_ir::TokenKind;

/// Binding power of an infix position, lowest first.
///
/// Prefix operators parse their operand at `Prefix`, so `-a * b` is
/// `((-a) * b)`. Call and index bind tightest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// `-x` `!x`
    Prefix,
    /// `f(x)`
    Call,
    /// `a[i]`
    Index,
}

impl Precedence {
    /// Infix precedence of a token; `Lowest` if it cannot continue an expression.
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen => Self::Call,
            TokenKind::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}
