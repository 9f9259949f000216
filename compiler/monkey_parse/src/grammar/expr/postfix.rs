//! Call and index expressions.

use monkey_ir::{Expression, TokenKind, TokenSource};

use crate::{ParseResult, Parser, Precedence};

impl<S: TokenSource> Parser<S> {
    /// `<callee>(<args>)`, entered with `current` on `(`.
    pub(super) fn parse_call(&mut self, callee: Expression) -> ParseResult<Expression> {
        let args = self.parse_expression_list(TokenKind::RParen)?;
        Ok(Expression::call(callee, args))
    }

    /// `<collection>[<index>]`, entered with `current` on `[`.
    pub(super) fn parse_index(&mut self, collection: Expression) -> ParseResult<Expression> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;
        Ok(Expression::index(collection, index))
    }
}
