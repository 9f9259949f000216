//! Expression parsing.
//!
//! - `mod.rs`: Pratt loop (`parse_expression`) and binary operators
//! - `primary.rs`: prefix forms (literals, unary operators, `if`, `fn`, `macro`)
//! - `postfix.rs`: call and index

mod postfix;
mod primary;

use monkey_ir::{Expression, InfixOp, TokenKind, TokenSource};

use crate::{ParseError, ParseResult, Parser, Precedence};

impl<S: TokenSource> Parser<S> {
    /// Parse an expression whose operators all bind tighter than `min`.
    ///
    /// Equal precedence stops the loop, which makes every binary operator
    /// left-associative.
    pub(crate) fn parse_expression(&mut self, min: Precedence) -> ParseResult<Expression> {
        let left = self.parse_prefix()?;
        self.continue_operand(left, min)
    }

    /// Apply infix operators to an already parsed `left` while they bind
    /// tighter than `min`.
    pub(crate) fn continue_operand(
        &mut self,
        mut left: Expression,
        min: Precedence,
    ) -> ParseResult<Expression> {
        while !self.peek_is(TokenKind::Semicolon) && min < self.peek_precedence() {
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Ok(left)
    }

    /// Dispatch on the operator in `current`, with `left` already parsed.
    fn parse_infix(&mut self, left: Expression) -> ParseResult<Expression> {
        match self.current.kind {
            TokenKind::LParen => self.parse_call(left),
            TokenKind::LBracket => self.parse_index(left),
            kind => {
                let Some(operator) = InfixOp::from_token(kind) else {
                    return Err(ParseError::NoInfixParse { kind });
                };
                let precedence = self.cur_precedence();
                self.next_token();
                let right = self.parse_expression(precedence)?;
                Ok(Expression::infix(operator, left, right))
            }
        }
    }

    /// Comma-separated expressions up to `end`, entered with `current` on
    /// the opening delimiter. Leaves `current` on `end`.
    pub(crate) fn parse_expression_list(&mut self, end: TokenKind) -> ParseResult<Vec<Expression>> {
        let mut items = Vec::new();
        if self.peek_is(end) {
            self.next_token();
            return Ok(items);
        }

        self.next_token();
        items.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;
        Ok(items)
    }
}
