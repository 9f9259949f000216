//! Prefix forms: everything an expression can start with.

use std::rc::Rc;

use monkey_ir::{
    BlockStatement, Expression, FunctionLiteral, Identifier, MacroLiteral, PrefixOp, TokenKind,
    TokenSource,
};

use crate::{ParseError, ParseResult, Parser, Precedence};

impl<S: TokenSource> Parser<S> {
    /// Dispatch on the token in `current`.
    pub(super) fn parse_prefix(&mut self) -> ParseResult<Expression> {
        match self.current.kind {
            TokenKind::Ident => Ok(Expression::ident(self.current.literal.as_str())),
            TokenKind::Int => self.parse_integer(),
            TokenKind::String => Ok(Expression::String(self.current.literal.clone())),
            TokenKind::True => Ok(Expression::Boolean(true)),
            TokenKind::False => Ok(Expression::Boolean(false)),
            TokenKind::Bang | TokenKind::Minus => self.parse_unary(),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::If => self.parse_if(),
            TokenKind::Function => {
                let (params, body) = self.parse_callable()?;
                Ok(Expression::Function(FunctionLiteral { params, body }))
            }
            TokenKind::Macro => {
                let (params, body) = self.parse_callable()?;
                Ok(Expression::Macro(MacroLiteral { params, body }))
            }
            TokenKind::LBracket => {
                let elements = self.parse_expression_list(TokenKind::RBracket)?;
                Ok(Expression::Array(elements))
            }
            TokenKind::LBrace => self.parse_hash(),
            kind => Err(ParseError::NoPrefixParse { kind }),
        }
    }

    fn parse_integer(&mut self) -> ParseResult<Expression> {
        let literal = &self.current.literal;
        literal
            .parse::<i64>()
            .map(Expression::Integer)
            .map_err(|_| ParseError::InvalidInteger {
                literal: literal.clone(),
            })
    }

    /// `!x` / `-x`. The operand binds at prefix strength, tighter than any
    /// binary operator.
    ///
    /// `-` directly followed by an integer literal folds into a negative
    /// literal, so `-1 * 2` is `(-1 * 2)` and `-9223372036854775808` is
    /// representable.
    fn parse_unary(&mut self) -> ParseResult<Expression> {
        let Some(operator) = PrefixOp::from_token(self.current.kind) else {
            return Err(ParseError::NoPrefixParse {
                kind: self.current.kind,
            });
        };
        self.next_token();

        if operator == PrefixOp::Neg && self.cur_is(TokenKind::Int) {
            let negated = format!("-{}", self.current.literal);
            if let Ok(value) = negated.parse::<i64>() {
                let literal = Expression::Integer(value);
                return self.continue_operand(literal, Precedence::Prefix);
            }
        }

        let operand = self.parse_expression(Precedence::Prefix)?;
        Ok(Expression::prefix(operator, operand))
    }

    fn parse_grouped(&mut self) -> ParseResult<Expression> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Ok(expr)
    }

    /// `if <cond> { ... } [else { ... }]`
    ///
    /// The condition is an ordinary expression, so the conventional
    /// `if (cond)` form is just a grouped condition.
    fn parse_if(&mut self) -> ParseResult<Expression> {
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /// Parameter list and body shared by `fn` and `macro`.
    fn parse_callable(&mut self) -> ParseResult<(Vec<Identifier>, Rc<BlockStatement>)> {
        self.expect_peek(TokenKind::LParen)?;
        let params = self.parse_params()?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block()?;
        Ok((params, Rc::new(body)))
    }

    /// `(a, b, c)`, entered with `current` on `(`.
    fn parse_params(&mut self) -> ParseResult<Vec<Identifier>> {
        let mut params = Vec::new();
        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Ok(params);
        }

        self.expect_peek(TokenKind::Ident)?;
        params.push(Identifier::new(self.current.literal.as_str()));
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            params.push(Identifier::new(self.current.literal.as_str()));
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(params)
    }

    /// `{k: v, ...}`, entered with `current` on `{`.
    fn parse_hash(&mut self) -> ParseResult<Expression> {
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(TokenKind::Colon)?;
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }

        self.expect_peek(TokenKind::RBrace)?;
        Ok(Expression::Hash(pairs))
    }
}
