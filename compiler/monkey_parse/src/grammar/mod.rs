//! Grammar Modules
//!
//! Each module extends `Parser` with methods for one group of productions:
//!
//! - `mod.rs`: statements and blocks
//! - [`expr`]: the Pratt loop, prefix forms, calls and indexing
//!
//! All productions follow the same token discipline: a production starts
//! with `current` on its first token and returns with `current` on its last
//! token. The caller advances past it.

mod expr;

use monkey_ir::{BlockStatement, Identifier, Statement, TokenKind, TokenSource};

use crate::{ParseError, ParseResult, Parser, Precedence};

impl<S: TokenSource> Parser<S> {
    /// Parse one statement, dispatching on its leading keyword.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expr> [;]`
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.current.literal.as_str());
        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Ok(Statement::Let { name, value })
    }

    /// `return <expr> [;]`
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Ok(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Ok(Statement::Expression(expr))
    }

    fn skip_optional_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    /// `{ <stmt>* }`, entered with `current` on `{`.
    ///
    /// Errors inside the block are recorded and the offending statement is
    /// dropped, like at the top level. Running out of input before the
    /// closing brace fails the whole block.
    pub(crate) fn parse_block(&mut self) -> ParseResult<BlockStatement> {
        let mut statements = Vec::new();
        self.next_token();

        while !self.cur_is(TokenKind::RBrace) {
            if self.cur_is(TokenKind::Eof) {
                return Err(ParseError::unexpected(TokenKind::RBrace, TokenKind::Eof));
            }
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize();
                    if self.cur_is(TokenKind::RBrace) {
                        break;
                    }
                }
            }
            self.next_token();
        }

        Ok(BlockStatement::new(statements))
    }
}
