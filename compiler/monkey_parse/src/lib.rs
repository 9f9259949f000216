//! Pratt parser for Monkey.
//!
//! Pulls tokens from any `TokenSource` with one token of lookahead and
//! builds an owned `Program`. Errors never abort the parse: each one is
//! recorded, the malformed statement is dropped, and parsing resumes at the
//! next statement boundary, so one pass reports every problem it can find.

mod error;
mod grammar;
mod precedence;

pub use error::ParseError;
pub use precedence::Precedence;

use monkey_ir::{Program, Token, TokenKind, TokenSource};
use tracing::trace;

pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// Result of parsing: the reconstructed program plus every diagnostic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Diagnostics rendered as messages, in the order they were found.
    pub fn diagnostics(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Parser state.
pub struct Parser<S> {
    source: S,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl<S: TokenSource> Parser<S> {
    /// Create a parser, priming the current and lookahead tokens.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let peek = source.next_token();
        Parser {
            source,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    /// Parse the whole token stream.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();

        while !self.cur_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize();
                }
            }
            self.next_token();
        }

        ParseOutput {
            program: Program::new(statements),
            errors: self.errors,
        }
    }

    // ===== Token access =====

    fn next_token(&mut self) {
        let next = self.source.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
        trace!(kind = %self.current.kind, literal = %self.current.literal, "advance");
    }

    #[inline]
    fn cur_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    #[inline]
    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advance if the lookahead is `kind`, otherwise report it.
    fn expect_peek(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.peek_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::unexpected(kind, self.peek.kind))
        }
    }

    #[inline]
    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    #[inline]
    fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }

    /// Skip the rest of a malformed statement.
    ///
    /// Stops with the current token on `;`, or just before a `}` or the end
    /// of input, so the caller's usual advance lands on the next statement
    /// or the enclosing block's closing brace.
    fn synchronize(&mut self) {
        while !matches!(
            self.current.kind,
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof
        ) && !matches!(self.peek.kind, TokenKind::RBrace | TokenKind::Eof)
        {
            self.next_token();
        }
    }
}

/// Parse a token stream into a program and its diagnostics.
pub fn parse(tokens: impl TokenSource) -> ParseOutput {
    let output = Parser::new(tokens).parse_program();
    tracing::debug!(
        statements = output.program.statements.len(),
        errors = output.errors.len(),
        "parsed program"
    );
    output
}

#[cfg(test)]
mod tests;
