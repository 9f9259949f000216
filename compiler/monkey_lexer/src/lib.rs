//! Lexer for Monkey using logos.
//!
//! `Lexer` is a pull-based `TokenSource`: the parser asks for one token at a
//! time. Whitespace (including newlines) is insignificant. Input logos cannot
//! match becomes an `Illegal` token carrying the offending text, so the
//! parser reports it instead of the lexer failing.

mod raw_token;

use logos::Logos;
use monkey_ir::{Token, TokenKind, TokenSource};

use raw_token::RawToken;

/// Streaming lexer over a source string.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            inner: RawToken::lexer(source),
            finished: false,
        }
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        if self.finished {
            return Token::eof();
        }
        match self.inner.next() {
            Some(Ok(raw)) => {
                let slice = self.inner.slice();
                Token::new(raw.kind(slice), raw.literal(slice))
            }
            Some(Err(())) => Token::new(TokenKind::Illegal, self.inner.slice()),
            None => {
                self.finished = true;
                Token::eof()
            }
        }
    }
}

/// Lex a whole source string, excluding the trailing `Eof`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        if token.is(TokenKind::Eof) {
            return tokens;
        }
        tokens.push(token);
    }
}
