//! Parser tests.
//!
//! - `parser`: statements, literals, operator precedence
//! - `recovery`: diagnostics and continuing after malformed statements


use crate::{parse, ParseOutput};
use monkey_ir::Program;

fn parse_source(source: &str) -> ParseOutput {
    parse(monkey_lexer::Lexer::new(source))
}

/// Parse and require a clean result.
fn parse_ok(source: &str) -> Program {
    let output = parse_source(source);
    assert!(
        !output.has_errors(),
        "unexpected diagnostics for {source:?}: {:?}",
        output.diagnostics()
    );
    output.program
}
