//! The interactive loop.

use std::io::{self, BufRead, Write};

use crate::{Outcome, Session};

/// Default prompt.
pub const PROMPT: &str = ">> ";

/// The prompt to show: `MONKEY_PROMPT` if set, else [`PROMPT`].
pub fn prompt() -> String {
    std::env::var("MONKEY_PROMPT").unwrap_or_else(|_| PROMPT.to_string())
}

/// Read lines from `input` until it is exhausted, evaluating each one in
/// `session` and writing results to `output`.
///
/// Parse errors are listed one per line, tab-indented, under a header;
/// the offending line is not evaluated.
pub fn run_repl<R: BufRead, W: Write>(
    session: &Session,
    mut input: R,
    output: &mut W,
    prompt: &str,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        match session.eval(&line) {
            Outcome::ParseErrors(errors) => {
                writeln!(output, "parser errors:")?;
                for error in errors {
                    writeln!(output, "\t{error}")?;
                }
            }
            Outcome::Value(value) => writeln!(output, "{value}")?,
            Outcome::Unit => {}
        }
    }
}
