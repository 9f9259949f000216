//! The `run` command: evaluate a source file.

use std::process::ExitCode;

use monkey_eval::Object;

use crate::{Outcome, Session};

/// Evaluate the file at `path` in a fresh session.
///
/// Output comes only from `puts`. Parse errors and a runtime error are
/// reported on stderr with a failing exit code.
pub fn run_file(path: &str) -> ExitCode {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    match Session::new().eval(&source) {
        Outcome::ParseErrors(errors) => {
            eprintln!("{path}: parser errors:");
            for error in errors {
                eprintln!("\t{error}");
            }
            ExitCode::FAILURE
        }
        Outcome::Value(Object::Error(err)) => {
            eprintln!("{path}: ERROR: {err}");
            ExitCode::FAILURE
        }
        Outcome::Value(_) | Outcome::Unit => ExitCode::SUCCESS,
    }
}
