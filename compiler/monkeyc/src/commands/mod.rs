//! Command handlers for the `monkey` binary.

mod repl;
mod run;

pub use repl::{prompt, run_repl, PROMPT};
pub use run::run_file;
