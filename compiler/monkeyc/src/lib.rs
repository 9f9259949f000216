//! Monkey driver.
//!
//! Wires the stages together for the `monkey` binary:
//!
//! ```text
//! source ──► Lexer ──► parse() ──► define_macros / expand_macros ──► Interpreter
//! ```
//!
//! A [`Session`] keeps the environment and macro table alive between
//! inputs, so REPL lines build on each other.

pub mod commands;
mod session;

pub use session::{Outcome, Session};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber, once, if `RUST_LOG` is set.
///
/// `RUST_LOG=monkey_parse=trace` shows every token the parser consumes;
/// `RUST_LOG=monkey_eval=debug` shows calls and macro definitions.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
