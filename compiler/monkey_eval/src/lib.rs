//! Monkey Eval - tree-walking evaluator.
//!
//! - [`Object`]: runtime values, with [`HashKey`] for hashable ones
//! - [`Environment`]: shared, chained frames of bindings
//! - [`Interpreter`]: evaluates a `Program` against an environment
//! - [`Builtin`]: `len`, `first`, `last`, `rest`, `push`, `puts`
//! - `quote`/`unquote` and the macro pass ([`define_macros`], [`expand_macros`])
//!
//! # Example
//!
//! ```text
//! let env = Environment::new();
//! let macros = Environment::new();
//! let program = define_macros(program, &macros);
//! let program = expand_macros(program, &macros)?;
//! let result = Interpreter::new().eval_program(&program, &env);
//! ```

mod builtins;
mod environment;
mod errors;
mod interpreter;
mod macros;
mod object;
mod operators;
mod print_handler;
mod quote;

pub use builtins::Builtin;
pub use environment::{Environment, LocalScope, Scope};
pub use errors::{ControlFlow, EvalError, EvalResult};
pub use interpreter::Interpreter;
pub use macros::{define_macros, expand_macros};
pub use object::{FunctionObject, HashKey, HashObject, HashPair, MacroObject, Object, ObjectKind};
pub use operators::{evaluate_infix, evaluate_prefix};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use quote::object_to_expression;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
