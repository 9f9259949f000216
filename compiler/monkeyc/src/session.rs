//! One interpreter session: parse, expand macros, evaluate.

use monkey_eval::{
    define_macros, Environment, Interpreter, Object, SharedPrintHandler,
};
use monkey_lexer::Lexer;
use tracing::debug;

/// What evaluating one input produced.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The input did not parse; nothing was evaluated.
    ParseErrors(Vec<String>),
    /// The value of the input. Runtime errors arrive as `Object::Error`.
    Value(Object),
    /// Evaluation ran through a final `let` (or there was nothing to run):
    /// nothing to show.
    Unit,
}

/// Persistent evaluation state.
pub struct Session {
    interpreter: Interpreter,
    env: Environment,
    macros: Environment,
}

impl Session {
    /// A session printing `puts` output to stdout.
    pub fn new() -> Self {
        Self::with_interpreter(Interpreter::new())
    }

    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        Self::with_interpreter(Interpreter::with_print_handler(print_handler))
    }

    fn with_interpreter(interpreter: Interpreter) -> Self {
        Session {
            interpreter,
            env: Environment::new(),
            macros: Environment::new(),
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Run one input through the whole pipeline.
    pub fn eval(&self, source: &str) -> Outcome {
        let output = monkey_parse::parse(Lexer::new(source));
        if output.has_errors() {
            return Outcome::ParseErrors(output.diagnostics());
        }

        let program = define_macros(output.program, &self.macros);
        let program = match self.interpreter.expand_macros(program, &self.macros) {
            Ok(program) => program,
            Err(err) => {
                debug!(error = %err, "macro expansion failed");
                return Outcome::Value(Object::Error(err));
            }
        };

        match self.interpreter.run_program(&program, &self.env) {
            Some(value) => Outcome::Value(value),
            None => Outcome::Unit,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
