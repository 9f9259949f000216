//! Tree-walking interpreter.
//!
//! Every `eval_*` method returns `EvalResult`: `Ok` for a value, `Err` for a
//! `return` or an error unwinding through the tree. `return` is caught at
//! function calls; both are caught by `eval_program`, where an error turns
//! into an `Object::Error` value.

mod expr;
mod function_call;

use monkey_ir::{BlockStatement, Program, Statement};
use tracing::debug;

use crate::environment::Environment;
use crate::errors::{ControlFlow, EvalResult};
use crate::object::Object;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Evaluator state: where `puts` writes.
pub struct Interpreter {
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// An interpreter printing to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        Interpreter { print_handler }
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate a whole program in `env`.
    ///
    /// The result is the value of the last statement, the value of a
    /// top-level `return`, or the first error as `Object::Error`.
    pub fn eval_program(&self, program: &Program, env: &Environment) -> Object {
        self.run_program(program, env).unwrap_or(Object::Null)
    }

    /// Like [`eval_program`](Self::eval_program), but `None` when the
    /// program ran to its end and that end was a `let` (or there were no
    /// statements). A top-level `return` or an error always yields a value.
    pub fn run_program(&self, program: &Program, env: &Environment) -> Option<Object> {
        let ends_in_let = matches!(
            program.statements.last(),
            None | Some(Statement::Let { .. })
        );
        match self.eval_statements(&program.statements, env) {
            Ok(_) if ends_in_let => None,
            Ok(value) | Err(ControlFlow::Return(value)) => Some(value),
            Err(ControlFlow::Error(err)) => {
                debug!(error = %err, "evaluation failed");
                Some(Object::Error(err))
            }
        }
    }

    /// Evaluate in order; the value is the last statement's, or `null`.
    fn eval_statements(&self, statements: &[Statement], env: &Environment) -> EvalResult {
        let mut result = Object::Null;
        for stmt in statements {
            result = self.eval_statement(stmt, env)?;
        }
        Ok(result)
    }

    /// Blocks share their enclosing frame; only calls open a new one.
    pub(crate) fn eval_block(&self, block: &BlockStatement, env: &Environment) -> EvalResult {
        self.eval_statements(&block.statements, env)
    }

    fn eval_statement(&self, stmt: &Statement, env: &Environment) -> EvalResult {
        match stmt {
            Statement::Let { name, value } => {
                let value = self.eval_expression(value, env)?;
                env.set(name.as_str(), value);
                Ok(Object::Null)
            }
            Statement::Return { value } => {
                let value = self.eval_expression(value, env)?;
                Err(ControlFlow::Return(value))
            }
            Statement::Expression(expr) => self.eval_expression(expr, env),
            Statement::Block(block) => self.eval_block(block, env),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
