//! Macro definition and expansion.
//!
//! Runs between parsing and evaluation, as two pure passes over the
//! program:
//!
//! 1. [`define_macros`] removes every top-level `let name = macro(...) {...};`
//!    and binds `name` to an `Object::Macro` in the macro environment.
//! 2. [`expand_macros`] replaces every call to a bound macro with the syntax
//!    the macro body returns. The arguments are passed unevaluated, each
//!    wrapped in a quote, and the body must produce a quote.
//!
//! Expansion is bottom-up: arguments are expanded before the call that
//! receives them.

use std::rc::Rc;

use monkey_ir::fold::walk_expression;
use monkey_ir::{Expression, Folder, Program, Statement};
use tracing::debug;

use crate::environment::Environment;
use crate::errors::{settle, EvalError};
use crate::interpreter::Interpreter;
use crate::object::{MacroObject, Object};

/// Record top-level macro definitions in `env` and drop them from the
/// program.
pub fn define_macros(program: Program, env: &Environment) -> Program {
    let mut statements = Vec::with_capacity(program.statements.len());

    for stmt in program.statements {
        match stmt {
            Statement::Let {
                name,
                value: Expression::Macro(mac),
            } => {
                debug!(name = name.as_str(), "defined macro");
                let object = MacroObject {
                    params: mac.params,
                    body: mac.body,
                    env: env.clone(),
                };
                env.set(name.name, Object::Macro(Rc::new(object)));
            }
            other => statements.push(other),
        }
    }

    Program::new(statements)
}

/// Expand calls to macros bound in `env`, evaluating macro bodies with a
/// stdout interpreter.
pub fn expand_macros(program: Program, env: &Environment) -> Result<Program, EvalError> {
    Interpreter::new().expand_macros(program, env)
}

impl Interpreter {
    /// Expand calls to macros bound in `env`. `puts` inside a macro body
    /// writes to this interpreter's print handler.
    pub fn expand_macros(&self, program: Program, env: &Environment) -> Result<Program, EvalError> {
        MacroExpander {
            interpreter: self,
            env,
        }
        .fold_program(program)
    }

    fn expand_macro_call(
        &self,
        mac: &MacroObject,
        args: Vec<Expression>,
    ) -> Result<Expression, EvalError> {
        if mac.params.len() != args.len() {
            return Err(EvalError::ArityMismatch {
                want: mac.params.len(),
                got: args.len(),
            });
        }

        let frame = Environment::new_enclosed(&mac.env);
        for (param, arg) in mac.params.iter().zip(args) {
            frame.set(param.as_str(), Object::Quote(Rc::new(arg)));
        }

        match settle(self.eval_block(&mac.body, &frame))? {
            Object::Quote(node) => Ok(Rc::unwrap_or_clone(node)),
            other => Err(EvalError::MacroResult { kind: other.kind() }),
        }
    }
}

struct MacroExpander<'a> {
    interpreter: &'a Interpreter,
    env: &'a Environment,
}

impl MacroExpander<'_> {
    /// The macro a call's callee names, if any.
    fn macro_for(&self, callee: &Expression) -> Option<Rc<MacroObject>> {
        let Expression::Identifier(ident) = callee else {
            return None;
        };
        match self.env.get(ident.as_str()) {
            Some(Object::Macro(mac)) => Some(mac),
            _ => None,
        }
    }
}

impl Folder for MacroExpander<'_> {
    type Error = EvalError;

    fn fold_expression(&mut self, expr: Expression) -> Result<Expression, EvalError> {
        match walk_expression(self, expr)? {
            Expression::Call { callee, args } => match self.macro_for(&callee) {
                Some(mac) => self.interpreter.expand_macro_call(&mac, args),
                None => Ok(Expression::Call { callee, args }),
            },
            other => Ok(other),
        }
    }
}
