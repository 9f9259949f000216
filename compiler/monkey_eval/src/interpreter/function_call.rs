//! Calls: user functions, builtins and the `quote` intrinsic.

use monkey_ir::Expression;

use super::Interpreter;
use crate::environment::Environment;
use crate::errors::{ControlFlow, EvalError, EvalResult};
use crate::object::Object;

impl Interpreter {
    #[tracing::instrument(level = "debug", skip_all, fields(args = args.len()))]
    pub(crate) fn eval_call(
        &self,
        callee: &Expression,
        args: &[Expression],
        env: &Environment,
    ) -> EvalResult {
        if is_quote_intrinsic(callee, env) {
            return self.eval_quote(args, env);
        }

        let function = self.eval_expression(callee, env)?;
        let args = self.eval_expressions(args, env)?;
        self.apply_function(&function, args)
    }

    /// Call an evaluated function value.
    ///
    /// A user function runs in a fresh frame enclosed by the frame it was
    /// defined in. A `return` inside it stops here.
    pub(crate) fn apply_function(&self, function: &Object, args: Vec<Object>) -> EvalResult {
        match function {
            Object::Function(func) => {
                if func.params.len() != args.len() {
                    return Err(EvalError::ArityMismatch {
                        want: func.params.len(),
                        got: args.len(),
                    }
                    .into());
                }

                let frame = Environment::new_enclosed(&func.env);
                for (param, arg) in func.params.iter().zip(args) {
                    frame.set(param.as_str(), arg);
                }

                match self.eval_block(&func.body, &frame) {
                    Ok(value) | Err(ControlFlow::Return(value)) => Ok(value),
                    Err(err) => Err(err),
                }
            }
            Object::Builtin(builtin) => Ok(builtin.call(&args, &self.print_handler)?),
            other => Err(EvalError::NotAFunction { kind: other.kind() }.into()),
        }
    }
}

/// `quote(...)` is syntax, unless the program bound `quote` itself.
fn is_quote_intrinsic(callee: &Expression, env: &Environment) -> bool {
    matches!(callee, Expression::Identifier(ident) if ident.as_str() == "quote")
        && env.get("quote").is_none()
}
