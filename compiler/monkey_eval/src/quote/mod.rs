//! `quote` and `unquote`.
//!
//! `quote(expr)` returns `expr` unevaluated, as an `Object::Quote`. Before
//! wrapping, every `unquote(inner)` call inside it is evaluated in the
//! calling environment and replaced by a syntax node for the result.
//! Replacement happens before the node's children are visited, so an
//! unquoted expression is never itself searched for further unquotes.

use std::rc::Rc;

use monkey_ir::fold::walk_expression;
use monkey_ir::{Expression, Folder};

use crate::environment::Environment;
use crate::errors::{settle, EvalError, EvalResult};
use crate::interpreter::Interpreter;
use crate::object::Object;

impl Interpreter {
    /// The `quote` intrinsic, given its unevaluated arguments.
    pub(crate) fn eval_quote(&self, args: &[Expression], env: &Environment) -> EvalResult {
        let [quoted] = args else {
            return Err(EvalError::QuoteArity { got: args.len() }.into());
        };

        let mut unquoter = Unquoter {
            interpreter: self,
            env,
        };
        let node = unquoter.fold_expression(quoted.clone())?;
        Ok(Object::Quote(Rc::new(node)))
    }
}

struct Unquoter<'a> {
    interpreter: &'a Interpreter,
    env: &'a Environment,
}

impl Folder for Unquoter<'_> {
    type Error = EvalError;

    fn fold_expression(&mut self, expr: Expression) -> Result<Expression, EvalError> {
        if let Some([inner]) = expr.as_call_to("unquote") {
            let value = settle(self.interpreter.eval_expression(inner, self.env))?;
            return object_to_expression(&value);
        }
        walk_expression(self, expr)
    }
}

/// Syntax for a runtime value, where one exists.
///
/// Integers and booleans become literals; a quote yields the node it wraps.
pub fn object_to_expression(value: &Object) -> Result<Expression, EvalError> {
    match value {
        Object::Integer(value) => Ok(Expression::Integer(*value)),
        Object::Boolean(value) => Ok(Expression::Boolean(*value)),
        Object::Quote(node) => Ok(node.as_ref().clone()),
        other => Err(EvalError::UnquoteNonLiteral { kind: other.kind() }),
    }
}
