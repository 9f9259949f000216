//! Expression evaluation.

use std::rc::Rc;

use monkey_ir::{BlockStatement, Expression, Identifier};

use super::Interpreter;
use crate::builtins::Builtin;
use crate::environment::Environment;
use crate::errors::{EvalError, EvalResult};
use crate::object::{FunctionObject, HashObject, HashPair, MacroObject, Object};
use crate::operators::{evaluate_infix, evaluate_prefix};

impl Interpreter {
    pub(crate) fn eval_expression(&self, expr: &Expression, env: &Environment) -> EvalResult {
        match expr {
            Expression::Identifier(ident) => self.eval_identifier(ident, env),
            Expression::Integer(value) => Ok(Object::Integer(*value)),
            Expression::String(value) => Ok(Object::string(value.as_str())),
            Expression::Boolean(value) => Ok(Object::Boolean(*value)),
            Expression::Prefix { operator, operand } => {
                let operand = self.eval_expression(operand, env)?;
                Ok(evaluate_prefix(*operator, &operand)?)
            }
            Expression::Infix {
                operator,
                left,
                right,
            } => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                Ok(evaluate_infix(&left, *operator, &right)?)
            }
            Expression::If {
                condition,
                consequence,
                alternative,
            } => self.eval_if(condition, consequence, alternative.as_ref(), env),
            Expression::Function(func) => Ok(Object::Function(Rc::new(FunctionObject {
                params: func.params.clone(),
                body: Rc::clone(&func.body),
                env: env.clone(),
            }))),
            Expression::Call { callee, args } => self.eval_call(callee, args, env),
            Expression::Array(elements) => {
                Ok(Object::array(self.eval_expressions(elements, env)?))
            }
            Expression::Index { collection, index } => {
                let collection = self.eval_expression(collection, env)?;
                let index = self.eval_expression(index, env)?;
                Ok(eval_index(&collection, &index)?)
            }
            Expression::Hash(pairs) => self.eval_hash(pairs, env),
            // Only reached for literals the macro pass did not pick up,
            // i.e. ones not bound by a top-level `let`. They cannot be called.
            Expression::Macro(mac) => Ok(Object::Macro(Rc::new(MacroObject {
                params: mac.params.clone(),
                body: Rc::clone(&mac.body),
                env: env.clone(),
            }))),
        }
    }

    /// Bindings first, then builtins.
    fn eval_identifier(&self, ident: &Identifier, env: &Environment) -> EvalResult {
        if let Some(value) = env.get(ident.as_str()) {
            return Ok(value);
        }
        match Builtin::lookup(ident.as_str()) {
            Some(builtin) => Ok(Object::Builtin(builtin)),
            None => Err(EvalError::identifier_not_found(ident.as_str()).into()),
        }
    }

    /// Left to right; the first error stops the rest.
    pub(crate) fn eval_expressions(
        &self,
        exprs: &[Expression],
        env: &Environment,
    ) -> EvalResult<Vec<Object>> {
        exprs
            .iter()
            .map(|expr| self.eval_expression(expr, env))
            .collect()
    }

    fn eval_if(
        &self,
        condition: &Expression,
        consequence: &BlockStatement,
        alternative: Option<&BlockStatement>,
        env: &Environment,
    ) -> EvalResult {
        let condition = self.eval_expression(condition, env)?;
        if condition.is_truthy() {
            self.eval_block(consequence, env)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative, env)
        } else {
            Ok(Object::Null)
        }
    }

    /// Later duplicates of a key replace earlier ones.
    fn eval_hash(&self, pairs: &[(Expression, Expression)], env: &Environment) -> EvalResult {
        let mut hash = HashObject::new();
        for (key_expr, value_expr) in pairs {
            let key = self.eval_expression(key_expr, env)?;
            let hash_key = key.hash_key()?;
            let value = self.eval_expression(value_expr, env)?;
            hash.insert(hash_key, HashPair { key, value });
        }
        Ok(Object::Hash(Rc::new(hash)))
    }
}

/// `collection[index]`. Missing elements and keys are `null`.
fn eval_index(collection: &Object, index: &Object) -> Result<Object, EvalError> {
    match (collection, index) {
        (Object::Array(elements), Object::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| elements.get(i))
            .cloned()
            .unwrap_or(Object::Null)),
        (Object::Hash(hash), key) => {
            let key = key.hash_key()?;
            Ok(hash.get(&key).cloned().unwrap_or(Object::Null))
        }
        (other, _) => Err(EvalError::IndexNotSupported { kind: other.kind() }),
    }
}
