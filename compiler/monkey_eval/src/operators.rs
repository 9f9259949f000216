//! Prefix and infix operator semantics.
//!
//! Direct pattern matching over the operand kinds. The value set is closed,
//! so every combination is handled here and nowhere else.

use monkey_ir::{InfixOp, PrefixOp};

use crate::errors::EvalError;
use crate::object::Object;

/// Evaluate `!operand` or `-operand`.
pub fn evaluate_prefix(operator: PrefixOp, operand: &Object) -> Result<Object, EvalError> {
    match (operator, operand) {
        (PrefixOp::Not, value) => Ok(Object::Boolean(!value.is_truthy())),
        (PrefixOp::Neg, Object::Integer(value)) => Ok(Object::Integer(value.wrapping_neg())),
        (PrefixOp::Neg, other) => Err(EvalError::UnknownPrefixOperator {
            operator,
            operand: other.kind(),
        }),
    }
}

/// Evaluate `left operator right`.
pub fn evaluate_infix(left: &Object, operator: InfixOp, right: &Object) -> Result<Object, EvalError> {
    match (left, right) {
        (Object::Integer(a), Object::Integer(b)) => eval_int_infix(*a, operator, *b),
        (Object::String(a), Object::String(b)) => match operator {
            InfixOp::Add => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Object::string(joined))
            }
            InfixOp::Eq => Ok(Object::Boolean(a == b)),
            InfixOp::NotEq => Ok(Object::Boolean(a != b)),
            _ => Err(EvalError::unknown_infix(left, operator, right)),
        },
        // Booleans and null compare structurally in any combination.
        (Object::Boolean(_) | Object::Null, Object::Boolean(_) | Object::Null)
            if operator.is_equality() =>
        {
            let equal = left == right;
            Ok(Object::Boolean(if operator == InfixOp::Eq { equal } else { !equal }))
        }
        _ if left.kind() != right.kind() => Err(EvalError::type_mismatch(left, operator, right)),
        _ => Err(EvalError::unknown_infix(left, operator, right)),
    }
}

/// Integer arithmetic wraps on overflow.
fn eval_int_infix(a: i64, operator: InfixOp, b: i64) -> Result<Object, EvalError> {
    let value = match operator {
        InfixOp::Add => Object::Integer(a.wrapping_add(b)),
        InfixOp::Sub => Object::Integer(a.wrapping_sub(b)),
        InfixOp::Mul => Object::Integer(a.wrapping_mul(b)),
        InfixOp::Div => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            Object::Integer(a.wrapping_div(b))
        }
        InfixOp::Lt => Object::Boolean(a < b),
        InfixOp::Gt => Object::Boolean(a > b),
        InfixOp::Eq => Object::Boolean(a == b),
        InfixOp::NotEq => Object::Boolean(a != b),
    };
    Ok(value)
}
