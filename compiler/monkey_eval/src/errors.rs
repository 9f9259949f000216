//! Runtime error types.
//!
//! `EvalError` is the user-visible error: it becomes `Object::Error` at the
//! top level and renders as `ERROR: {message}`. While evaluating, errors
//! travel alongside `return` on the `Err` channel as a `ControlFlow`, so `?`
//! short-circuits blocks, calls and argument lists uniformly.

use monkey_ir::{InfixOp, PrefixOp};

use crate::object::{Object, ObjectKind};

/// Result of evaluating a node.
pub type EvalResult<T = Object> = Result<T, ControlFlow>;

/// Signals that unwind evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlFlow {
    /// `return value;` unwinding to the nearest function call or the top level.
    Return(Object),
    /// A runtime error unwinding to the top level.
    Error(EvalError),
}

impl From<EvalError> for ControlFlow {
    fn from(err: EvalError) -> Self {
        ControlFlow::Error(err)
    }
}

/// Settle a result outside any function: a pending `return` yields its
/// value.
pub(crate) fn settle(result: EvalResult) -> Result<Object, EvalError> {
    match result {
        Ok(value) | Err(ControlFlow::Return(value)) => Ok(value),
        Err(ControlFlow::Error(err)) => Err(err),
    }
}

/// A runtime error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },

    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        operator: PrefixOp,
        operand: ObjectKind,
    },

    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        left: ObjectKind,
        operator: InfixOp,
        right: ObjectKind,
    },

    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: ObjectKind,
        operator: InfixOp,
        right: ObjectKind,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("not a function: {kind}")]
    NotAFunction { kind: ObjectKind },

    /// Arity mismatch calling a function or expanding a macro.
    #[error("wrong number of arguments: want={want}, got={got}")]
    ArityMismatch { want: usize, got: usize },

    /// Arity mismatch calling a builtin.
    #[error("wrong number of arguments. got={got}, want={want}")]
    BuiltinArity { want: usize, got: usize },

    #[error("argument to `{builtin}` not supported, got {got}")]
    UnsupportedArgument {
        builtin: &'static str,
        got: ObjectKind,
    },

    #[error("argument to `{builtin}` must be {want}, got {got}")]
    ArgumentType {
        builtin: &'static str,
        want: ObjectKind,
        got: ObjectKind,
    },

    #[error("unusable as hash key: {kind}")]
    UnusableHashKey { kind: ObjectKind },

    #[error("index operator not supported: {kind}")]
    IndexNotSupported { kind: ObjectKind },

    #[error("unquote of non-literal value: {kind}")]
    UnquoteNonLiteral { kind: ObjectKind },

    #[error("quote expects exactly one argument, got {got}")]
    QuoteArity { got: usize },

    #[error("macro must return a quote, got {kind}")]
    MacroResult { kind: ObjectKind },
}

impl EvalError {
    pub(crate) fn identifier_not_found(name: &str) -> Self {
        EvalError::IdentifierNotFound {
            name: name.to_string(),
        }
    }

    pub(crate) fn unknown_infix(left: &Object, operator: InfixOp, right: &Object) -> Self {
        EvalError::UnknownInfixOperator {
            left: left.kind(),
            operator,
            right: right.kind(),
        }
    }

    pub(crate) fn type_mismatch(left: &Object, operator: InfixOp, right: &Object) -> Self {
        EvalError::TypeMismatch {
            left: left.kind(),
            operator,
            right: right.kind(),
        }
    }
}
