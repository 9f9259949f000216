//! Runtime values.
//!
//! `Object` is a closed set of variants. Scalars are stored inline; strings,
//! collections and callables are behind `Rc` so cloning a value (binding it,
//! passing it, returning it) never copies its contents.

mod hash;

use std::fmt;
use std::rc::Rc;

use monkey_ir::{BlockStatement, Expression, Identifier};

use crate::builtins::Builtin;
use crate::environment::Environment;
use crate::errors::EvalError;

pub use hash::{HashKey, HashObject, HashPair};

/// Type tag of an `Object`, printed in error messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Integer,
    Boolean,
    Null,
    String,
    Array,
    Hash,
    Function,
    Builtin,
    Error,
    Quote,
    Macro,
}

impl ObjectKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::Null => "NULL",
            Self::String => "STRING",
            Self::Array => "ARRAY",
            Self::Hash => "HASH",
            Self::Function => "FUNCTION",
            Self::Builtin => "BUILTIN",
            Self::Error => "ERROR",
            Self::Quote => "QUOTE",
            Self::Macro => "MACRO",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A user function: parameters, body and the environment it closes over.
pub struct FunctionObject {
    pub params: Vec<Identifier>,
    pub body: Rc<BlockStatement>,
    pub env: Environment,
}

/// A macro definition, recorded by the macro pass and never seen by
/// ordinary evaluation.
pub struct MacroObject {
    pub params: Vec<Identifier>,
    pub body: Rc<BlockStatement>,
    pub env: Environment,
}

// The captured environment is omitted: a closure stored in the frame it
// captures would otherwise print itself forever.
impl fmt::Debug for FunctionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionObject")
            .field("params", &self.params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for MacroObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MacroObject")
            .field("params", &self.params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
    Null,
    Array(Rc<Vec<Object>>),
    Hash(Rc<HashObject>),
    Function(Rc<FunctionObject>),
    Builtin(Builtin),
    Error(EvalError),
    /// Unevaluated syntax captured by `quote`.
    Quote(Rc<Expression>),
    Macro(Rc<MacroObject>),
}

impl Object {
    #[inline]
    pub fn string(value: impl Into<Rc<str>>) -> Self {
        Object::String(value.into())
    }

    #[inline]
    pub fn array(elements: Vec<Object>) -> Self {
        Object::Array(Rc::new(elements))
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Integer(_) => ObjectKind::Integer,
            Object::Boolean(_) => ObjectKind::Boolean,
            Object::String(_) => ObjectKind::String,
            Object::Null => ObjectKind::Null,
            Object::Array(_) => ObjectKind::Array,
            Object::Hash(_) => ObjectKind::Hash,
            Object::Function(_) => ObjectKind::Function,
            Object::Builtin(_) => ObjectKind::Builtin,
            Object::Error(_) => ObjectKind::Error,
            Object::Quote(_) => ObjectKind::Quote,
            Object::Macro(_) => ObjectKind::Macro,
        }
    }

    /// Everything except `false` and `null` is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// Key under which this value is stored in a hash.
    ///
    /// Only integers, booleans and strings are hashable.
    pub fn hash_key(&self) -> Result<HashKey, EvalError> {
        match self {
            Object::Integer(value) => Ok(HashKey::integer(*value)),
            Object::Boolean(value) => Ok(HashKey::boolean(*value)),
            Object::String(value) => Ok(HashKey::string(value)),
            other => Err(EvalError::UnusableHashKey { kind: other.kind() }),
        }
    }
}

impl From<bool> for Object {
    #[inline]
    fn from(value: bool) -> Self {
        Object::Boolean(value)
    }
}

impl From<i64> for Object {
    #[inline]
    fn from(value: i64) -> Self {
        Object::Integer(value)
    }
}

/// Value equality for data, identity for callables.
///
/// `true == true` and `null == null` hold because the variants compare
/// structurally; no canonical instances are involved.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::String(a), Object::String(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::Array(a), Object::Array(b)) => a == b,
            (Object::Hash(a), Object::Hash(b)) => a == b,
            (Object::Function(a), Object::Function(b)) => Rc::ptr_eq(a, b),
            (Object::Builtin(a), Object::Builtin(b)) => a == b,
            (Object::Error(a), Object::Error(b)) => a == b,
            (Object::Quote(a), Object::Quote(b)) => a == b,
            (Object::Macro(a), Object::Macro(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

fn write_params(f: &mut fmt::Formatter<'_>, params: &[Identifier]) -> fmt::Result {
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{param}")?;
    }
    Ok(())
}

/// Inspect form, as printed by the REPL and `puts`.
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{value}"),
            Object::Boolean(value) => write!(f, "{value}"),
            Object::String(value) => f.write_str(value),
            Object::Null => f.write_str("null"),
            Object::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Object::Hash(hash) => write!(f, "{hash}"),
            Object::Function(func) => {
                f.write_str("fn(")?;
                write_params(f, &func.params)?;
                write!(f, ") {}", func.body)
            }
            Object::Builtin(_) => f.write_str("builtin function"),
            Object::Error(err) => write!(f, "ERROR: {err}"),
            Object::Quote(node) => write!(f, "QUOTE({node})"),
            Object::Macro(mac) => {
                f.write_str("macro(")?;
                write_params(f, &mac.params)?;
                write!(f, ") {}", mac.body)
            }
        }
    }
}
