//! Native functions.
//!
//! Builtins are resolved by name when an identifier has no binding, so a
//! user `let len = ...` shadows them.

use crate::errors::EvalError;
use crate::object::{Object, ObjectKind};
use crate::print_handler::PrintHandlerImpl;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Len,
    First,
    Last,
    Rest,
    Push,
    Puts,
}

impl Builtin {
    pub const ALL: [Builtin; 6] = [
        Builtin::Len,
        Builtin::First,
        Builtin::Last,
        Builtin::Rest,
        Builtin::Push,
        Builtin::Puts,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Builtin::Len => "len",
            Builtin::First => "first",
            Builtin::Last => "last",
            Builtin::Rest => "rest",
            Builtin::Push => "push",
            Builtin::Puts => "puts",
        }
    }

    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    /// Apply to already evaluated arguments.
    pub fn call(self, args: &[Object], out: &PrintHandlerImpl) -> Result<Object, EvalError> {
        match self {
            Builtin::Len => len(args),
            Builtin::First => {
                let elements = array_arg(self, args)?;
                Ok(elements.first().cloned().unwrap_or(Object::Null))
            }
            Builtin::Last => {
                let elements = array_arg(self, args)?;
                Ok(elements.last().cloned().unwrap_or(Object::Null))
            }
            Builtin::Rest => {
                let elements = array_arg(self, args)?;
                if elements.is_empty() {
                    return Ok(Object::Null);
                }
                Ok(Object::array(elements[1..].to_vec()))
            }
            Builtin::Push => push(args),
            Builtin::Puts => {
                for arg in args {
                    out.println(&arg.to_string());
                }
                Ok(Object::Null)
            }
        }
    }
}

fn check_arity(args: &[Object], want: usize) -> Result<(), EvalError> {
    if args.len() == want {
        Ok(())
    } else {
        Err(EvalError::BuiltinArity {
            want,
            got: args.len(),
        })
    }
}

fn count(n: usize) -> Object {
    Object::Integer(i64::try_from(n).unwrap_or(i64::MAX))
}

fn len(args: &[Object]) -> Result<Object, EvalError> {
    check_arity(args, 1)?;
    match &args[0] {
        Object::String(value) => Ok(count(value.len())),
        Object::Array(elements) => Ok(count(elements.len())),
        other => Err(EvalError::UnsupportedArgument {
            builtin: Builtin::Len.name(),
            got: other.kind(),
        }),
    }
}

/// The single array argument of `first`/`last`/`rest`.
fn array_arg(builtin: Builtin, args: &[Object]) -> Result<&[Object], EvalError> {
    check_arity(args, 1)?;
    match &args[0] {
        Object::Array(elements) => Ok(elements.as_slice()),
        other => Err(EvalError::ArgumentType {
            builtin: builtin.name(),
            want: ObjectKind::Array,
            got: other.kind(),
        }),
    }
}

/// A new array with the element appended; the argument is left unchanged.
fn push(args: &[Object]) -> Result<Object, EvalError> {
    check_arity(args, 2)?;
    match &args[0] {
        Object::Array(elements) => {
            let mut pushed = Vec::with_capacity(elements.len() + 1);
            pushed.extend(elements.iter().cloned());
            pushed.push(args[1].clone());
            Ok(Object::array(pushed))
        }
        other => Err(EvalError::ArgumentType {
            builtin: Builtin::Push.name(),
            want: ObjectKind::Array,
            got: other.kind(),
        }),
    }
}

#[cfg(test)]
mod tests;
