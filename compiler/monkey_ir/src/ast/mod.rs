//! AST node types.
//!
//! A `Program` owns an ordered list of statements. Nodes are immutable once
//! the parser hands them out; rewriting passes (`Folder`) build new trees.

mod display;
mod operators;

use std::rc::Rc;

pub use operators::{InfixOp, PrefixOp};

/// A parsed program: the ordered top-level statements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A bare identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

/// Statements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    /// `let name = value;`
    Let { name: Identifier, value: Expression },
    /// `return value;`
    Return { value: Expression },
    /// A bare expression, optionally followed by `;`.
    Expression(Expression),
    /// `{ ... }`
    Block(BlockStatement),
}

/// A braced sequence of statements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(statements: Vec<Statement>) -> Self {
        BlockStatement { statements }
    }
}

/// `fn(params) { body }`
///
/// The body is shared so function objects created from the same literal
/// do not copy it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionLiteral {
    pub params: Vec<Identifier>,
    pub body: Rc<BlockStatement>,
}

/// `macro(params) { body }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MacroLiteral {
    pub params: Vec<Identifier>,
    pub body: Rc<BlockStatement>,
}

/// Expressions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(i64),
    String(String),
    Boolean(bool),
    Prefix {
        operator: PrefixOp,
        operand: Box<Expression>,
    },
    Infix {
        operator: InfixOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    Function(FunctionLiteral),
    Call {
        callee: Box<Expression>,
        args: Vec<Expression>,
    },
    Array(Vec<Expression>),
    Index {
        collection: Box<Expression>,
        index: Box<Expression>,
    },
    /// Key/value pairs in source order. Order only matters for rendering.
    Hash(Vec<(Expression, Expression)>),
    Macro(MacroLiteral),
}

impl Expression {
    pub fn ident(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    pub fn prefix(operator: PrefixOp, operand: Expression) -> Self {
        Expression::Prefix {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn infix(operator: InfixOp, left: Expression, right: Expression) -> Self {
        Expression::Infix {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(callee: Expression, args: Vec<Expression>) -> Self {
        Expression::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn index(collection: Expression, index: Expression) -> Self {
        Expression::Index {
            collection: Box::new(collection),
            index: Box::new(index),
        }
    }

    /// If this is a call whose callee is the bare identifier `name`,
    /// return its arguments.
    pub fn as_call_to(&self, name: &str) -> Option<&[Expression]> {
        match self {
            Expression::Call { callee, args } => match callee.as_ref() {
                Expression::Identifier(ident) if ident.name == name => Some(args),
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
