//! AST Folder Pattern
//!
//! Provides generic, fallible rewriting of owned AST trees.
//!
//! # Design
//!
//! A `Folder` consumes a node and returns its replacement. Default
//! implementations call the `walk_*` functions, which rebuild the node
//! from folded children. Override `fold_*` to rewrite specific nodes:
//!
//! - Rewrite *before* walking to replace a node without visiting its
//!   children (unquote splicing does this).
//! - Walk first and rewrite the result to replace bottom-up (macro
//!   expansion does this).
//!
//! # Example
//!
//! ```text
//! struct Increment;
//!
//! impl Folder for Increment {
//!     type Error = Infallible;
//!
//!     fn fold_expression(&mut self, expr: Expression) -> Result<Expression, Infallible> {
//!         match walk_expression(self, expr)? {
//!             Expression::Integer(n) => Ok(Expression::Integer(n + 1)),
//!             other => Ok(other),
//!         }
//!     }
//! }
//! ```

use std::rc::Rc;

use crate::ast::{
    BlockStatement, Expression, FunctionLiteral, MacroLiteral, Program, Statement,
};

/// AST rewriting trait.
pub trait Folder {
    /// Error that aborts the rewrite.
    type Error;

    fn fold_program(&mut self, program: Program) -> Result<Program, Self::Error> {
        walk_program(self, program)
    }

    fn fold_statement(&mut self, stmt: Statement) -> Result<Statement, Self::Error> {
        walk_statement(self, stmt)
    }

    fn fold_block(&mut self, block: BlockStatement) -> Result<BlockStatement, Self::Error> {
        walk_block(self, block)
    }

    fn fold_expression(&mut self, expr: Expression) -> Result<Expression, Self::Error> {
        walk_expression(self, expr)
    }
}

fn fold_statements<F: Folder + ?Sized>(
    folder: &mut F,
    statements: Vec<Statement>,
) -> Result<Vec<Statement>, F::Error> {
    statements
        .into_iter()
        .map(|stmt| folder.fold_statement(stmt))
        .collect()
}

fn fold_expressions<F: Folder + ?Sized>(
    folder: &mut F,
    exprs: Vec<Expression>,
) -> Result<Vec<Expression>, F::Error> {
    exprs
        .into_iter()
        .map(|expr| folder.fold_expression(expr))
        .collect()
}

fn fold_boxed<F: Folder + ?Sized>(
    folder: &mut F,
    expr: Box<Expression>,
) -> Result<Box<Expression>, F::Error> {
    folder.fold_expression(*expr).map(Box::new)
}

fn fold_shared_block<F: Folder + ?Sized>(
    folder: &mut F,
    body: Rc<BlockStatement>,
) -> Result<Rc<BlockStatement>, F::Error> {
    folder.fold_block(Rc::unwrap_or_clone(body)).map(Rc::new)
}

pub fn walk_program<F: Folder + ?Sized>(
    folder: &mut F,
    program: Program,
) -> Result<Program, F::Error> {
    Ok(Program::new(fold_statements(folder, program.statements)?))
}

pub fn walk_block<F: Folder + ?Sized>(
    folder: &mut F,
    block: BlockStatement,
) -> Result<BlockStatement, F::Error> {
    Ok(BlockStatement::new(fold_statements(folder, block.statements)?))
}

pub fn walk_statement<F: Folder + ?Sized>(
    folder: &mut F,
    stmt: Statement,
) -> Result<Statement, F::Error> {
    Ok(match stmt {
        Statement::Let { name, value } => Statement::Let {
            name,
            value: folder.fold_expression(value)?,
        },
        Statement::Return { value } => Statement::Return {
            value: folder.fold_expression(value)?,
        },
        Statement::Expression(expr) => Statement::Expression(folder.fold_expression(expr)?),
        Statement::Block(block) => Statement::Block(folder.fold_block(block)?),
    })
}

pub fn walk_expression<F: Folder + ?Sized>(
    folder: &mut F,
    expr: Expression,
) -> Result<Expression, F::Error> {
    Ok(match expr {
        Expression::Identifier(_)
        | Expression::Integer(_)
        | Expression::String(_)
        | Expression::Boolean(_) => expr,
        Expression::Prefix { operator, operand } => Expression::Prefix {
            operator,
            operand: fold_boxed(folder, operand)?,
        },
        Expression::Infix {
            operator,
            left,
            right,
        } => Expression::Infix {
            operator,
            left: fold_boxed(folder, left)?,
            right: fold_boxed(folder, right)?,
        },
        Expression::If {
            condition,
            consequence,
            alternative,
        } => Expression::If {
            condition: fold_boxed(folder, condition)?,
            consequence: folder.fold_block(consequence)?,
            alternative: alternative
                .map(|block| folder.fold_block(block))
                .transpose()?,
        },
        Expression::Function(FunctionLiteral { params, body }) => {
            Expression::Function(FunctionLiteral {
                params,
                body: fold_shared_block(folder, body)?,
            })
        }
        Expression::Call { callee, args } => Expression::Call {
            callee: fold_boxed(folder, callee)?,
            args: fold_expressions(folder, args)?,
        },
        Expression::Array(elements) => Expression::Array(fold_expressions(folder, elements)?),
        Expression::Index { collection, index } => Expression::Index {
            collection: fold_boxed(folder, collection)?,
            index: fold_boxed(folder, index)?,
        },
        Expression::Hash(pairs) => Expression::Hash(
            pairs
                .into_iter()
                .map(|(key, value)| {
                    Ok((folder.fold_expression(key)?, folder.fold_expression(value)?))
                })
                .collect::<Result<_, F::Error>>()?,
        ),
        Expression::Macro(MacroLiteral { params, body }) => Expression::Macro(MacroLiteral {
            params,
            body: fold_shared_block(folder, body)?,
        }),
    })
}
