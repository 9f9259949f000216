//! Monkey IR - tokens and syntax trees.
//!
//! This crate contains the data shared by every stage of the pipeline:
//! - `Token` / `TokenKind` and the `TokenSource` pull interface the parser reads from
//! - AST nodes (`Program`, `Statement`, `Expression`, ...)
//! - Source rendering for every node (`Display`)
//! - `Folder`, a fallible AST rewriter used by quote/unquote and macro expansion
//!
//! # Design Philosophy
//!
//! - **Closed variant sets**: statements and expressions are enums, so every
//!   consumer matches exhaustively and a new variant breaks the build until
//!   it is handled everywhere.
//! - **Owned trees**: children are boxed; function and macro bodies sit
//!   behind `Rc` so runtime closures can share them without copying.
//! - **Renderable**: `parse(render(p))` renders identically to `render(p)`.

pub mod ast;
pub mod fold;
mod token;

pub use ast::{
    BlockStatement, Expression, FunctionLiteral, Identifier, InfixOp, MacroLiteral, PrefixOp,
    Program, Statement,
};
pub use fold::Folder;
pub use token::{Token, TokenKind, TokenSource, TokenStream};
