//! Source rendering for AST nodes.
//!
//! Output re-parses to an equivalent tree: prefix and infix forms are fully
//! parenthesized, string literals are quoted, and an expression statement
//! that is followed by another statement is terminated with `;` so the next
//! statement cannot be read as a call or index on it.

use std::fmt::{self, Display, Formatter};

use super::{
    BlockStatement, Expression, FunctionLiteral, Identifier, MacroLiteral, PrefixOp, Program,
    Statement,
};

/// Write `items` separated by `sep`.
fn write_joined<T: Display>(f: &mut Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Write a statement sequence, space separated.
fn write_statements(f: &mut Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    let last = statements.len().saturating_sub(1);
    for (i, stmt) in statements.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{stmt}")?;
        if i < last && matches!(stmt, Statement::Expression(_)) {
            f.write_str(";")?;
        }
    }
    Ok(())
}

/// Whether the rendering of `expr` begins with a digit.
fn starts_with_digit(expr: &Expression) -> bool {
    match expr {
        Expression::Integer(value) => *value >= 0,
        Expression::Call { callee, .. } => starts_with_digit(callee),
        _ => false,
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {name} = {value};"),
            Statement::Return { value } => write!(f, "return {value};"),
            Statement::Expression(expr) => write!(f, "{expr}"),
            Statement::Block(block) => write!(f, "{block}"),
        }
    }
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{ }");
        }
        f.write_str("{ ")?;
        write_statements(f, &self.statements)?;
        f.write_str(" }")
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_joined(f, &self.params, ", ")?;
        write!(f, ") {}", self.body)
    }
}

impl Display for MacroLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("macro(")?;
        write_joined(f, &self.params, ", ")?;
        write!(f, ") {}", self.body)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{ident}"),
            Expression::Integer(value) => write!(f, "{value}"),
            Expression::String(value) => write!(f, "\"{value}\""),
            Expression::Boolean(value) => write!(f, "{value}"),
            Expression::Prefix { operator, operand } => {
                if *operator == PrefixOp::Neg && starts_with_digit(operand) {
                    // `-5` would re-parse as a negative literal.
                    write!(f, "({operator}({operand}))")
                } else {
                    write!(f, "({operator}{operand})")
                }
            }
            Expression::Infix {
                operator,
                left,
                right,
            } => write!(f, "({left} {operator} {right})"),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if {condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            }
            Expression::Function(func) => write!(f, "{func}"),
            Expression::Call { callee, args } => {
                write!(f, "{callee}(")?;
                write_joined(f, args, ", ")?;
                f.write_str(")")
            }
            Expression::Array(elements) => {
                f.write_str("[")?;
                write_joined(f, elements, ", ")?;
                f.write_str("]")
            }
            Expression::Index { collection, index } => write!(f, "({collection}[{index}])"),
            Expression::Hash(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Expression::Macro(mac) => write!(f, "{mac}"),
        }
    }
}
