use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::*;

fn block(statements: Vec<Statement>) -> BlockStatement {
    BlockStatement::new(statements)
}

#[test]
fn test_render_let() {
    let program = Program::new(vec![Statement::Let {
        name: Identifier::new("myVar"),
        value: Expression::ident("anotherVar"),
    }]);
    assert_eq!(program.to_string(), "let myVar = anotherVar;");
}

#[test]
fn test_render_operators_are_parenthesized() {
    let expr = Expression::infix(
        InfixOp::Add,
        Expression::infix(
            InfixOp::Mul,
            Expression::Integer(-1),
            Expression::Integer(2),
        ),
        Expression::Integer(3),
    );
    assert_eq!(expr.to_string(), "((-1 * 2) + 3)");
}

#[test]
fn test_render_negated_literal_stays_a_prefix() {
    assert_eq!(
        Expression::prefix(PrefixOp::Neg, Expression::ident("a")).to_string(),
        "(-a)"
    );
    assert_eq!(
        Expression::prefix(PrefixOp::Neg, Expression::Integer(5)).to_string(),
        "(-(5))"
    );
    assert_eq!(
        Expression::prefix(PrefixOp::Neg, Expression::Integer(-5)).to_string(),
        "(--5)"
    );
}

#[test]
fn test_render_expression_statements_are_separated() {
    let program = Program::new(vec![
        Statement::Expression(Expression::ident("f")),
        Statement::Expression(Expression::prefix(PrefixOp::Not, Expression::ident("x"))),
        Statement::Return {
            value: Expression::Integer(1),
        },
    ]);
    assert_eq!(program.to_string(), "f; (!x); return 1;");
}

#[test]
fn test_render_if_else() {
    let expr = Expression::If {
        condition: Box::new(Expression::infix(
            InfixOp::Lt,
            Expression::ident("x"),
            Expression::ident("y"),
        )),
        consequence: block(vec![Statement::Expression(Expression::ident("x"))]),
        alternative: Some(block(vec![Statement::Expression(Expression::ident("y"))])),
    };
    assert_eq!(expr.to_string(), "if (x < y) { x } else { y }");
}

#[test]
fn test_render_function_and_call() {
    let func = Expression::Function(FunctionLiteral {
        params: vec![Identifier::new("x"), Identifier::new("y")],
        body: Rc::new(block(vec![Statement::Expression(Expression::infix(
            InfixOp::Add,
            Expression::ident("x"),
            Expression::ident("y"),
        ))])),
    });
    assert_eq!(func.to_string(), "fn(x, y) { (x + y) }");

    let call = Expression::call(
        Expression::ident("add"),
        vec![Expression::Integer(1), Expression::String("two".into())],
    );
    assert_eq!(call.to_string(), "add(1, \"two\")");
}

#[test]
fn test_render_collections() {
    let array = Expression::Array(vec![Expression::Integer(1), Expression::Boolean(true)]);
    assert_eq!(array.to_string(), "[1, true]");
    assert_eq!(Expression::Array(vec![]).to_string(), "[]");

    let index = Expression::index(Expression::ident("arr"), Expression::Integer(0));
    assert_eq!(index.to_string(), "(arr[0])");

    let hash = Expression::Hash(vec![
        (Expression::String("a".into()), Expression::Integer(1)),
        (Expression::Boolean(false), Expression::Integer(2)),
    ]);
    assert_eq!(hash.to_string(), "{\"a\": 1, false: 2}");
    assert_eq!(Expression::Hash(vec![]).to_string(), "{}");
}

#[test]
fn test_render_macro_and_empty_block() {
    let mac = Expression::Macro(MacroLiteral {
        params: vec![Identifier::new("a")],
        body: Rc::new(BlockStatement::default()),
    });
    assert_eq!(mac.to_string(), "macro(a) { }");
}

#[test]
fn test_as_call_to() {
    let call = Expression::call(Expression::ident("quote"), vec![Expression::Integer(1)]);
    assert_eq!(call.as_call_to("quote"), Some(&[Expression::Integer(1)][..]));
    assert_eq!(call.as_call_to("unquote"), None);
    assert_eq!(Expression::ident("quote").as_call_to("quote"), None);
}
