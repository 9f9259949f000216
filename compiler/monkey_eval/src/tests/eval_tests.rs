use pretty_assertions::assert_eq;

use super::{run, run_with_output};
use crate::{Environment, Interpreter, Object};

fn int(value: i64) -> Object {
    Object::Integer(value)
}

#[test]
fn test_integer_expressions() {
    let cases = [
        ("5", 5),
        ("-10", -10),
        ("--10", 10),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("5 * 2 + 10", 20),
        ("5 + 2 * 10", 25),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * 3 * 3 + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
        ("-(5)", -5),
        ("7 / 2", 3),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), int(expected), "in {source:?}");
    }
}

#[test]
fn test_integer_arithmetic_wraps() {
    assert_eq!(run("9223372036854775807 + 1"), int(i64::MIN));
    assert_eq!(run("-9223372036854775808 - 1"), int(i64::MAX));
    assert_eq!(run("-(-9223372036854775808)"), int(i64::MIN));
}

#[test]
fn test_boolean_expressions() {
    let cases = [
        ("true", true),
        ("false", false),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 < 1", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("1 == 2", false),
        ("true == true", true),
        ("false == false", true),
        ("true == false", false),
        ("true != false", true),
        ("(1 < 2) == true", true),
        ("(1 > 2) == true", false),
        (r#""a" == "a""#, true),
        (r#""a" != "b""#, true),
        ("if (false) { 1 } == if (false) { 2 }", true),
        ("true == if (false) { 1 }", false),
        ("if (false) { 1 } != false", true),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), Object::Boolean(expected), "in {source:?}");
    }
}

#[test]
fn test_bang_operator() {
    let cases = [
        ("!true", false),
        ("!false", true),
        ("!5", false),
        ("!!true", true),
        ("!!false", false),
        ("!!5", true),
        ("!0", false),
        (r#"!"""#, false),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), Object::Boolean(expected), "in {source:?}");
    }
}

#[test]
fn test_if_else_expressions() {
    let cases = [
        ("if (true) { 10 }", int(10)),
        ("if (false) { 10 }", Object::Null),
        ("if (1) { 10 }", int(10)),
        ("if (1 < 2) { 10 }", int(10)),
        ("if (1 > 2) { 10 }", Object::Null),
        ("if (1 > 2) { 10 } else { 20 }", int(20)),
        ("if (1 < 2) { 10 } else { 20 }", int(10)),
        ("if 1 < 2 { 10 }", int(10)),
        ("if (true) { }", Object::Null),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), expected, "in {source:?}");
    }
}

#[test]
fn test_return_statements() {
    let cases = [
        ("return 10;", 10),
        ("return 10; 9;", 10),
        ("return 2 * 5; 9;", 10),
        ("9; return 2 * 5; 9;", 10),
        ("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10),
        (
            "let f = fn(x) { return x; x + 10; }; f(10);",
            10,
        ),
        (
            "let f = fn(x) { let result = x + 10; return result; return 10; }; f(10);",
            20,
        ),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), int(expected), "in {source:?}");
    }
}

#[test]
fn test_return_stops_at_function_boundary() {
    let source = "
        let inner = fn() { return 1; };
        let outer = fn() { inner(); 2 };
        outer();
    ";
    assert_eq!(run(source), int(2));
}

#[test]
fn test_let_statements() {
    let cases = [
        ("let a = 5; a;", 5),
        ("let a = 5 * 5; a;", 25),
        ("let a = 5; let b = a; b;", 5),
        ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
        ("let a = 1; let a = a + 1; a", 2),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), int(expected), "in {source:?}");
    }
    assert_eq!(run("let a = 5;"), Object::Null);
}

#[test]
fn test_run_program_reports_how_evaluation_ended() {
    let program_for = |source: &str| monkey_parse::parse(monkey_lexer::Lexer::new(source)).program;
    let interpreter = Interpreter::new();
    let env = Environment::new();

    assert_eq!(interpreter.run_program(&program_for("let a = 5;"), &env), None);
    assert_eq!(interpreter.run_program(&program_for(""), &env), None);
    assert_eq!(
        interpreter.run_program(&program_for("return 5; let b = 1;"), &env),
        Some(int(5))
    );
    assert_eq!(env.get("b"), None);
    assert_eq!(
        interpreter.run_program(&program_for("let c = 1; c"), &env),
        Some(int(1))
    );
    assert!(matches!(
        interpreter.run_program(&program_for("let d = -true;"), &env),
        Some(Object::Error(_))
    ));
}

#[test]
fn test_function_object() {
    let Object::Function(func) = run("fn(x) { x + 2; };") else {
        panic!("expected a function");
    };
    assert_eq!(func.params.len(), 1);
    assert_eq!(func.params[0].as_str(), "x");
    assert_eq!(func.body.to_string(), "{ (x + 2) }");
}

#[test]
fn test_function_application() {
    let cases = [
        ("let identity = fn(x) { x; }; identity(5);", 5),
        ("let identity = fn(x) { return x; }; identity(5);", 5),
        ("let double = fn(x) { x * 2; }; double(5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
        ("let add = fn(x, y) { x + y }; add(2, 3);", 5),
        ("fn(x) { x; }(5)", 5),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), int(expected), "in {source:?}");
    }
}

#[test]
fn test_closures() {
    let source = "
        let newAdder = fn(x) { fn(y) { x + y } };
        let addTwo = newAdder(2);
        addTwo(3);
    ";
    assert_eq!(run(source), int(5));
}

#[test]
fn test_parameters_shadow_without_leaking() {
    let source = "
        let x = 10;
        let f = fn(x) { x * 2 };
        f(1) + x;
    ";
    assert_eq!(run(source), int(12));
}

#[test]
fn test_closures_see_later_bindings_in_their_frame() {
    let source = "
        let f = fn() { later };
        let later = 7;
        f();
    ";
    assert_eq!(run(source), int(7));
}

#[test]
fn test_recursion() {
    let source = "
        let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };
        fib(15);
    ";
    assert_eq!(run(source), int(610));
}

#[test]
fn test_higher_order_functions() {
    let source = "
        let map = fn(arr, f) {
            let iter = fn(arr, acc) {
                if (len(arr) == 0) { acc } else { iter(rest(arr), push(acc, f(first(arr)))) }
            };
            iter(arr, []);
        };
        let reduce = fn(arr, initial, f) {
            let iter = fn(arr, result) {
                if (len(arr) == 0) { result } else { iter(rest(arr), f(result, first(arr))) }
            };
            iter(arr, initial);
        };
        let doubled = map([1, 2, 3, 4], fn(x) { x * 2 });
        reduce(doubled, 0, fn(acc, x) { acc + x });
    ";
    assert_eq!(run(source), int(20));
}

#[test]
fn test_string_literals_and_concatenation() {
    assert_eq!(run(r#""Hello World!""#), Object::string("Hello World!"));
    assert_eq!(
        run(r#""Hello" + " " + "World!""#),
        Object::string("Hello World!")
    );
}

#[test]
fn test_builtin_functions() {
    let cases = [
        (r#"len("")"#, int(0)),
        (r#"len("four")"#, int(4)),
        (r#"len("hello")"#, int(5)),
        ("len([1, 2, 3])", int(3)),
        ("len([])", int(0)),
        ("first([1, 2, 3])", int(1)),
        ("first([])", Object::Null),
        ("last([1, 2, 3])", int(3)),
        ("last([])", Object::Null),
        ("rest([1, 2, 3])", Object::array(vec![int(2), int(3)])),
        ("rest([])", Object::Null),
        ("push([], 1)", Object::array(vec![int(1)])),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), expected, "in {source:?}");
    }
}

#[test]
fn test_builtins_can_be_shadowed() {
    assert_eq!(run("let len = fn(x) { 42 }; len([1])"), int(42));
    assert_eq!(run("len").to_string(), "builtin function");
}

#[test]
fn test_puts() {
    let (result, output) = run_with_output(r#"puts("hello", 1 + 2, [1, true]); puts()"#);
    assert_eq!(result, Object::Null);
    assert_eq!(output, "hello\n3\n[1, true]\n");
}

#[test]
fn test_array_literals() {
    assert_eq!(
        run("[1, 2 * 2, 3 + 3]"),
        Object::array(vec![int(1), int(4), int(6)])
    );
}

#[test]
fn test_array_index_expressions() {
    let cases = [
        ("[1, 2, 3][0]", int(1)),
        ("[1, 2, 3][1]", int(2)),
        ("[1, 2, 3][2]", int(3)),
        ("let i = 0; [1][i];", int(1)),
        ("[1, 2, 3][1 + 1];", int(3)),
        ("let myArray = [1, 2, 3]; myArray[2];", int(3)),
        (
            "let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];",
            int(6),
        ),
        ("let myArray = [1, 2, 3]; let i = myArray[0]; myArray[i]", int(2)),
        ("[1, 2, 3][3]", Object::Null),
        ("[1, 2, 3][-1]", Object::Null),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), expected, "in {source:?}");
    }
}

#[test]
fn test_push_does_not_mutate() {
    assert_eq!(
        run("let a = [1]; let b = push(a, 2); [len(a), len(b)]"),
        Object::array(vec![int(1), int(2)])
    );
}

#[test]
fn test_hash_literals() {
    let source = r#"
        let two = "two";
        {
            "one": 10 - 9,
            two: 1 + 1,
            "thr" + "ee": 6 / 2,
            4: 4,
            true: 5,
            false: 6
        }
    "#;
    let Object::Hash(hash) = run(source) else {
        panic!("expected a hash");
    };

    let expected = [
        (Object::string("one"), 1),
        (Object::string("two"), 2),
        (Object::string("three"), 3),
        (int(4), 4),
        (Object::Boolean(true), 5),
        (Object::Boolean(false), 6),
    ];
    assert_eq!(hash.len(), expected.len());
    for (key, value) in expected {
        assert_eq!(hash.get(&key.hash_key().unwrap()), Some(&int(value)));
    }
}

#[test]
fn test_hash_duplicate_keys_last_wins() {
    assert_eq!(run(r#"{"a": 1, "a": 2}["a"]"#), int(2));
    let Object::Hash(hash) = run(r#"{"a": 1, "b": 2, "a": 3}"#) else {
        panic!("expected a hash");
    };
    assert_eq!(hash.len(), 2);
}

#[test]
fn test_hash_index_expressions() {
    let cases = [
        (r#"{"foo": 5}["foo"]"#, int(5)),
        (r#"{"foo": 5}["bar"]"#, Object::Null),
        (r#"let key = "foo"; {"foo": 5}[key]"#, int(5)),
        (r#"{}["foo"]"#, Object::Null),
        ("{5: 5}[5]", int(5)),
        ("{true: 5}[true]", int(5)),
        ("{true: 1}[true]", int(1)),
        ("{false: 5}[false]", int(5)),
        (r#"{"a": 1}["a"]"#, int(1)),
        (r#"{"ab": 1}["a" + "b"]"#, int(1)),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), expected, "in {source:?}");
    }
}

#[test]
fn test_hash_inspect_contains_every_pair() {
    let rendered = run(r#"{"a": 1, "b": true}"#).to_string();
    assert!(rendered.starts_with('{') && rendered.ends_with('}'));
    let mut pairs: Vec<&str> = rendered[1..rendered.len() - 1].split(", ").collect();
    pairs.sort_unstable();
    assert_eq!(pairs, vec!["a: 1", "b: true"]);
}

#[test]
fn test_persistent_environment_across_programs() {
    let interpreter = Interpreter::with_print_handler(crate::buffer_handler());
    let env = Environment::new();
    let parse = |source: &str| monkey_parse::parse(monkey_lexer::Lexer::new(source)).program;

    interpreter.eval_program(&parse("let counter = fn(x) { x + 1 };"), &env);
    interpreter.eval_program(&parse("let a = counter(1);"), &env);
    assert_eq!(interpreter.eval_program(&parse("counter(a)"), &env), int(3));
}

#[test]
fn test_macros_run_before_evaluation() {
    let (result, output) = run_with_output(
        r#"
        let unless = macro(cond, cons, alt) {
            quote(if (!(unquote(cond))) { unquote(cons) } else { unquote(alt) })
        };
        unless(10 > 5, puts("not greater"), puts("greater"));
        "#,
    );
    assert_eq!(result, Object::Null);
    assert_eq!(output, "greater\n");
}

#[test]
fn test_unbound_macro_literal_is_not_callable() {
    assert_eq!(
        super::run_error("let f = fn() { let m = macro() { quote(1) }; m() }; f()"),
        "not a function: MACRO"
    );
}
