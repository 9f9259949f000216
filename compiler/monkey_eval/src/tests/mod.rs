//! Evaluator tests over parsed source.
//!
//! - `eval_tests`: expressions, statements, functions, builtins, collections
//! - `error_tests`: runtime errors and their propagation
//! - `operators_tests`: operator semantics on values
//! - `quote_tests`: `quote` and `unquote`

mod eval_tests;

use crate::{buffer_handler, define_macros, Environment, Interpreter, Object};

/// Parse, run the macro pass and evaluate `source` in a fresh environment.
fn run(source: &str) -> Object {
    run_with_output(source).0
}

/// Like `run`, also returning everything `puts` printed.
fn run_with_output(source: &str) -> (Object, String) {
    let output = monkey_parse::parse(monkey_lexer::Lexer::new(source));
    assert!(
        !output.has_errors(),
        "unexpected diagnostics for {source:?}: {:?}",
        output.diagnostics()
    );

    let interpreter = Interpreter::with_print_handler(buffer_handler());
    let env = Environment::new();
    let macros = Environment::new();
    let program = define_macros(output.program, &macros);
    let program = interpreter.expand_macros(program, &macros).unwrap();
    let result = interpreter.eval_program(&program, &env);
    (result, interpreter.print_handler().get_output())
}

/// The message of the error `source` evaluates to.
fn run_error(source: &str) -> String {
    match run(source) {
        Object::Error(err) => err.to_string(),
        other => panic!("expected an error from {source:?}, got {other:?}"),
    }
}
