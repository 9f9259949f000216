//! Monkey interpreter CLI.

use std::io;
use std::process::ExitCode;

use monkeyc::commands::{prompt, run_file, run_repl};
use monkeyc::{init_tracing, Session};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        None | Some("repl") => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            match run_repl(&Session::new(), stdin.lock(), &mut stdout, &prompt()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("error: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        Some("run") => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey run <file.monkey>");
                return ExitCode::FAILURE;
            };
            run_file(path)
        }
        Some("help" | "--help" | "-h") => {
            print_usage();
            ExitCode::SUCCESS
        }
        Some(other) => {
            eprintln!("Unknown command: {other}");
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Monkey interpreter");
    println!();
    println!("Usage: monkey [command]");
    println!();
    println!("Commands:");
    println!("  repl          Start the interactive prompt (default)");
    println!("  run <file>    Evaluate a source file");
    println!("  help          Show this message");
    println!();
    println!("Environment:");
    println!("  MONKEY_PROMPT   Prompt string (default \">> \")");
    println!("  RUST_LOG        Enable tracing output, e.g. RUST_LOG=monkey_eval=debug");
}
