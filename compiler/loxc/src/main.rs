//! `lox` command: scan a script, or start a prompt when no script is given.

use std::io;
use std::path::Path;

use loxc::{init_tracing, run_file, run_prompt, EXIT_USAGE};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let result = match args.as_slice() {
        [] => run_prompt(io::stdin().lock(), &mut stdout.lock(), &mut stderr.lock()).map(|()| 0),
        [path] => run_file(Path::new(path), &mut stdout.lock(), &mut stderr.lock())
            .map(|outcome| outcome.exit_code()),
        _ => {
            eprintln!("Usage: lox [script]");
            std::process::exit(EXIT_USAGE);
        }
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
