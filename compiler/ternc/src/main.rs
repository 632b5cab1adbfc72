//! Tern CLI

use std::process::ExitCode;

use ternc::cli::{parse_args, usage, Command};
use ternc::commands::{lex_file, parse_file, run_file, run_repl};

fn main() -> ExitCode {
    ternc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(message) => {
            eprintln!("{message}");
            eprintln!();
            eprintln!("{}", usage());
            return ExitCode::FAILURE;
        }
    };

    let options = &invocation.options;
    let result = match &invocation.command {
        Command::Run(path) => run_file(path, options),
        Command::Repl => {
            run_repl(options);
            Ok(())
        }
        Command::Parse(path) => parse_file(path),
        Command::Lex(path) => lex_file(path),
        Command::Help => {
            println!("{}", usage());
            Ok(())
        }
        Command::Version => {
            println!("Tern {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            eprint!("{report}");
            if !report.ends_with('\n') {
                eprintln!();
            }
            ExitCode::FAILURE
        }
    }
}
