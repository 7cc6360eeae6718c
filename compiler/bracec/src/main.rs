//! Brace CLI
//!
//! Debugging front end for the Brace lexer.

use std::process::ExitCode;

use bracec::commands::{lex_file, parse_lex_options};
use bracec::{init_tracing, CliError};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &[String]) -> Result<ExitCode, CliError> {
    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(ExitCode::SUCCESS);
    };

    match command.as_str() {
        "lex" => {
            let Some(path) = args.get(2) else {
                return Err(CliError::Usage(
                    "bracec lex <file> [--legacy-operators] [--stop-on-error]",
                ));
            };
            let options = parse_lex_options(args.get(3..).unwrap_or_default())?;
            let report = lex_file(path, &options)?;
            print!("{}", report.output);
            if report.has_errors() {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(ExitCode::SUCCESS)
        }
        "version" | "--version" | "-V" => {
            println!("bracec {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        other => Err(CliError::UnknownCommand(other.to_owned())),
    }
}

fn print_usage() {
    println!("Brace lexer driver");
    println!();
    println!("Usage: bracec <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize a file and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --legacy-operators   Peek-only '**', '==', '>=', '<=' (second char re-scanned)");
    println!("  --stop-on-error      Stop after the first error token");
    println!();
    println!("Exit status: 0 clean, 1 lexical errors, 2 usage or I/O error.");
    println!("Set RUST_LOG (e.g. RUST_LOG=brace_lexer=trace) for debug logging.");
}
