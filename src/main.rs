//! CLI tool to scan simpl source files.

use std::fs;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed by an embedding process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: simpl <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  tokens  Scan file(s) and print the token listing");
        eprintln!("  check   Check that file(s) scan without errors");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  simpl tokens main.simpl");
        eprintln!("  simpl check main.simpl lib.simpl");
        eprintln!();
        eprintln!("Set RUST_LOG=debug for scanner diagnostics.");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if !matches!(command, "tokens" | "check") {
        eprintln!("Unknown command: {command}");
        return ExitCode::from(2);
    }

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match simpl::Scanner::new(&content).scan() {
            Ok(output) => {
                if command == "tokens" {
                    print!("{}", simpl::format_tokens(&output.lexemes));
                } else {
                    let tokens = output.lexemes.len();
                    let lines = output.lines;
                    eprintln!("{path}: ok ({tokens} token(s), {lines} line(s))");
                }
            }
            Err(e) => {
                debug!(path = %path, kind = ?e.kind, "scan failed");
                eprintln!("{path}: {e}");
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
