//! ahkcheck CLI
//!
//! Structural validation for AutoHotkey v2 scripts in environments
//! without an interpreter.

use ahkcheck::commands::{check_files, explain_error};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: ahkcheck check <file.ahk> [more files...]");
                std::process::exit(1);
            }
            check_files(&args[2..]);
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: ahkcheck --explain <ERROR_CODE>");
                eprintln!("Example: ahkcheck --explain E0004");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("ahkcheck {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare script path is treated as `check`.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("ahk"))
            {
                check_files(&args[1..]);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

/// Logging is off unless `AHKCHECK_LOG` selects a filter (e.g. `debug`).
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("AHKCHECK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!("ahkcheck (structural validation for AutoHotkey v2 scripts)");
    println!();
    println!("Usage: ahkcheck <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <file.ahk>...  Validate script structure");
    println!("  --explain <code>     Explain an error code (e.g., E0004)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("The check is a conservative fallback for environments without an");
    println!("AutoHotkey interpreter: it verifies string, comment, and bracket");
    println!("balance, not the full grammar. When an interpreter is available,");
    println!("run the script under /ErrorStdOut for authoritative validation.");
    println!();
    println!("Environment:");
    println!("  AHKCHECK_LOG=<filter>  Enable tracing output (e.g., debug)");
    println!();
    println!("Examples:");
    println!("  ahkcheck check ExcelDatabookLayers.ahk");
    println!("  ahkcheck check macros/*.ahk");
    println!("  ahkcheck --explain E0005");
}
