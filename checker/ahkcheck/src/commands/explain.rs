//! The `--explain` command: extended help for an error code.

use ahk_diagnostic::ErrorCode;

/// Print the extended explanation for an error code such as `E0004`.
pub fn explain_error(code: &str) {
    let Some(code) = ErrorCode::parse(code) else {
        eprintln!("error: unknown error code '{code}'");
        eprintln!("Valid codes: E0001 through E0005.");
        std::process::exit(1);
    };

    println!("{code}: {}", code.description());
}
