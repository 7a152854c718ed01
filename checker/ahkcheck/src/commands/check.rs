//! The `check` command: validate the structure of one or more scripts.

use std::io::IsTerminal;

use ahk_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};

use super::read_file;
use crate::reporting::validate_source;

/// Validate one script, emitting its diagnostic on failure.
///
/// Returns `true` when the source is structurally clean. Split out from
/// [`check_files`] so tests can drive it with an in-memory writer.
pub fn check_source<W: std::io::Write>(
    path: &str,
    text: &str,
    emitter: &mut TerminalEmitter<W>,
) -> bool {
    tracing::debug!(path, bytes = text.len(), "scanning script structure");
    match validate_source(path, text) {
        Ok(()) => true,
        Err(diagnostic) => {
            emitter.emit(&diagnostic);
            false
        }
    }
}

/// Check each file in order, report every failure, and exit non-zero if
/// any file is malformed.
///
/// Clean files print a one-line `OK:` confirmation so CI logs show what
/// was actually covered.
pub fn check_files(paths: &[String]) {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::with_color_mode(std::io::stderr(), ColorMode::Auto, is_tty);

    let mut error_count = 0;
    for path in paths {
        let content = read_file(path);
        if check_source(path, &content, &mut emitter) {
            println!("OK: {path}");
        } else {
            error_count += 1;
        }
    }

    if error_count > 0 {
        emitter.emit_summary(error_count, 0);
        emitter.flush();
        std::process::exit(1);
    }
}
