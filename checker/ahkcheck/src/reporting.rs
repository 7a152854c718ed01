//! Diagnostic Rendering
//!
//! Converts structural [`ScanError`] values into user-facing
//! [`Diagnostic`] messages. This separates the "what went wrong"
//! (`ScanError`) from "how to display it" (`Diagnostic`): the scanner
//! stays free of paths and prose, and callers get structured fields to
//! assert on.

use ahk_diagnostic::{Diagnostic, ErrorCode};
use ahk_scan_core::{scan, ScanError, ScanErrorKind};

/// Every structural diagnostic carries this hint: the scan is a fallback,
/// and the interpreter remains the authority when one is available.
pub const INTERPRETER_HINT: &str = "provide an AutoHotkey interpreter via the \
    AUTOHOTKEY_EXECUTABLE, AUTOHOTKEY_PATH, or AHK_EXECUTABLE environment \
    variables for definitive validation";

/// The error code for a scan failure class.
fn error_code(kind: &ScanErrorKind) -> ErrorCode {
    match kind {
        ScanErrorKind::UnterminatedString => ErrorCode::E0001,
        ScanErrorKind::UnterminatedBlockComment => ErrorCode::E0002,
        ScanErrorKind::UnmatchedCloser { .. } => ErrorCode::E0003,
        ScanErrorKind::MismatchedDelimiter { .. } => ErrorCode::E0004,
        ScanErrorKind::UnclosedDelimiter { .. } => ErrorCode::E0005,
    }
}

/// Short label text at the primary position.
fn primary_label(kind: &ScanErrorKind) -> String {
    match kind {
        ScanErrorKind::UnterminatedString => "string literal still open at end of input".into(),
        ScanErrorKind::UnterminatedBlockComment => {
            "block comment still open at end of input".into()
        }
        ScanErrorKind::UnmatchedCloser { found } => {
            format!("stray `{}`", found.close())
        }
        ScanErrorKind::MismatchedDelimiter { opened, found, .. } => {
            format!("expected `{}`, found `{}`", opened.close(), found.close())
        }
        ScanErrorKind::UnclosedDelimiter { opened } => {
            format!("`{}` opened here is never closed", opened.open())
        }
    }
}

/// Render a scan failure as a diagnostic anchored in `path`.
///
/// The path is a display label only; no file access happens here.
pub fn scan_error_to_diagnostic(error: &ScanError, path: &str) -> Diagnostic {
    let mut diagnostic = Diagnostic::error(error_code(&error.kind))
        .with_message(error.to_string())
        .with_label(path, error.position, primary_label(&error.kind));

    if let ScanErrorKind::MismatchedDelimiter {
        opened, opened_at, ..
    } = error.kind
    {
        diagnostic = diagnostic.with_secondary_label(
            path,
            opened_at,
            format!("`{}` opened here", opened.open()),
        );
    }

    diagnostic.with_suggestion(INTERPRETER_HINT)
}

/// Validate one script's structure.
///
/// The harness-facing entry point: `path` is used only to label the
/// diagnostic, `text` is the full script contents already read by the
/// caller.
///
/// # Errors
///
/// Returns the single diagnostic for the first structural violation.
pub fn validate_source(path: &str, text: &str) -> Result<(), Diagnostic> {
    scan(text).map_err(|error| scan_error_to_diagnostic(&error, path))
}
