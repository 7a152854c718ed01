use pretty_assertions::assert_eq;

use super::*;

fn scan_err(source: &str) -> ScanError {
    match scan(source) {
        Err(error) => error,
        Ok(()) => panic!("expected scan of {source:?} to fail"),
    }
}

// === Clean Sources ===

#[test]
fn empty_source_is_balanced() {
    assert_eq!(scan(""), Ok(()));
}

#[test]
fn balanced_script_passes() {
    let source = "msg := \"Hello\"\nif (msg != \"\") {\n    MsgBox msg\n}";
    assert_eq!(scan(source), Ok(()));
}

#[test]
fn nested_delimiters_pass() {
    assert_eq!(scan("fn(arr[i], {key: (1 + 2)})"), Ok(()));
}

#[test]
fn plain_text_has_no_structure() {
    assert_eq!(scan("Send hello world 123 += <>"), Ok(()));
}

// === Strings ===

#[test]
fn doubled_quote_is_one_string() {
    assert_eq!(scan("x := \"a\"\"b\""), Ok(()));
}

#[test]
fn string_may_span_lines() {
    assert_eq!(scan("x := \"first\nsecond\""), Ok(()));
}

#[test]
fn brackets_inside_string_are_content() {
    assert_eq!(scan("x := \"([{\""), Ok(()));
}

#[test]
fn unterminated_string_reported_at_end_of_input() {
    let error = scan_err("MsgBox \"Hello");
    assert_eq!(error.kind, ScanErrorKind::UnterminatedString);
    // Column is one past the 13-character input.
    assert_eq!(error.position, Position::new(1, 14));
}

#[test]
fn doubled_quote_at_end_keeps_string_open() {
    let error = scan_err("x := \"a\"\"");
    assert_eq!(error.kind, ScanErrorKind::UnterminatedString);
    assert_eq!(error.position, Position::new(1, 10));
}

#[test]
fn quote_as_last_character_closes_string() {
    assert_eq!(scan("x := \"a\""), Ok(()));
}

// === Comments ===

#[test]
fn line_comment_content_is_inert() {
    assert_eq!(scan("; stray ) ] } \" /* inside comment\nx := 1"), Ok(()));
}

#[test]
fn line_comment_at_end_of_input() {
    assert_eq!(scan("x := 1 ; trailing note"), Ok(()));
}

#[test]
fn block_comment_may_contain_quotes() {
    assert_eq!(scan("/* \"not a string\nstill \"comment\" */ x := 1"), Ok(()));
}

#[test]
fn block_comment_may_contain_brackets() {
    assert_eq!(scan("/* ) } ] ( */"), Ok(()));
}

#[test]
fn unterminated_block_comment_reported_at_end_of_input() {
    let error = scan_err("/* never closed");
    assert_eq!(error.kind, ScanErrorKind::UnterminatedBlockComment);
    assert_eq!(error.position, Position::new(1, 16));
}

#[test]
fn slash_without_star_is_ordinary() {
    assert_eq!(scan("x := a / b"), Ok(()));
}

#[test]
fn trailing_slash_is_ordinary() {
    assert_eq!(scan("x := 1 /"), Ok(()));
}

// === Delimiter Balance ===

#[test]
fn lone_closer_is_unmatched() {
    let error = scan_err(")");
    assert_eq!(
        error.kind,
        ScanErrorKind::UnmatchedCloser {
            found: Delimiter::Paren
        }
    );
    assert_eq!(error.position, Position::new(1, 1));
}

#[test]
fn mismatched_pair_reports_opener_position() {
    let error = scan_err("(]");
    assert_eq!(
        error.kind,
        ScanErrorKind::MismatchedDelimiter {
            opened: Delimiter::Paren,
            opened_at: Position::new(1, 1),
            found: Delimiter::Bracket,
        }
    );
    assert_eq!(error.position, Position::new(1, 2));
}

#[test]
fn unclosed_brace_reported_at_opening_position() {
    let error = scan_err("if (true) {\n    MsgBox \"Hello\"");
    assert_eq!(
        error.kind,
        ScanErrorKind::UnclosedDelimiter {
            opened: Delimiter::Brace
        }
    );
    assert_eq!(error.position, Position::new(1, 11));
}

#[test]
fn most_recently_opened_bracket_is_reported() {
    let error = scan_err("((");
    assert_eq!(
        error.kind,
        ScanErrorKind::UnclosedDelimiter {
            opened: Delimiter::Paren
        }
    );
    assert_eq!(error.position, Position::new(1, 2));
}

#[test]
fn closer_after_balanced_pair_is_unmatched() {
    let error = scan_err("()]");
    assert_eq!(
        error.kind,
        ScanErrorKind::UnmatchedCloser {
            found: Delimiter::Bracket
        }
    );
    assert_eq!(error.position, Position::new(1, 3));
}

#[test]
fn unterminated_construct_wins_over_open_bracket() {
    // The string diagnostic fires even though `(` is also pending.
    let error = scan_err("(\"abc");
    assert_eq!(error.kind, ScanErrorKind::UnterminatedString);
}

// === Position Tracking ===

#[test]
fn positions_advance_across_lines() {
    let error = scan_err("x := 1\ny := (2");
    assert_eq!(error.position, Position::new(2, 6));
}

#[test]
fn bare_carriage_return_resets_column_only() {
    // Classic-Mac line endings never advance the line counter.
    let error = scan_err("abc\r(");
    assert_eq!(error.position, Position::new(1, 1));
}

#[test]
fn crlf_counts_as_one_line() {
    let error = scan_err("abc\r\n(");
    assert_eq!(error.position, Position::new(2, 1));
}

#[test]
fn multibyte_character_occupies_one_column() {
    let error = scan_err("é(");
    assert_eq!(error.position, Position::new(1, 2));
}

#[test]
fn comment_skip_keeps_column_in_characters() {
    // The comment body contains multi-byte characters; the opener after
    // the newline is what gets reported.
    let error = scan_err("; héllo wörld\n(");
    assert_eq!(error.position, Position::new(2, 1));
}

#[test]
fn newline_inside_string_advances_line() {
    let error = scan_err("\"a\nb");
    assert_eq!(error.kind, ScanErrorKind::UnterminatedString);
    assert_eq!(error.position, Position::new(2, 2));
}

// === Messages ===

#[test]
fn mismatched_message_embeds_opener_location() {
    let error = scan_err("(]");
    assert_eq!(
        error.to_string(),
        "mismatched delimiters: expected `)` to close `(` opened at line 1, \
         column 1, but found `]`"
    );
}

#[test]
fn unmatched_closer_message_names_the_closer() {
    let error = scan_err("}");
    assert_eq!(
        error.to_string(),
        "closing delimiter `}` without a matching opening delimiter"
    );
}

#[test]
fn unclosed_message_names_the_opener() {
    let error = scan_err("[");
    assert_eq!(error.to_string(), "unclosed delimiter `[`");
}

// === Properties ===

#[allow(
    clippy::ignored_unit_patterns,
    reason = "proptest macros internally match on unit"
)]
mod properties {
    use proptest::prelude::*;

    use crate::scan;

    proptest! {
        #[test]
        fn scan_is_total_and_deterministic(source in ".*") {
            let first = scan(&source);
            let second = scan(&source);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn structurally_inert_content_passes(
            source in "[a-zA-Z0-9 \t.,:=+!<>_-]*"
        ) {
            prop_assert!(scan(&source).is_ok());
        }

        #[test]
        fn balanced_wrapping_preserves_success(
            body in "[a-z0-9 ]*",
            depth in 0usize..6,
        ) {
            let mut source = body;
            for _ in 0..depth {
                source = format!("({source})");
            }
            prop_assert!(scan(&source).is_ok());
        }

        #[test]
        fn quoted_content_passes(content in "[a-z )(}{\\]\\[]*") {
            let source = format!("x := \"{content}\"");
            prop_assert!(scan(&source).is_ok());
        }
    }
}
