//! Single-pass structural scanner.
//!
//! Three-mode scan (code, string, block comment) over a sentinel-terminated
//! [`Cursor`], tracking a stack of open delimiters with their 1-based
//! line/column positions. The first structural violation halts the scan;
//! a clean pass over balanced input returns `Ok(())`.
//!
//! Only structure is checked. Everything without effect on bracket, string,
//! or comment balance (identifiers, numbers, operators, hotkey syntax) is
//! consumed as ordinary content, so the scan keeps working as the macro
//! syntax evolves.

use std::fmt;

use crate::{Cursor, SourceBuffer};

/// A 1-based line/column position in source text.
///
/// `\n` advances the line and resets the column. A bare `\r` resets the
/// column without advancing the line, matching how the validator has always
/// counted mixed line endings (classic-Mac `\r`-only files therefore stay
/// on line 1 -- a long-standing quirk kept for output stability).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Position of the first character in a source.
    pub const START: Position = Position { line: 1, column: 1 };

    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A bracket pair tracked for balance.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Delimiter {
    /// `(` ... `)`
    Paren,
    /// `[` ... `]`
    Bracket,
    /// `{` ... `}`
    Brace,
}

impl Delimiter {
    /// The opening character of this pair.
    pub fn open(self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Bracket => '[',
            Delimiter::Brace => '{',
        }
    }

    /// The closing character of this pair.
    pub fn close(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Bracket => ']',
            Delimiter::Brace => '}',
        }
    }

    /// Classify an opening bracket byte.
    fn from_open(byte: u8) -> Option<Self> {
        match byte {
            b'(' => Some(Delimiter::Paren),
            b'[' => Some(Delimiter::Bracket),
            b'{' => Some(Delimiter::Brace),
            _ => None,
        }
    }

    /// Classify a closing bracket byte.
    fn from_close(byte: u8) -> Option<Self> {
        match byte {
            b')' => Some(Delimiter::Paren),
            b']' => Some(Delimiter::Bracket),
            b'}' => Some(Delimiter::Brace),
            _ => None,
        }
    }
}

/// What kind of structural violation the scan found.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ScanErrorKind {
    /// End of input reached while inside a string literal.
    UnterminatedString,
    /// End of input reached while inside a `/* ... */` comment.
    UnterminatedBlockComment,
    /// A closing bracket appeared with no open bracket pending.
    UnmatchedCloser {
        /// The pair the stray closer belongs to.
        found: Delimiter,
    },
    /// A closing bracket did not match the nearest pending opener.
    MismatchedDelimiter {
        /// The pending opener that was popped.
        opened: Delimiter,
        /// Where that opener appeared.
        opened_at: Position,
        /// The pair the unexpected closer belongs to.
        found: Delimiter,
    },
    /// Input exhausted with a pending opener never closed.
    UnclosedDelimiter {
        /// The most recently opened unmatched bracket.
        opened: Delimiter,
    },
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            ScanErrorKind::UnterminatedBlockComment => write!(f, "unterminated block comment"),
            ScanErrorKind::UnmatchedCloser { found } => write!(
                f,
                "closing delimiter `{}` without a matching opening delimiter",
                found.close()
            ),
            ScanErrorKind::MismatchedDelimiter {
                opened,
                opened_at,
                found,
            } => write!(
                f,
                "mismatched delimiters: expected `{}` to close `{}` opened at line {}, \
                 column {}, but found `{}`",
                opened.close(),
                opened.open(),
                opened_at.line,
                opened_at.column,
                found.close()
            ),
            ScanErrorKind::UnclosedDelimiter { opened } => {
                write!(f, "unclosed delimiter `{}`", opened.open())
            }
        }
    }
}

/// A structural violation with the position where it was detected.
///
/// For [`ScanErrorKind::UnclosedDelimiter`] the position is where the
/// unmatched opener appeared; for everything else it is where the scan
/// stopped. Exactly one error is produced per failing scan.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub position: Position,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ScanError {}

/// Scan mode. Exactly one is active at any position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    Code,
    InString,
    InBlockComment,
}

/// A pending opener on the delimiter stack.
#[derive(Clone, Copy, Debug)]
struct OpenDelimiter {
    delimiter: Delimiter,
    position: Position,
}

/// Check the structural balance of one source text.
///
/// Single left-to-right pass, constant extra memory aside from the
/// delimiter stack. Never panics; the result is a pure function of the
/// input.
///
/// # Errors
///
/// Returns the first [`ScanError`] encountered: an unterminated string or
/// block comment, a stray or mismatched closer, or (after the pass) the
/// most recently opened bracket left unclosed.
pub fn scan(source: &str) -> Result<(), ScanError> {
    let buffer = SourceBuffer::new(source);
    StructureScanner::new(buffer.cursor()).run()
}

/// The scan state machine: cursor, mode, delimiter stack, and position.
struct StructureScanner<'a> {
    cursor: Cursor<'a>,
    state: State,
    stack: Vec<OpenDelimiter>,
    line: u32,
    column: u32,
}

impl<'a> StructureScanner<'a> {
    fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            state: State::Code,
            stack: Vec::new(),
            line: 1,
            column: 1,
        }
    }

    fn run(mut self) -> Result<(), ScanError> {
        while !self.cursor.is_eof() {
            match self.state {
                State::Code => self.code_step()?,
                State::InString => self.string_step(),
                State::InBlockComment => self.comment_step(),
            }
        }
        self.finish()
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// `\n` starts a new line; `\r` only rewinds the column.
    fn line_break(&mut self, byte: u8) {
        if byte == b'\n' {
            self.line += 1;
        }
        self.column = 1;
        self.cursor.advance();
    }

    /// Consume one ordinary character: full UTF-8 width, one column.
    fn ordinary_char(&mut self) {
        self.cursor.advance_char();
        self.column += 1;
    }

    fn code_step(&mut self) -> Result<(), ScanError> {
        let byte = self.cursor.current();
        match byte {
            b'"' => {
                self.state = State::InString;
                self.cursor.advance();
                self.column += 1;
            }
            b'/' if self.cursor.peek() == b'*' => {
                self.state = State::InBlockComment;
                self.cursor.advance_n(2);
                self.column += 2;
            }
            b';' => {
                // Comment content is structurally inert; the line break
                // itself is handled by the next step.
                self.column += self.cursor.skip_to_line_break();
            }
            b'(' | b'[' | b'{' => {
                if let Some(delimiter) = Delimiter::from_open(byte) {
                    self.stack.push(OpenDelimiter {
                        delimiter,
                        position: self.position(),
                    });
                }
                self.cursor.advance();
                self.column += 1;
            }
            b')' | b']' | b'}' => {
                if let Some(found) = Delimiter::from_close(byte) {
                    self.close_delimiter(found)?;
                }
                self.cursor.advance();
                self.column += 1;
            }
            b'\n' | b'\r' => self.line_break(byte),
            _ => self.ordinary_char(),
        }
        Ok(())
    }

    /// Pop the nearest opener for `found`, failing on an empty stack or a
    /// pair mismatch.
    fn close_delimiter(&mut self, found: Delimiter) -> Result<(), ScanError> {
        let Some(open) = self.stack.pop() else {
            return Err(ScanError {
                kind: ScanErrorKind::UnmatchedCloser { found },
                position: self.position(),
            });
        };
        if open.delimiter != found {
            return Err(ScanError {
                kind: ScanErrorKind::MismatchedDelimiter {
                    opened: open.delimiter,
                    opened_at: open.position,
                    found,
                },
                position: self.position(),
            });
        }
        Ok(())
    }

    fn string_step(&mut self) {
        match self.cursor.current() {
            b'"' => {
                if self.cursor.peek() == b'"' {
                    // Doubled quote: a literal `"` inside the string.
                    self.cursor.advance_n(2);
                    self.column += 2;
                } else {
                    self.state = State::Code;
                    self.cursor.advance();
                    self.column += 1;
                }
            }
            byte @ (b'\n' | b'\r') => self.line_break(byte),
            _ => self.ordinary_char(),
        }
    }

    fn comment_step(&mut self) {
        match self.cursor.current() {
            b'*' if self.cursor.peek() == b'/' => {
                self.state = State::Code;
                self.cursor.advance_n(2);
                self.column += 2;
            }
            byte @ (b'\n' | b'\r') => self.line_break(byte),
            _ => self.ordinary_char(),
        }
    }

    /// End-of-input checks: an open construct wins over an open bracket.
    fn finish(mut self) -> Result<(), ScanError> {
        match self.state {
            State::InString => Err(ScanError {
                kind: ScanErrorKind::UnterminatedString,
                position: self.position(),
            }),
            State::InBlockComment => Err(ScanError {
                kind: ScanErrorKind::UnterminatedBlockComment,
                position: self.position(),
            }),
            State::Code => match self.stack.pop() {
                Some(open) => Err(ScanError {
                    kind: ScanErrorKind::UnclosedDelimiter {
                        opened: open.delimiter,
                    },
                    position: open.position,
                }),
                None => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests;
