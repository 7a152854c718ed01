//! Standalone structural scanner for AutoHotkey v2 source text.
//!
//! The production workflow for AutoHotkey scripts expects the official
//! interpreter to parse a script authoritatively. On machines without an
//! interpreter (Linux CI, containers) this crate provides a conservative
//! fallback: a single-pass scan that checks the structure a truncated edit
//! or a careless paste most often breaks — string termination, block
//! comment termination, and bracket balance.
//!
//! The scan is deliberately not a grammar. Identifiers, numbers, and
//! operators have no structural effect and are skipped, which keeps the
//! check robust as the macro syntax evolves.
//!
//! # Layers
//!
//! - [`SourceBuffer`]: sentinel-terminated byte buffer over the source.
//! - [`Cursor`]: zero-cost byte cursor with safe lookahead.
//! - [`scan`]: the structural pass, producing `Ok(())` or one
//!   [`ScanError`] with a 1-based line/column position.

mod cursor;
mod scanner;
mod source_buffer;

pub use cursor::Cursor;
pub use scanner::{scan, Delimiter, Position, ScanError, ScanErrorKind};
pub use source_buffer::SourceBuffer;
