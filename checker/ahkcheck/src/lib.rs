//! Structural validation for AutoHotkey v2 scripts.
//!
//! The authoritative check for an AutoHotkey script is the interpreter
//! itself: AutoHotkey parses the whole script before running its
//! auto-execute section, so a load under `/ErrorStdOut` catches any syntax
//! regression. Test environments without an interpreter fall back to the
//! structural scan in `ahk_scan_core`, surfaced here as diagnostics.
//!
//! Use [`reporting::validate_source`] from a harness, or the `ahkcheck`
//! binary from a shell or CI step.

pub mod commands;
pub mod reporting;
