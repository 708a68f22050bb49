/// Lexing and parsing errors.
///
/// Defines every failure the front end can report: unexpected characters,
/// unterminated strings, oversized literals, and grammar violations. Each
/// error carries the line and column where it was detected.
pub mod parse_error;
/// User-facing diagnostics.
///
/// A diagnostic is the rendered form of an error: a kind, a message, a
/// position, and an underline width. This module also formats diagnostics
/// with a source excerpt for terminal output.
pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use parse_error::ParseError;
