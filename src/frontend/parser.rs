/// The parser cursor and shared helpers.
///
/// Defines [`core::Parser`], its token lookahead, the `eat` check used for
/// required tokens, the nesting guard, and the expression entry point.
pub mod core;

/// Unary operator, exponentiation and operand parsing.
///
/// Handles prefix `+`, `-` and `~`, the `**` tier and the operands of the
/// grammar: literals, variables and parenthesised expressions.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the left-associative infix tiers from comparison down to
/// multiplication.
pub mod binary;

/// Statement parsing.
///
/// Implements assignments, expression statements and whole programs.
pub mod statement;

pub use self::core::{MAX_NESTING_DEPTH, ParseResult, Parser};
