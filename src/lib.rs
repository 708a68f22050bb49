//! # nokch
//!
//! nokch is the front end of a small interpreted scripting language, written
//! in Rust. It turns source text into typed tokens, and tokens into an
//! abstract syntax tree of expressions and assignments, reporting malformed
//! input as positioned diagnostics.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::{debug, trace};

use crate::{
    ast::Ast,
    error::{Diagnostic, ParseError},
    frontend::{lexer::Lexer, parser::Parser, token::Token},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Ast` enum and the operator enums that represent
/// the syntactic structure of source code as a tree. The AST is built by the
/// parser and is what a later evaluation phase would consume.
///
/// # Responsibilities
/// - Defines node types for literals, variables, unary and binary operations,
///   and assignments.
/// - Provides constructors and a compact prefix rendering for trees.
pub mod ast;
/// Provides error and diagnostic types for the front end.
///
/// This module defines all errors that can be raised during lexing or parsing
/// and the diagnostic form they are reported in, including error kinds,
/// messages, and source positions.
///
/// # Responsibilities
/// - Defines the error enum for every failure mode of the lexer and parser.
/// - Attaches line and column numbers and an underline width.
/// - Renders diagnostics with a source excerpt.
pub mod error;
/// Converts source text into an AST.
///
/// This module ties together the token definitions, the lexer, and the
/// parser.
///
/// # Responsibilities
/// - Produces a finite token sequence ending in a single end-of-input token.
/// - Parses that sequence into top-level statements by precedence climbing.
/// - Reports the first malformed token or grammar violation.
pub mod frontend;
/// General utilities around source files.
///
/// # Responsibilities
/// - Validate source file paths and extensions.
/// - Decide how a file is named in diagnostics.
pub mod util;

/// Splits `source` into tokens.
///
/// The result always ends with exactly one end-of-input token.
///
/// # Errors
/// Returns the first lexical error: an unexpected character or an
/// unterminated string.
///
/// # Examples
/// ```
/// use nokch::{frontend::token::TokenKind, tokenize};
///
/// let tokens = tokenize("else   if").unwrap();
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].kind, TokenKind::ElseIf);
/// assert_eq!(tokens[1].kind, TokenKind::Eof);
///
/// assert!(tokenize("'abc").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let tokens = Lexer::new(source).tokenize()?;
    debug!(count = tokens.len(), "tokenized source");
    trace!(?tokens);
    Ok(tokens)
}

/// Parses a token sequence into top-level statements.
///
/// # Errors
/// Returns the first grammar violation.
pub fn parse_tokens(tokens: &[Token]) -> Result<Vec<Ast>, ParseError> {
    let program = Parser::new(tokens).parse_program()?;
    debug!(statements = program.len(), "parsed program");
    trace!(?program);
    Ok(program)
}

/// Tokenizes and parses `source` in one step.
///
/// # Errors
/// Returns the first lexical or grammar error.
///
/// # Examples
/// ```
/// use nokch::parse_source;
///
/// let program = parse_source("1 + 2 * 3").unwrap();
/// assert_eq!(program[0].to_string(), "(+ 1 (* 2 3))");
///
/// let program = parse_source("1 - 2 - 3").unwrap();
/// assert_eq!(program[0].to_string(), "(- (- 1 2) 3)");
///
/// assert!(parse_source("x = (1 + 2").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Vec<Ast>, ParseError> {
    let tokens = tokenize(source)?;
    parse_tokens(&tokens)
}

/// Runs the front end over one source file.
///
/// `file_name` is used only for logging; the caller renders the returned
/// diagnostic with [`Diagnostic::render`].
///
/// # Errors
/// Returns a single `SYNTAX` diagnostic for the first problem found.
///
/// # Examples
/// ```
/// use nokch::{error::DiagnosticKind, run};
///
/// assert_eq!(run("ok.nkch", "x += 1;").unwrap().len(), 1);
///
/// let diagnostic = run("bad.nkch", "x = 1 $").unwrap_err();
/// assert_eq!(diagnostic.kind, DiagnosticKind::Syntax);
/// assert_eq!((diagnostic.line, diagnostic.column), (1, 6));
/// ```
pub fn run(file_name: &str, source: &str) -> Result<Vec<Ast>, Diagnostic> {
    debug!(file = file_name, bytes = source.len(), "running front end");
    parse_source(source).map_err(|error| error.to_diagnostic())
}
