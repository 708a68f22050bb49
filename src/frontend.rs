/// Token definitions.
///
/// Declares [`token::TokenKind`], the closed set of lexical categories with
/// their literal payloads, and [`token::Token`], which adds the source
/// position.
pub mod token;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a number, string, identifier, keyword, operator or
/// delimiter, and finishes with a single end-of-input token.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column.
/// - Applies longest-match to multi-character operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs a list of statements, respecting operator precedence and
/// associativity.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Ast`] nodes.
/// - Validates the grammar, reporting the first error with its position.
pub mod parser;
