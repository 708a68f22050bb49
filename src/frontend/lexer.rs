use logos::Logos;

use crate::{
    error::ParseError,
    frontend::token::{Token, TokenKind},
};

/// Single-pass tokenizer over a complete source text.
///
/// `Lexer` wraps the logos-generated scanner for [`TokenKind`] and adds what
/// the scanner alone does not provide: line and column positions on every
/// token, a terminal [`TokenKind::Eof`], and precise [`ParseError`]s for
/// malformed input.
///
/// The lexer is an iterator. It yields every token in source order, then the
/// end-of-input token exactly once, then nothing. After an error it yields
/// nothing further.
///
/// # Example
/// ```
/// use nokch::frontend::{lexer::Lexer, token::TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("x **= 2")
///     .map(|token| token.unwrap().kind)
///     .collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Ident("x".to_string()),
///                 TokenKind::DoubleStarAssign,
///                 TokenKind::Int(2.into()),
///                 TokenKind::Eof]);
/// ```
pub struct Lexer<'src> {
    source:   &'src str,
    inner:    logos::Lexer<'src, TokenKind>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: TokenKind::lexer(source),
               finished: false }
    }

    /// Consumes the lexer and collects the full token sequence.
    ///
    /// The returned vector always ends with exactly one [`TokenKind::Eof`].
    ///
    /// # Errors
    /// Returns the first lexical error encountered; scanning stops there.
    pub fn tokenize(self) -> Result<Vec<Token>, ParseError> {
        self.collect()
    }

    /// Scans the next token, or the end-of-input token once the text is
    /// exhausted.
    ///
    /// # Errors
    /// - `UnterminatedString` when a quote is not closed before the end of the
    ///   line.
    /// - `UnexpectedCharacter` for any character that starts no token,
    ///   including a bare `!`.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        let Some(result) = self.inner.next() else {
            return Ok(self.eof_token());
        };

        let span = self.inner.span();
        let line = self.inner.extras.line;
        let column = self.column_of(span.start);

        match result {
            Ok(kind) => Ok(Token { kind,
                                   line,
                                   column,
                                   width: self.inner.slice().chars().count(),
                                   span }),
            Err(()) => Err(self.classify_error(line, column)),
        }
    }

    /// Turns a failed match into the most specific error for the text at the
    /// failure point.
    fn classify_error(&self, line: usize, column: usize) -> ParseError {
        match self.inner.slice().chars().next() {
            Some('"' | '\'') => ParseError::UnterminatedString { line, column },
            Some(character) => ParseError::UnexpectedCharacter { character,
                                                                 line,
                                                                 column },
            None => ParseError::UnexpectedEof { line, column },
        }
    }

    /// Column (in characters) of a byte offset on the current line.
    fn column_of(&self, offset: usize) -> usize {
        let line_start = self.inner.extras.line_start.min(offset);
        self.source[line_start..offset].chars().count()
    }

    /// Builds the terminal token.
    ///
    /// It sits just after the last non-whitespace character, so that an
    /// "unexpected EOF" diagnostic points at the end of the last written line
    /// rather than past trailing blank lines.
    fn eof_token(&self) -> Token {
        let end = self.source.trim_end().len();
        let before = &self.source[..end];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count();

        Token { kind: TokenKind::Eof,
                line,
                column,
                span: end..end,
                width: 0 }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        self.finished = match &result {
            Ok(token) => token.is_eof(),
            Err(_) => true,
        };
        Some(result)
    }
}
