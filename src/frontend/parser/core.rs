use crate::{
    ast::Ast,
    error::ParseError,
    frontend::token::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of parentheses and prefix operators the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Recursive-descent parser over a token slice.
///
/// The parser owns its cursor; nothing is shared between instances, and
/// parsing the same tokens twice yields the same tree. The grammar rules live
/// in the sibling modules as further `impl Parser` blocks:
/// [`statement`](super::statement) for statements and programs,
/// [`binary`](super::binary) for the infix precedence tiers and
/// [`unary`](super::unary) for prefix operators, `**` and operands.
#[derive(Debug, Clone)]
pub struct Parser<'t> {
    tokens:    &'t [Token],
    position:  usize,
    depth:     usize,
    max_depth: usize,
}

impl<'t> Parser<'t> {
    /// Creates a parser positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'t [Token]) -> Self {
        Self { tokens,
               position: 0,
               depth: 0,
               max_depth: MAX_NESTING_DEPTH }
    }

    /// Overrides the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, comparison, and descends through the
    /// precedence hierarchy.
    ///
    /// Grammar: `expr := comparison`
    pub fn parse_expression(&mut self) -> ParseResult<Ast> {
        self.parse_comparison()
    }

    /// The current token, if any remain.
    pub(super) fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    /// The token `offset` places after the current one.
    pub(super) fn peek_nth(&self, offset: usize) -> Option<&'t Token> {
        self.tokens.get(self.position + offset)
    }

    /// Consumes and returns the current token.
    pub(super) fn advance(&mut self) -> Option<&'t Token> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    /// Returns `true` if the current token has the same kind as `kind`.
    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        self.peek().is_some_and(|token| token.kind.same_kind(kind))
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// # Errors
    /// `Expected` naming both kinds, at the offending token, or at the last
    /// known position when the tokens have run out.
    pub(super) fn eat(&mut self, expected: &TokenKind) -> ParseResult<&'t Token> {
        match self.peek() {
            Some(token) if token.kind.same_kind(expected) => {
                self.position += 1;
                Ok(token)
            },
            Some(token) => Err(ParseError::Expected { expected: expected.name(),
                                                      found:    token.kind.name(),
                                                      line:     token.line,
                                                      column:   token.column,
                                                      span:     token.width, }),
            None => {
                let (line, column) = self.last_position();
                Err(ParseError::Expected { expected: expected.name(),
                                           found: "EOF",
                                           line,
                                           column,
                                           span: 1 })
            },
        }
    }

    /// Position of the last token, used when the tokens run out.
    pub(super) fn last_position(&self) -> (usize, usize) {
        self.tokens
            .last()
            .map_or((1, 0), |token| (token.line, token.column))
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// # Errors
    /// `NestingTooDeep` at the current token once the limit is exceeded;
    /// otherwise whatever `rule` returns.
    pub(super) fn nested<T>(&mut self,
                            rule: impl FnOnce(&mut Self) -> ParseResult<T>)
                            -> ParseResult<T> {
        if self.depth >= self.max_depth {
            let (line, column) = self.peek()
                                     .map_or_else(|| self.last_position(),
                                                  |token| (token.line, token.column));
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    line,
                                                    column });
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }
}
