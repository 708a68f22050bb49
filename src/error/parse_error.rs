use crate::error::diagnostic::{Diagnostic, DiagnosticKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant records the 1-based line and 0-based column where the
/// problem starts. Lexing and parsing stop at the first error; there is no
/// recovery.
pub enum ParseError {
    /// A character that starts no token, including a bare `!`.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The column where the error occurred.
        column:    usize,
    },
    /// A string literal whose closing quote is missing on its line.
    UnterminatedString {
        /// The source line where the error occurred.
        line:   usize,
        /// The column of the opening quote.
        column: usize,
    },
    /// A specific token kind was required but another was found.
    Expected {
        /// Name of the required kind.
        expected: &'static str,
        /// Name of the kind actually found, or `EOF`.
        found:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
        /// The column where the error occurred.
        column:   usize,
        /// Width of the offending token.
        span:     usize,
    },
    /// The input ended where an operand was required.
    UnexpectedEof {
        /// The source line where the error occurred.
        line:   usize,
        /// The column where the error occurred.
        column: usize,
    },
    /// A token that cannot start an operand.
    UnexpectedToken {
        /// Name of the offending kind.
        token:  &'static str,
        /// The source line where the error occurred.
        line:   usize,
        /// The column where the error occurred.
        column: usize,
        /// Width of the offending token.
        span:   usize,
    },
    /// Parentheses or prefix operators nested beyond the parser's limit.
    NestingTooDeep {
        /// The configured nesting limit.
        limit:  usize,
        /// The source line where the error occurred.
        line:   usize,
        /// The column where the error occurred.
        column: usize,
    },
}

impl ParseError {
    /// The line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::UnterminatedString { line, .. }
            | Self::Expected { line, .. }
            | Self::UnexpectedEof { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::NestingTooDeep { line, .. } => *line,
        }
    }

    /// The column where the error occurred.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { column, .. }
            | Self::UnterminatedString { column, .. }
            | Self::Expected { column, .. }
            | Self::UnexpectedEof { column, .. }
            | Self::UnexpectedToken { column, .. }
            | Self::NestingTooDeep { column, .. } => *column,
        }
    }

    /// How many characters a diagnostic should underline.
    #[must_use]
    pub fn span(&self) -> usize {
        match self {
            Self::Expected { span, .. } | Self::UnexpectedToken { span, .. } => (*span).max(1),
            Self::UnexpectedCharacter { .. }
            | Self::UnterminatedString { .. }
            | Self::UnexpectedEof { .. }
            | Self::NestingTooDeep { .. } => 1,
        }
    }

    /// The human-readable message, without position information.
    ///
    /// # Example
    /// ```
    /// use nokch::error::ParseError;
    ///
    /// let err = ParseError::UnexpectedCharacter { character: '$',
    ///                                             line:      1,
    ///                                             column:    4, };
    /// assert_eq!(err.message(), "unexpected $");
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnexpectedCharacter { character, .. } => format!("unexpected {character}"),
            Self::UnterminatedString { .. } => "Unterminated string literal".to_string(),
            Self::Expected { expected, found, .. } => format!("expected {expected}, got {found}"),
            Self::UnexpectedEof { .. } => "unexpected EOF".to_string(),
            Self::UnexpectedToken { .. } => "unexpected token".to_string(),
            Self::NestingTooDeep { limit, .. } => {
                format!("expression nested too deeply (limit {limit})")
            },
        }
    }

    /// Converts this error into a `SYNTAX` diagnostic at the same position.
    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(DiagnosticKind::Syntax,
                        self.message(),
                        self.line(),
                        self.column()).with_span(self.span())
    }
}

impl From<ParseError> for Diagnostic {
    fn from(error: ParseError) -> Self {
        error.to_diagnostic()
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Syntax error on line {}, column {}: {}",
               self.line(),
               self.column(),
               self.message())
    }
}

impl std::error::Error for ParseError {}
