/// The category of a diagnostic.
///
/// Only `Syntax` is raised by the lexer and parser. The other kinds are
/// reserved for later phases (name resolution, evaluation).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A generic error.
    Error,
    /// Malformed tokens or a grammar violation.
    Syntax,
    /// An operation applied to values of the wrong type.
    Type,
    /// A reference to an undefined name.
    Name,
    /// A value outside an operation's domain.
    Value,
    /// Any other failure during execution.
    Runtime,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Error => "ERROR",
            Self::Syntax => "SYNTAX",
            Self::Type => "TYPE",
            Self::Name => "NAME",
            Self::Value => "VALUE",
            Self::Runtime => "RUNTIME",
        };
        f.write_str(kind)
    }
}

const RED: &str = "\x1b[91m";
const GREEN: &str = "\x1b[92m";
const YELLOW: &str = "\x1b[93m";
const CYAN: &str = "\x1b[96m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// A single user-facing error report with a source position.
///
/// Diagnostics are built from errors at the point of failure and rendered
/// straight away; nothing keeps them around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The category of the problem.
    pub kind:    DiagnosticKind,
    /// What went wrong.
    pub message: String,
    /// Line of the problem (1-based).
    pub line:    usize,
    /// Column of the problem (0-based).
    pub column:  usize,
    /// How many characters to underline, at least one.
    pub span:    usize,
}

impl Diagnostic {
    /// Creates a diagnostic underlining a single character.
    #[must_use]
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, line: usize, column: usize) -> Self {
        Self { kind,
               message: message.into(),
               line,
               column,
               span: 1 }
    }

    /// Sets the underline width. Widths below one are raised to one.
    #[must_use]
    pub fn with_span(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    /// Renders the diagnostic with a source excerpt.
    ///
    /// The first line names the kind, file, position and message. When the
    /// line exists in `source`, two more lines follow: the source line prefixed
    /// by its number, and a `^~~~` underline of `span` characters starting at
    /// the column.
    ///
    /// # Example
    /// ```
    /// use nokch::error::{Diagnostic, DiagnosticKind};
    ///
    /// let diagnostic =
    ///     Diagnostic::new(DiagnosticKind::Syntax, "unexpected $", 1, 4).with_span(2);
    ///
    /// assert_eq!(diagnostic.render("demo.nkch", "x = $$", false),
    ///            "[SYNTAX]: demo.nkch:1:4: unexpected $\n 1 | x = $$\n   |     ^~\n");
    /// ```
    #[must_use]
    pub fn render(&self, file: &str, source: &str, color: bool) -> String {
        let paint = |text: &str, style: &str| {
            if color {
                format!("{style}{text}{RESET}")
            } else {
                text.to_string()
            }
        };

        let mut out = format!("{}: {}:{}:{}: {}\n",
                              paint(&format!("[{}]", self.kind), &format!("{BOLD}{RED}")),
                              paint(file, CYAN),
                              paint(&self.line.to_string(), YELLOW),
                              paint(&self.column.to_string(), YELLOW),
                              paint(&self.message, GREEN));

        let Some(source_line) = self.line.checked_sub(1).and_then(|i| source.lines().nth(i))
        else {
            return out;
        };

        let number = self.line.to_string();
        let underline = format!("^{}", "~".repeat(self.span.saturating_sub(1)));

        out.push_str(&format!(" {} | {}\n", paint(&number, CYAN), source_line.trim_end()));
        out.push_str(&format!("{} | {}{}\n",
                              " ".repeat(number.len() + 1),
                              " ".repeat(self.column),
                              paint(&underline, RED)));
        out
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "[{}]: {}:{}: {}",
               self.kind, self.line, self.column, self.message)
    }
}

impl std::error::Error for Diagnostic {}
