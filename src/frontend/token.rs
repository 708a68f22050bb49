use std::ops::Range;

use logos::Logos;
use num_bigint::BigInt;

/// The kind of a lexical token, together with its literal payload.
///
/// Literal kinds carry their value directly: integers (of any size) and floats
/// are parsed while lexing, identifiers keep their text and string literals keep their
/// decoded content (escape sequences already resolved). Every other kind is a
/// plain marker.
///
/// Operators are matched longest-first, so `**=` is always one
/// [`TokenKind::DoubleStarAssign`] and never `**` followed by `=`.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Integer literal such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Int(BigInt),
    /// Floating-point literal such as `3.14` or `1.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(f64),
    /// String literal in single or double quotes, holding the decoded content.
    #[regex(r#""([^"\\\n]|\\[^\n])*""#, parse_string, allow_greedy = true)]
    #[regex(r#"'([^'\\\n]|\\[^\n])*'"#, parse_string, allow_greedy = true)]
    Str(String),
    /// Identifier such as `total`, `_tmp1` or `café`.
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*", |lex| lex.slice().to_string())]
    Ident(String),
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `null`
    #[token("null")]
    Null,
    /// `if`
    #[token("if")]
    If,
    /// `else`, or `else if` when the lookahead finds `if` on the same line.
    #[token("else", lex_else)]
    Else,
    /// `else if`
    ElseIf,

    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `//`
    #[token("//")]
    DoubleSlash,

    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    StarAssign,
    /// `/=`
    #[token("/=")]
    SlashAssign,
    /// `%=`
    #[token("%=")]
    PercentAssign,
    /// `**=`
    #[token("**=")]
    DoubleStarAssign,
    /// `//=`
    #[token("//=")]
    DoubleSlashAssign,
    /// `&=`
    #[token("&=")]
    AmpersandAssign,
    /// `|=`
    #[token("|=")]
    PipeAssign,
    /// `^=`
    #[token("^=")]
    CaretAssign,
    /// `<<=`
    #[token("<<=")]
    ShiftLeftAssign,
    /// `>>=`
    #[token(">>=")]
    ShiftRightAssign,

    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,

    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,

    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `^`
    #[token("^")]
    Caret,
    /// `~`
    #[token("~")]
    Tilde,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,

    /// `=`
    #[token("=")]
    Equals,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,

    /// End of input. Never matched from text; appended once by the lexer.
    Eof,

    /// Line breaks. Skipped, but they advance the line counter.
    #[token("\n", newline)]
    NewLine,
    /// Any other Unicode whitespace, such as spaces, tabs and `U+00A0`.
    #[regex(r"[ \t\r\f\x0B\x1C-\x1F\x{85}\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}]+",
            logos::skip)]
    Ignored,
}

/// Position bookkeeping carried by the lexer while it scans.
///
/// Tracks the current 1-based line number and the byte offset at which that
/// line starts, which together give every token its line and column.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number (1-based).
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

impl TokenKind {
    /// Returns the canonical upper-case name of this kind, as used in
    /// diagnostics.
    ///
    /// # Example
    /// ```
    /// use nokch::frontend::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::DoubleStarAssign.name(), "POW_AUG");
    /// assert_eq!(TokenKind::Int(7.into()).name(), "INT");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Int(_) => "INT",
            Self::Float(_) => "FLOAT",
            Self::Str(_) => "STRING",
            Self::Ident(_) => "IDENT",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Null => "NULL",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::ElseIf => "ELSE_IF",
            Self::Plus => "ADD",
            Self::Minus => "SUB",
            Self::Star => "MUL",
            Self::Slash => "DIV",
            Self::Percent => "MOD",
            Self::DoubleStar => "POW",
            Self::DoubleSlash => "FDIV",
            Self::PlusAssign => "ADD_AUG",
            Self::MinusAssign => "SUB_AUG",
            Self::StarAssign => "MUL_AUG",
            Self::SlashAssign => "DIV_AUG",
            Self::PercentAssign => "MOD_AUG",
            Self::DoubleStarAssign => "POW_AUG",
            Self::DoubleSlashAssign => "FDIV_AUG",
            Self::AmpersandAssign => "BAND_AUG",
            Self::PipeAssign => "BOR_AUG",
            Self::CaretAssign => "BXOR_AUG",
            Self::ShiftLeftAssign => "LSHIFT_AUG",
            Self::ShiftRightAssign => "RSHIFT_AUG",
            Self::PlusPlus => "INC",
            Self::MinusMinus => "DEC",
            Self::EqualEqual => "EQ",
            Self::BangEqual => "NE",
            Self::Less => "LT",
            Self::LessEqual => "LE",
            Self::Greater => "GT",
            Self::GreaterEqual => "GE",
            Self::Ampersand => "BIT_AND",
            Self::Pipe => "BIT_OR",
            Self::Caret => "BIT_XOR",
            Self::Tilde => "BIT_NOT",
            Self::ShiftLeft => "LSHIFT",
            Self::ShiftRight => "RSHIFT",
            Self::Equals => "ASSIGN",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Semicolon => "SEMI",
            Self::Comma => "COMMA",
            Self::Eof => "EOF",
            Self::NewLine => "NEWLINE",
            Self::Ignored => "WHITESPACE",
        }
    }

    /// Returns `true` when both kinds are the same, ignoring literal payloads.
    ///
    /// # Example
    /// ```
    /// use nokch::frontend::token::TokenKind;
    ///
    /// assert!(TokenKind::Int(1.into()).same_kind(&TokenKind::Int(2.into())));
    /// assert!(!TokenKind::Int(1.into()).same_kind(&TokenKind::Float(1.0)));
    /// ```
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Returns `true` for `=` and every augmented assignment operator.
    #[must_use]
    pub const fn is_assignment(&self) -> bool {
        matches!(self,
                 Self::Equals
                 | Self::PlusAssign
                 | Self::MinusAssign
                 | Self::StarAssign
                 | Self::SlashAssign
                 | Self::PercentAssign
                 | Self::DoubleStarAssign
                 | Self::DoubleSlashAssign
                 | Self::AmpersandAssign
                 | Self::PipeAssign
                 | Self::CaretAssign
                 | Self::ShiftLeftAssign
                 | Self::ShiftRightAssign)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "INT({n})"),
            Self::Float(n) => write!(f, "FLOAT({n:?})"),
            Self::Str(s) => write!(f, "STRING({s:?})"),
            Self::Ident(name) => write!(f, "IDENT({name})"),
            other => f.write_str(other.name()),
        }
    }
}

/// A token together with where it was found in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was matched, including any literal value.
    pub kind:   TokenKind,
    /// Line of the first character (1-based).
    pub line:   usize,
    /// Column of the first character within its line (0-based, in
    /// characters).
    pub column: usize,
    /// Byte range of the raw lexeme in the source text.
    pub span:   Range<usize>,
    /// Length of the raw lexeme in characters; zero for end of input.
    pub width:  usize,
}

impl Token {
    /// Returns `true` if this is the end-of-input marker.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the raw text of this token in `source`.
    ///
    /// For string literals this is the undecoded lexeme, quotes included.
    #[must_use]
    pub fn lexeme<'src>(&self, source: &'src str) -> &'src str {
        source.get(self.span.clone()).unwrap_or_default()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} {}", self.line, self.column, self.kind)
    }
}

/// Parses an integer literal of any length from the current token slice.
fn parse_integer(lex: &logos::Lexer<TokenKind>) -> Option<BigInt> {
    lex.slice().parse().ok()
}

/// Parses a floating-point literal such as `2.5` or `7.` from the current
/// token slice.
fn parse_float(lex: &logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Decodes a quoted string literal.
///
/// The surrounding quotes are dropped and backslash escapes are resolved:
/// `\n`, `\t`, `\r`, `\"`, `\'` and `\\` map to their usual characters; any
/// other escaped character stands for itself.
fn parse_string(lex: &logos::Lexer<TokenKind>) -> String {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];

    let mut decoded = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('t') => decoded.push('\t'),
            Some('r') => decoded.push('\r'),
            Some(other) => decoded.push(other),
            None => {},
        }
    }
    decoded
}

/// Classifies `else`, folding a following `if` on the same line into a single
/// [`TokenKind::ElseIf`].
///
/// Only horizontal whitespace is skipped while looking ahead, and only the two
/// characters `i` and `f` are checked, so `else iffy` becomes `ELSE_IF`
/// followed by the identifier `fy`.
fn lex_else(lex: &mut logos::Lexer<TokenKind>) -> TokenKind {
    let rest = lex.remainder();
    let gap = rest.len() - rest.trim_start_matches(is_inline_whitespace).len();

    if rest[gap..].starts_with("if") {
        lex.bump(gap + 2);
        TokenKind::ElseIf
    } else {
        TokenKind::Else
    }
}

/// Advances the line counter past a `\n`.
fn newline(lex: &mut logos::Lexer<TokenKind>) -> logos::Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}

/// Whitespace that does not end a line.
pub(crate) const fn is_inline_whitespace(c: char) -> bool {
    matches!(c,
             ' '
             | '\t'
             | '\r'
             | '\x0B'..='\x0C'
             | '\x1C'..='\x1F'
             | '\u{85}'
             | '\u{A0}'
             | '\u{1680}'
             | '\u{2000}'..='\u{200A}'
             | '\u{2028}'
             | '\u{2029}'
             | '\u{202F}'
             | '\u{205F}'
             | '\u{3000}')
}
