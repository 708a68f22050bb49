use crate::{
    ast::{Ast, BinaryOperator},
    frontend::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses comparison expressions.
    ///
    /// Handles left-associative chains of `==`, `!=`, `<`, `<=`, `>`, `>=`,
    /// so `a < b < c` parses as `(a < b) < c`.
    ///
    /// Grammar: `comparison := bitwise_or (("==" | "!=" | "<" | "<=" | ">" |
    /// ">=") bitwise_or)*`
    pub(crate) fn parse_comparison(&mut self) -> ParseResult<Ast> {
        self.fold_left(Self::parse_bitwise_or, is_comparison_op)
    }

    /// Parses bitwise OR expressions.
    ///
    /// Grammar: `bitwise_or := bitwise_xor ("|" bitwise_xor)*`
    pub(crate) fn parse_bitwise_or(&mut self) -> ParseResult<Ast> {
        self.fold_left(Self::parse_bitwise_xor, |op| matches!(op, BinaryOperator::BitOr))
    }

    /// Parses bitwise XOR expressions.
    ///
    /// Grammar: `bitwise_xor := bitwise_and ("^" bitwise_and)*`
    pub(crate) fn parse_bitwise_xor(&mut self) -> ParseResult<Ast> {
        self.fold_left(Self::parse_bitwise_and, |op| matches!(op, BinaryOperator::BitXor))
    }

    /// Parses bitwise AND expressions.
    ///
    /// Grammar: `bitwise_and := shift ("&" shift)*`
    pub(crate) fn parse_bitwise_and(&mut self) -> ParseResult<Ast> {
        self.fold_left(Self::parse_shift, |op| matches!(op, BinaryOperator::BitAnd))
    }

    /// Parses shift expressions.
    ///
    /// Grammar: `shift := additive (("<<" | ">>") additive)*`
    pub(crate) fn parse_shift(&mut self) -> ParseResult<Ast> {
        self.fold_left(Self::parse_additive, |op| {
                matches!(op, BinaryOperator::ShiftLeft | BinaryOperator::ShiftRight)
            })
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`, so `1 - 2 - 3`
    /// parses as `(1 - 2) - 3`.
    ///
    /// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub(crate) fn parse_additive(&mut self) -> ParseResult<Ast> {
        self.fold_left(Self::parse_multiplicative, |op| {
                matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            })
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators `*`, `/`, `//` and `%`. Operands are
    /// unary expressions, so `-2 * 3` parses as `(-2) * 3`.
    ///
    /// Grammar: `multiplicative := unary (("*" | "/" | "//" | "%") unary)*`
    pub(crate) fn parse_multiplicative(&mut self) -> ParseResult<Ast> {
        self.fold_left(Self::parse_unary, |op| {
                matches!(op,
                         BinaryOperator::Mul
                         | BinaryOperator::Div
                         | BinaryOperator::FloorDiv
                         | BinaryOperator::Mod)
            })
    }

    /// Parses one precedence tier as a left-associative chain.
    ///
    /// Parses an operand with `operand`, then, while the current token maps to
    /// an operator accepted by `accepts`, consumes it and folds the next
    /// operand into a new [`Ast::BinaryOp`] whose left side is everything
    /// parsed so far.
    pub(super) fn fold_left(&mut self,
                            operand: fn(&mut Self) -> ParseResult<Ast>,
                            accepts: fn(BinaryOperator) -> bool)
                            -> ParseResult<Ast> {
        let mut left = operand(self)?;
        loop {
            if let Some(token) = self.peek()
               && let Some(op) = token_to_binary_operator(&token.kind)
               && accepts(op)
            {
                self.advance();
                let right = operand(self)?;
                left = Ast::binary(left, op, right);
                continue;
            }
            break;
        }
        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` for every infix operator token, including
/// `**`, and `None` for all other tokens (augmented assignments included).
///
/// # Example
/// ```
/// use nokch::{
///     ast::BinaryOperator,
///     frontend::{parser::binary::token_to_binary_operator, token::TokenKind},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::DoubleSlash),
///            Some(BinaryOperator::FloorDiv));
/// assert_eq!(token_to_binary_operator(&TokenKind::PlusAssign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &TokenKind) -> Option<BinaryOperator> {
    match token {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::DoubleSlash => Some(BinaryOperator::FloorDiv),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::DoubleStar => Some(BinaryOperator::Pow),
        TokenKind::ShiftLeft => Some(BinaryOperator::ShiftLeft),
        TokenKind::ShiftRight => Some(BinaryOperator::ShiftRight),
        TokenKind::Ampersand => Some(BinaryOperator::BitAnd),
        TokenKind::Caret => Some(BinaryOperator::BitXor),
        TokenKind::Pipe => Some(BinaryOperator::BitOr),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the comparison tier.
///
/// # Example
/// ```
/// use nokch::{ast::BinaryOperator, frontend::parser::binary::is_comparison_op};
///
/// assert!(is_comparison_op(BinaryOperator::LessEqual));
/// assert!(!is_comparison_op(BinaryOperator::BitOr));
/// ```
#[must_use]
pub const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Equal
             | BinaryOperator::NotEqual
             | BinaryOperator::Less
             | BinaryOperator::LessEqual
             | BinaryOperator::Greater
             | BinaryOperator::GreaterEqual)
}

/// Returns `true` when `kind` is the exponentiation token `**`.
pub(super) const fn is_power(kind: &TokenKind) -> bool {
    matches!(kind, TokenKind::DoubleStar)
}
