use crate::{
    ast::{Ast, BinaryOperator, UnaryOperator},
    error::ParseError,
    frontend::{
        parser::{
            binary::is_power,
            core::{ParseResult, Parser},
        },
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Supports prefix operators:
    /// - `+` (unary plus)
    /// - `-` (numeric negation)
    /// - `~` (bitwise complement)
    ///
    /// Unary operators are right-associative and stack, so `-~x` is parsed as
    /// `-(~x)`. Since the lexer munches `++` and `--` into single tokens, those
    /// are accepted here as two stacked `+` or `-` operators: `--x` is
    /// `-(-x)`. Directly after an operand they are an error instead; see
    /// [`Parser::parse_statement`].
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("+" | "-" | "~") unary
    ///            | power
    /// ```
    pub(crate) fn parse_unary(&mut self) -> ParseResult<Ast> {
        let Some(token) = self.peek() else {
            return self.parse_power();
        };

        let (op, count) = match token.kind {
            TokenKind::Plus => (UnaryOperator::Plus, 1),
            TokenKind::Minus => (UnaryOperator::Negate, 1),
            TokenKind::Tilde => (UnaryOperator::BitNot, 1),
            TokenKind::PlusPlus => (UnaryOperator::Plus, 2),
            TokenKind::MinusMinus => (UnaryOperator::Negate, 2),
            _ => return self.parse_power(),
        };

        self.advance();
        let mut node = self.nested(Self::parse_unary)?;
        for _ in 0..count {
            node = Ast::unary(op, node);
        }
        Ok(node)
    }

    /// Parses exponentiation expressions.
    ///
    /// Repeated `**` folds from the left: `a ** b ** c` parses as
    /// `(a ** b) ** c`. Both operands are plain factors, so a signed exponent
    /// needs parentheses: `2 ** (-1)`.
    ///
    /// Grammar: `power := factor ("**" factor)*`
    pub(crate) fn parse_power(&mut self) -> ParseResult<Ast> {
        let mut left = self.parse_factor()?;
        while let Some(token) = self.peek()
              && is_power(&token.kind)
        {
            self.advance();
            let right = self.parse_factor()?;
            left = Ast::binary(left, BinaryOperator::Pow, right);
        }
        Ok(left)
    }

    /// Parses an operand.
    ///
    /// Operands are integer and float literals, variable references and
    /// parenthesised expressions. Parentheses leave no node of their own.
    ///
    /// Grammar:
    /// ```text
    ///     factor := INT | FLOAT | IDENT | "(" expr ")"
    /// ```
    ///
    /// # Errors
    /// - `UnexpectedEof` when the input ends here, at the last token.
    /// - `UnexpectedToken` for any other token, at that token.
    /// - `Expected` when a `(` is not closed by `)`.
    pub(crate) fn parse_factor(&mut self) -> ParseResult<Ast> {
        let Some(token) = self.peek() else {
            let (line, column) = self.last_position();
            return Err(ParseError::UnexpectedEof { line, column });
        };

        match &token.kind {
            TokenKind::Int(n) => {
                self.advance();
                Ok(Ast::number(n.clone()))
            },
            TokenKind::Float(n) => {
                self.advance();
                Ok(Ast::number(*n))
            },
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Ast::variable(name.clone()))
            },
            TokenKind::LParen => {
                self.advance();
                let expr = self.nested(Self::parse_expression)?;
                self.eat(&TokenKind::RParen)?;
                Ok(expr)
            },
            TokenKind::Eof => Err(ParseError::UnexpectedEof { line:   token.line,
                                                              column: token.column, }),
            other => Err(ParseError::UnexpectedToken { token:  other.name(),
                                                       line:   token.line,
                                                       column: token.column,
                                                       span:   token.width, }),
        }
    }
}
