use crate::{
    ast::{AssignOperator, Ast},
    error::ParseError,
    frontend::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses statements until the end-of-input token.
    ///
    /// Statements need no separator; `x = 1 y = 2` is two statements. Parsing
    /// stops at the first error.
    ///
    /// Grammar: `program := statement* EOF`
    ///
    /// # Example
    /// ```
    /// use nokch::{
    ///     ast::{AssignOperator, Ast},
    ///     frontend::{lexer::Lexer, parser::core::Parser},
    /// };
    ///
    /// let tokens = Lexer::new("x = 5;").tokenize().unwrap();
    /// let program = Parser::new(&tokens).parse_program().unwrap();
    ///
    /// assert_eq!(program,
    ///            vec![Ast::assignment("x", AssignOperator::Assign, Ast::number(5))]);
    /// ```
    pub fn parse_program(&mut self) -> ParseResult<Vec<Ast>> {
        let mut statements = Vec::new();
        while let Some(token) = self.peek()
              && !token.is_eof()
        {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    /// Parses a single statement.
    ///
    /// A statement is either an assignment or an expression, each optionally
    /// followed by `;`.
    ///
    /// An identifier starts an assignment only when the token after it is `=`
    /// or an augmented assignment operator. Otherwise the identifier is left in
    /// place and the statement is parsed as an expression.
    ///
    /// Grammar:
    /// ```text
    ///     statement := IDENT assign_op expr ";"?
    ///                | expr ";"?
    /// ```
    ///
    /// # Errors
    /// `UnexpectedToken` when `++` or `--` directly follows the statement's
    /// last operand, as in `a--b` or `x = 1 ++ 2`. A `;` in between starts a
    /// new statement, so `a; --b` is fine.
    pub fn parse_statement(&mut self) -> ParseResult<Ast> {
        let statement = match self.parse_assignment()? {
            Some(assignment) => assignment,
            None => self.parse_expression()?,
        };

        if let Some(token) = self.peek()
           && matches!(token.kind, TokenKind::PlusPlus | TokenKind::MinusMinus)
        {
            return Err(ParseError::UnexpectedToken { token:  token.kind.name(),
                                                     line:   token.line,
                                                     column: token.column,
                                                     span:   token.width, });
        }

        if self.check(&TokenKind::Semicolon) {
            self.advance();
        }
        Ok(statement)
    }

    /// Parses an assignment if one starts at the current token.
    ///
    /// Looks one token past the identifier before committing, so nothing is
    /// consumed when the statement turns out to be an expression.
    ///
    /// # Returns
    /// - `Ok(Some(statement))` if an assignment was parsed,
    /// - `Ok(None)` if the current tokens do not start an assignment.
    fn parse_assignment(&mut self) -> ParseResult<Option<Ast>> {
        let Some(TokenKind::Ident(name)) = self.peek().map(|token| &token.kind) else {
            return Ok(None);
        };
        let Some(op) = self.peek_nth(1)
                           .and_then(|token| AssignOperator::from_token(&token.kind))
        else {
            return Ok(None);
        };

        self.advance();
        self.advance();
        let value = self.parse_expression()?;

        Ok(Some(Ast::assignment(name.clone(), op, value)))
    }
}
