use crate::{
    ast::{Declaration, Stmt},
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser {
    /// Parses statements until one of `terminators` (or the end of input) is
    /// next. The terminator itself is left in the stream.
    pub(in crate::interpreter::parser) fn parse_statements_until(&mut self,
                                                                 terminators: &[&str])
                                                                 -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();
        while self.tokens.has(0) && !terminators.iter().any(|t| self.peek(*t)) {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    /// Parses a single statement.
    ///
    /// Grammar:
    /// ```text
    /// statement := declaration | if | for | while | return
    ///            | expression ("=" expression)? ";"
    /// ```
    ///
    /// # Errors
    /// Returns a `ParseError` if the statement is malformed or nested too
    /// deeply.
    pub fn parse_statement(&mut self) -> ParseResult<Stmt> {
        self.nested(Self::parse_statement_kind)
    }

    fn parse_statement_kind(&mut self) -> ParseResult<Stmt> {
        if self.accept("LET") {
            self.parse_declaration().map(Stmt::Declaration)
        } else if self.accept("IF") {
            self.parse_if()
        } else if self.accept("FOR") {
            self.parse_for()
        } else if self.accept("WHILE") {
            self.parse_while()
        } else if self.accept("RETURN") {
            self.parse_return()
        } else {
            self.parse_expression_or_assignment()
        }
    }

    /// Grammar: `declaration := "LET" identifier (":" identifier)? ("=" expression)? ";"`
    fn parse_declaration(&mut self) -> ParseResult<Declaration> {
        let offset = self.previous_offset();
        let name = self.expect_identifier("a variable name")?;

        let type_name = if self.accept(":") {
            Some(self.expect_identifier("a variable type")?)
        } else {
            None
        };
        let value = if self.accept("=") {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect(";", "';' after the declaration")?;

        Ok(Declaration { id: self.next_node_id(),
                         name,
                         type_name,
                         value,
                         offset })
    }

    /// Grammar: `if := "IF" expression "DO" statement* ("ELSE" statement*)? "END"`
    fn parse_if(&mut self) -> ParseResult<Stmt> {
        let condition = self.parse_expression()?;
        self.expect("DO", "'DO' after the condition")?;
        let then_statements = self.parse_statements_until(&["ELSE", "END"])?;

        let else_statements = if self.accept("ELSE") {
            self.parse_statements_until(&["END"])?
        } else {
            Vec::new()
        };
        self.expect("END", "'END' after the if statement")?;

        Ok(Stmt::If { condition,
                      then_statements,
                      else_statements })
    }

    /// Grammar: `for := "FOR" identifier "IN" expression "DO" statement* "END"`
    fn parse_for(&mut self) -> ParseResult<Stmt> {
        let name = self.expect_identifier("a loop variable")?;
        self.expect("IN", "'IN' after the loop variable")?;
        let value = self.parse_expression()?;
        self.expect("DO", "'DO' after the iterated value")?;
        let statements = self.parse_statements_until(&["END"])?;
        self.expect("END", "'END' after the loop body")?;

        Ok(Stmt::For { name,
                       value,
                       statements })
    }

    /// Grammar: `while := "WHILE" expression "DO" statement* "END"`
    fn parse_while(&mut self) -> ParseResult<Stmt> {
        let condition = self.parse_expression()?;
        self.expect("DO", "'DO' after the condition")?;
        let statements = self.parse_statements_until(&["END"])?;
        self.expect("END", "'END' after the loop body")?;

        Ok(Stmt::While { condition,
                         statements })
    }

    /// Grammar: `return := "RETURN" expression ";"`
    fn parse_return(&mut self) -> ParseResult<Stmt> {
        let offset = self.previous_offset();
        let value = self.parse_expression()?;
        self.expect(";", "';' after the returned value")?;

        Ok(Stmt::Return { value, offset })
    }

    fn parse_expression_or_assignment(&mut self) -> ParseResult<Stmt> {
        let expression = self.parse_expression()?;

        let statement = if self.accept("=") {
            let value = self.parse_expression()?;
            Stmt::Assignment { receiver: expression,
                               value }
        } else {
            Stmt::Expression(expression)
        };
        self.expect(";", "';' after the statement")?;

        Ok(statement)
    }
}
