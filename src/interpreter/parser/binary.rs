use crate::{
    ast::{BinaryOperator, Expr, ExprKind},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, the logical connectives, and descends through
    /// the precedence hierarchy.
    ///
    /// Grammar: `expression := logical`
    ///
    /// # Errors
    /// Returns a `ParseError` if no expression starts at the current token.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.nested(Self::parse_logical)
    }

    /// Grammar: `logical := comparison (("AND" | "OR") comparison)*`
    ///
    /// `AND` and `OR` share one precedence level and associate to the left.
    fn parse_logical(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(&["AND", "OR"], Self::parse_comparison)
    }

    /// Grammar: `comparison := additive (("<" | "<=" | ">" | ">=" | "==" | "!=") additive)*`
    fn parse_comparison(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(&["<", "<=", ">", ">=", "==", "!="],
                                    Self::parse_additive)
    }

    /// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
    fn parse_additive(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(&["+", "-"], Self::parse_multiplicative)
    }

    /// Grammar: `multiplicative := secondary (("*" | "/") secondary)*`
    fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(&["*", "/"], Self::parse_secondary)
    }

    /// Parses a left-associative chain of `operand`s joined by any of
    /// `operators`.
    ///
    /// Keyword operators arrive as identifier tokens and symbolic ones as
    /// operator tokens; literals never match.
    fn parse_left_associative(&mut self,
                              operators: &[&str],
                              operand: fn(&mut Self) -> ParseResult<Expr>)
                              -> ParseResult<Expr> {
        let mut left = operand(self)?;

        while let Some(operator) = self.peek_operator(operators) {
            self.tokens.advance();
            let right = operand(self)?;

            left = self.expression(left.offset,
                                   ExprKind::Binary { operator,
                                                      left: Box::new(left),
                                                      right: Box::new(right) })?;
        }

        Ok(left)
    }

    fn peek_operator(&self, operators: &[&str]) -> Option<BinaryOperator> {
        let token = self.tokens.get(0)?;
        if !matches!(token.kind, TokenKind::Identifier | TokenKind::Operator)
           || !operators.contains(&token.text.as_str())
        {
            return None;
        }
        BinaryOperator::from_text(&token.text)
    }
}
