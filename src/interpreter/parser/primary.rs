use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::{
    ast::{Expr, ExprKind, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, Parser},
            utils::unescape,
        },
    },
};

impl Parser {
    /// Parses a primary expression followed by any number of `.` member
    /// accesses or method calls.
    ///
    /// Each link of the chain turns everything parsed so far into the receiver
    /// of a new node, so `a.b.c()` calls `c` on the field `b` of `a`. The
    /// offset of a member node is the offset of its name.
    ///
    /// Grammar: `secondary := primary ("." identifier ("(" arguments ")")?)*`
    pub(in crate::interpreter::parser) fn parse_secondary(&mut self) -> ParseResult<Expr> {
        let mut expression = self.parse_primary()?;

        while self.accept(".") {
            let name = self.expect(TokenKind::Identifier, "a member name after '.'")?;
            let receiver = Some(Box::new(expression));

            let kind = if self.accept("(") {
                let arguments = self.parse_comma_separated(Self::parse_expression, ")")?;
                ExprKind::Function { receiver,
                                     name: name.text,
                                     arguments }
            } else {
                ExprKind::Access { receiver,
                                   name: name.text }
            };

            expression = self.expression(name.offset, kind)?;
        }

        Ok(expression)
    }

    /// Parses a primary expression.
    ///
    /// Grammar:
    /// ```text
    /// primary := "NIL" | "TRUE" | "FALSE"
    ///          | integer | decimal | character | string
    ///          | "(" expression ")"
    ///          | identifier ("(" arguments ")")?
    /// ```
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let offset = self.current_offset();

        let kind = if self.accept("NIL") {
            ExprKind::Literal(LiteralValue::Nil)
        } else if self.accept("TRUE") {
            ExprKind::Literal(LiteralValue::Boolean(true))
        } else if self.accept("FALSE") {
            ExprKind::Literal(LiteralValue::Boolean(false))
        } else if let Some(token) = self.tokens.get(0).filter(|t| is_literal(t)).cloned() {
            self.tokens.advance();
            ExprKind::Literal(literal_value(&token)?)
        } else if self.accept("(") {
            let inner = self.parse_expression()?;
            self.expect(")", "')' after the grouped expression")?;
            ExprKind::Group(Box::new(inner))
        } else if self.peek(TokenKind::Identifier) {
            let name = self.expect_identifier("a name")?;
            if self.accept("(") {
                let arguments = self.parse_comma_separated(Self::parse_expression, ")")?;
                ExprKind::Function { receiver: None,
                                     name,
                                     arguments }
            } else {
                ExprKind::Access { receiver: None,
                                   name }
            }
        } else {
            return Err(self.error("an expression"));
        };

        self.expression(offset, kind)
    }
}

const fn is_literal(token: &Token) -> bool {
    matches!(token.kind,
             TokenKind::Integer | TokenKind::Decimal | TokenKind::Character | TokenKind::String)
}

/// Converts a literal token into its value.
///
/// Numbers may carry a leading sign; character and string literals are
/// unescaped.
///
/// # Errors
/// Returns a `ParseError` at the token if its text does not form a valid
/// literal of its kind.
fn literal_value(token: &Token) -> ParseResult<LiteralValue> {
    let invalid = || ParseError::UnexpectedToken { expected: "a valid literal".to_string(),
                                                   found:    token.text.clone(),
                                                   offset:   token.offset, };
    let unsigned = token.text.strip_prefix('+').unwrap_or(&token.text);

    match token.kind {
        TokenKind::Integer => BigInt::from_str(unsigned).map(LiteralValue::Integer)
                                                        .map_err(|_| invalid()),
        TokenKind::Decimal => BigDecimal::from_str(unsigned).map(LiteralValue::Decimal)
                                                            .map_err(|_| invalid()),
        TokenKind::Character => {
            let text = unescape(&token.text);
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(LiteralValue::Character(c)),
                _ => Err(invalid()),
            }
        },
        TokenKind::String => Ok(LiteralValue::String(unescape(&token.text))),
        TokenKind::Identifier | TokenKind::Operator => Err(invalid()),
    }
}
