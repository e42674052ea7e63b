use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Expr, ExprKind, Field, Method, NodeId, Parameter, Source},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::token_stream::{TokenPattern, TokenStream},
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting the parser accepts.
///
/// Applies both to nested statements and expressions while parsing, and to
/// the height of every expression tree, including long operator chains.
/// Later stages walk the tree recursively, so the limit keeps them within the
/// stack as well.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Recursive-descent parser from tokens to a [`Source`].
///
/// The parser never backtracks: every rule decides what to do by looking at
/// the next token through [`Parser::peek`], and consumes it with
/// [`Parser::accept`] or [`Parser::expect`]. Node ids are handed out in
/// creation order.
pub struct Parser {
    pub(in crate::interpreter::parser) tokens: TokenStream,
    next_id:                                   usize,
    depth:                                     usize,
    heights:                                   HashMap<NodeId, usize>,
}

impl Parser {
    /// Creates a parser over `tokens`.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens:  TokenStream::new(tokens),
               next_id: 0,
               depth:   0,
               heights: HashMap::new(), }
    }

    /// Parses a whole source.
    ///
    /// Grammar: `source := field* method*`
    ///
    /// # Errors
    /// Returns the first [`ParseError`]. Tokens left over after the last
    /// method are reported as [`ParseError::TrailingTokens`].
    pub fn parse_source(&mut self) -> ParseResult<Source> {
        let mut source = Source::default();

        while self.accept("LET") {
            source.fields.push(self.parse_field()?);
        }
        while self.accept("DEF") {
            source.methods.push(Rc::new(self.parse_method()?));
        }

        if let Some(token) = self.tokens.get(0) {
            return Err(ParseError::TrailingTokens { token:  token.text.clone(),
                                                    offset: token.offset, });
        }

        Ok(source)
    }

    /// Parses a field after its `LET` keyword.
    ///
    /// Grammar: `field := "LET" identifier ":" identifier ("=" expression)? ";"`
    fn parse_field(&mut self) -> ParseResult<Field> {
        let offset = self.previous_offset();
        let name = self.expect_identifier("a field name")?;
        self.expect(":", "':' after the field name")?;
        let type_name = self.expect_identifier("a field type")?;

        let value = if self.accept("=") {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect(";", "';' after the field")?;

        Ok(Field { id: self.next_node_id(),
                   name,
                   type_name,
                   value,
                   offset })
    }

    /// Parses a method after its `DEF` keyword.
    ///
    /// Grammar:
    /// ```text
    /// method := "DEF" identifier "(" (parameter ("," parameter)*)? ")"
    ///           (":" identifier)? "DO" statement* "END"
    /// parameter := identifier (":" identifier)?
    /// ```
    fn parse_method(&mut self) -> ParseResult<Method> {
        let offset = self.previous_offset();
        let name = self.expect_identifier("a method name")?;
        self.expect("(", "'(' after the method name")?;
        let parameters = self.parse_comma_separated(Self::parse_parameter, ")")?;

        let return_type_name = if self.accept(":") {
            Some(self.expect_identifier("a return type")?)
        } else {
            None
        };

        self.expect("DO", "'DO' before the method body")?;
        let statements = self.parse_statements_until(&["END"])?;
        self.expect("END", "'END' after the method body")?;

        Ok(Method { id: self.next_node_id(),
                    name,
                    parameters,
                    return_type_name,
                    statements,
                    offset })
    }

    fn parse_parameter(&mut self) -> ParseResult<Parameter> {
        let name = self.expect_identifier("a parameter name")?;
        let type_name = if self.accept(":") {
            Some(self.expect_identifier("a parameter type")?)
        } else {
            None
        };

        Ok(Parameter { name, type_name })
    }

    /// Returns `true` if the next token matches `pattern`.
    #[must_use]
    pub fn peek<'a>(&self, pattern: impl Into<TokenPattern<'a>>) -> bool {
        self.tokens.peek(&[pattern.into()])
    }

    /// Consumes the next token if it matches `pattern`.
    pub fn accept<'a>(&mut self, pattern: impl Into<TokenPattern<'a>>) -> bool {
        self.tokens.accept(&[pattern.into()])
    }

    /// Consumes the next token, which must match `pattern`, and returns it.
    ///
    /// # Errors
    /// Reports `expected` at the current token or at the end of input.
    pub fn expect<'a>(&mut self,
                      pattern: impl Into<TokenPattern<'a>>,
                      expected: &str)
                      -> ParseResult<Token> {
        if self.accept(pattern)
           && let Some(token) = self.tokens.previous()
        {
            return Ok(token.clone());
        }

        Err(self.error(expected))
    }

    /// Consumes an identifier token and returns its text.
    pub(in crate::interpreter::parser) fn expect_identifier(&mut self,
                                                            expected: &str)
                                                            -> ParseResult<String> {
        Ok(self.expect(TokenKind::Identifier, expected)?.text)
    }

    /// Builds the error for a missing `expected` construct at the current
    /// position.
    pub(in crate::interpreter::parser) fn error(&self, expected: &str) -> ParseError {
        match self.tokens.get(0) {
            Some(token) => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                         found:    token.text.clone(),
                                                         offset:   token.offset, },
            None => ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                       offset:   self.tokens.end_offset(), },
        }
    }

    /// Offset of the token just consumed.
    pub(in crate::interpreter::parser) fn previous_offset(&self) -> usize {
        self.tokens.previous().map_or(0, |token| token.offset)
    }

    /// Offset of the next token, or of the end of input.
    pub(in crate::interpreter::parser) fn current_offset(&self) -> usize {
        self.tokens
            .get(0)
            .map_or_else(|| self.tokens.end_offset(), |token| token.offset)
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// # Errors
    /// `NestingTooDeep` at the current token once [`MAX_NESTING_DEPTH`]
    /// levels are open, or whatever `parse` returns.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                                                    -> ParseResult<T> {
        if self.depth == MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                    offset: self.current_offset(), });
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Builds an expression node with a fresh id.
    ///
    /// # Errors
    /// `NestingTooDeep` at `offset` if the new tree would be higher than
    /// [`MAX_NESTING_DEPTH`].
    pub(in crate::interpreter::parser) fn expression(&mut self,
                                                     offset: usize,
                                                     kind: ExprKind)
                                                     -> ParseResult<Expr> {
        let children = match &kind {
            ExprKind::Literal(_) => 0,
            ExprKind::Group(inner) => self.height(inner),
            ExprKind::Binary { left, right, .. } => self.height(left).max(self.height(right)),
            ExprKind::Access { receiver, .. } => receiver.as_deref().map_or(0, |r| self.height(r)),
            ExprKind::Function { receiver,
                                 arguments,
                                 .. } => receiver.as_deref()
                                                 .into_iter()
                                                 .chain(arguments)
                                                 .map(|e| self.height(e))
                                                 .max()
                                                 .unwrap_or(0),
        };

        let height = children + 1;
        if height > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                    offset });
        }

        let id = self.next_node_id();
        self.heights.insert(id, height);
        Ok(Expr { id, offset, kind })
    }

    fn height(&self, expr: &Expr) -> usize {
        self.heights.get(&expr.id).copied().unwrap_or(1)
    }

    pub(in crate::interpreter::parser) const fn next_node_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Parses `tokens` into a [`Source`].
///
/// # Errors
/// Returns a [`ParseError`] carrying the offset of the offending token, or the
/// end-of-input offset when the tokens run out.
///
/// # Example
/// ```
/// use ember::interpreter::{lexer::lex, parser::parse};
///
/// let tokens = lex("LET x: Integer = 1; DEF main(): Integer DO RETURN x; END").unwrap();
/// let source = parse(tokens).unwrap();
///
/// assert_eq!(source.fields.len(), 1);
/// assert_eq!(source.methods[0].name, "main");
/// ```
pub fn parse(tokens: Vec<Token>) -> ParseResult<Source> {
    Parser::new(tokens).parse_source()
}
