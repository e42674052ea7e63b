use crate::interpreter::lexer::{Token, TokenKind};

/// Something a token can be tested against: either its kind or its exact
/// text.
///
/// Keywords are plain identifiers, so `TokenPattern::Text("LET")` is how the
/// parser recognizes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPattern<'a> {
    /// Matches any token of the given kind.
    Kind(TokenKind),
    /// Matches a token whose text is exactly this string.
    Text(&'a str),
}

impl TokenPattern<'_> {
    /// Returns `true` if `token` satisfies this pattern.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::{
    ///     lexer::{Token, TokenKind},
    ///     parser::TokenPattern,
    /// };
    ///
    /// let token = Token::new(TokenKind::Identifier, "DO", 7);
    ///
    /// assert!(TokenPattern::Text("DO").matches(&token));
    /// assert!(TokenPattern::Kind(TokenKind::Identifier).matches(&token));
    /// assert!(!TokenPattern::Kind(TokenKind::Operator).matches(&token));
    /// ```
    #[must_use]
    pub fn matches(&self, token: &Token) -> bool {
        match self {
            Self::Kind(kind) => token.kind == *kind,
            Self::Text(text) => token.text == *text,
        }
    }
}

impl From<TokenKind> for TokenPattern<'_> {
    fn from(kind: TokenKind) -> Self {
        Self::Kind(kind)
    }
}

impl<'a> From<&'a str> for TokenPattern<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

/// An indexed lookahead view over the tokens produced by the lexer.
pub struct TokenStream {
    tokens: Vec<Token>,
    index:  usize,
}

impl TokenStream {
    /// Creates a stream positioned at the first token.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    /// Returns `true` if a token exists `offset` positions ahead.
    #[must_use]
    pub fn has(&self, offset: usize) -> bool {
        self.index + offset < self.tokens.len()
    }

    /// Returns the token `offset` positions ahead, if any.
    #[must_use]
    pub fn get(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.index + offset)
    }

    /// Returns the most recently consumed token.
    #[must_use]
    pub fn previous(&self) -> Option<&Token> {
        self.index.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Moves past the current token.
    pub const fn advance(&mut self) {
        self.index += 1;
    }

    /// Offset just past the last token, or `0` for an empty stream.
    #[must_use]
    pub fn end_offset(&self) -> usize {
        self.tokens.last().map_or(0, Token::end)
    }

    /// Returns `true` if the next tokens match `patterns` one by one.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::{
    ///     lexer::{TokenKind, lex},
    ///     parser::{TokenPattern, TokenStream},
    /// };
    ///
    /// let stream = TokenStream::new(lex("name(").unwrap());
    ///
    /// assert!(stream.peek(&[TokenKind::Identifier.into(), "(".into()]));
    /// assert!(!stream.peek(&[TokenPattern::Text("("), TokenKind::Identifier.into()]));
    /// ```
    #[must_use]
    pub fn peek(&self, patterns: &[TokenPattern<'_>]) -> bool {
        patterns.iter()
                .enumerate()
                .all(|(i, pattern)| self.get(i).is_some_and(|token| pattern.matches(token)))
    }

    /// Behaves like [`TokenStream::peek`], and advances past the matched
    /// tokens when it returns `true`.
    pub fn accept(&mut self, patterns: &[TokenPattern<'_>]) -> bool {
        let matched = self.peek(patterns);
        if matched {
            self.index += patterns.len();
        }
        matched
    }
}
