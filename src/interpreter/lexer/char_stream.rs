use crate::interpreter::lexer::token::{Token, TokenKind};

/// Maintains the source characters, the current position and the length of
/// the token being matched.
///
/// The lexer only moves through the stream with `peek` / `accept`; the stream
/// itself knows nothing about token grammar.
pub struct CharStream {
    chars:  Vec<char>,
    index:  usize,
    length: usize,
}

impl CharStream {
    /// Creates a stream positioned at the first character of `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self { chars:  input.chars().collect(),
               index:  0,
               length: 0, }
    }

    /// Returns `true` if a character exists `offset` positions ahead.
    #[must_use]
    pub fn has(&self, offset: usize) -> bool {
        self.index + offset < self.chars.len()
    }

    /// Returns the character `offset` positions ahead, if any.
    #[must_use]
    pub fn get(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).copied()
    }

    /// Moves past the current character, adding it to the current token.
    pub fn advance(&mut self) {
        self.index += 1;
        self.length += 1;
    }

    /// Discards the characters matched so far, such as whitespace.
    pub fn skip(&mut self) {
        self.length = 0;
    }

    /// Returns the current position.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Builds a token from the characters matched since the last emit or skip.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::lexer::{TokenKind, char_stream::CharStream};
    ///
    /// let mut chars = CharStream::new(" ab");
    /// chars.advance();
    /// chars.skip();
    /// chars.advance();
    /// chars.advance();
    ///
    /// let token = chars.emit(TokenKind::Identifier);
    /// assert_eq!(token.text, "ab");
    /// assert_eq!(token.offset, 1);
    /// ```
    pub fn emit(&mut self, kind: TokenKind) -> Token {
        let start = self.index - self.length;
        self.skip();
        let text = self.chars[start..self.index].iter().collect::<String>();
        Token::new(kind, text, start)
    }
}
