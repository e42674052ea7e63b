/// The kind of a lexical token.
///
/// Keywords such as `LET` or `AND` are lexed as identifiers; the parser tells
/// them apart by their text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Names and keywords, such as `x`, `main` or `RETURN`.
    Identifier,
    /// Integer literals, such as `42` or `-7`.
    Integer,
    /// Decimal literals, such as `3.14`.
    Decimal,
    /// Character literals including their quotes, such as `'c'`.
    Character,
    /// String literals including their quotes, such as `"hi\n"`.
    String,
    /// Operators and any other single character, such as `<=` or `;`.
    Operator,
}

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer. It
/// keeps the exact source text, so literal values are decoded by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind:   TokenKind,
    /// The exact source text of the token.
    pub text:   String,
    /// The character offset where the token starts.
    pub offset: usize,
}

impl Token {
    /// Creates a token.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::lexer::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Identifier, "LET", 0);
    /// assert_eq!(token.text, "LET");
    /// assert_eq!(token.len(), 3);
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self { kind,
               text: text.into(),
               offset }
    }

    /// Returns the length of the token text in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` if the token has no text. Lexed tokens never do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the offset just past the end of this token.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.len()
    }
}
