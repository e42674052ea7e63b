use crate::{
    error::LexError,
    interpreter::lexer::{
        char_stream::CharStream,
        token::{Token, TokenKind},
    },
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// A character class tested against one position of the stream.
pub type Pattern = fn(char) -> bool;

const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\u{8}' | '\n' | '\r' | '\t')
}

const fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

const fn is_identifier_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

const fn is_sign(c: char) -> bool {
    matches!(c, '+' | '-')
}

const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

const fn is_dot(c: char) -> bool {
    c == '.'
}

const fn is_single_quote(c: char) -> bool {
    c == '\''
}

const fn is_double_quote(c: char) -> bool {
    c == '"'
}

const fn is_backslash(c: char) -> bool {
    c == '\\'
}

const fn is_character_body(c: char) -> bool {
    !matches!(c, '\'' | '\n' | '\r' | '\\')
}

const fn is_string_body(c: char) -> bool {
    !matches!(c, '"' | '\n' | '\r' | '\\')
}

const fn is_escape_code(c: char) -> bool {
    matches!(c, 'b' | 'n' | 'r' | 't' | '\'' | '"' | '\\')
}

const fn is_comparison_start(c: char) -> bool {
    matches!(c, '<' | '>' | '!' | '=')
}

const fn is_equals(c: char) -> bool {
    c == '='
}

const fn is_any(_: char) -> bool {
    true
}

/// Converts source text into tokens.
///
/// The lexer works through three layers:
/// - [`Lexer::lex`] repeatedly lexes tokens and skips whitespace,
/// - [`Lexer::lex_token`] decides which kind of token starts at the current
///   position and delegates to the matching routine,
/// - [`CharStream`] holds the position and the extent of the current token.
///
/// Every routine inspects and advances the stream exclusively through
/// [`Lexer::peek`] and [`Lexer::accept`].
pub struct Lexer {
    chars: CharStream,
}

impl Lexer {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { chars: CharStream::new(source) }
    }

    /// Lexes the whole input.
    ///
    /// Whitespace (`space`, backspace, newline, carriage return and tab) is
    /// skipped between tokens and never emitted.
    ///
    /// # Errors
    /// Returns the first [`LexError`] encountered; no tokens are returned in
    /// that case.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::lexer::{Lexer, TokenKind};
    ///
    /// let tokens = Lexer::new("LET x = 1.5;").lex().unwrap();
    /// let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
    ///
    /// assert_eq!(kinds,
    ///            [TokenKind::Identifier,
    ///             TokenKind::Identifier,
    ///             TokenKind::Operator,
    ///             TokenKind::Decimal,
    ///             TokenKind::Operator]);
    /// ```
    pub fn lex(mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();

        while self.chars.has(0) {
            if self.accept(&[is_whitespace]) {
                self.chars.skip();
            } else {
                tokens.push(self.lex_token()?);
            }
        }

        Ok(tokens)
    }

    /// Lexes the token starting at the current position.
    ///
    /// Only `peek` is used here; the delegated routine consumes the token.
    pub fn lex_token(&mut self) -> LexResult<Token> {
        if self.peek(&[is_identifier_start]) {
            Ok(self.lex_identifier())
        } else if self.peek(&[is_sign, is_digit]) || self.peek(&[is_digit]) {
            self.lex_number()
        } else if self.peek(&[is_single_quote]) {
            self.lex_character()
        } else if self.peek(&[is_double_quote]) {
            self.lex_string()
        } else {
            Ok(self.lex_operator())
        }
    }

    /// `identifier ::= [A-Za-z_] [A-Za-z0-9_-]*`
    fn lex_identifier(&mut self) -> Token {
        self.accept(&[is_identifier_start]);
        while self.accept(&[is_identifier_part]) {}
        self.chars.emit(TokenKind::Identifier)
    }

    /// `number ::= [+-]? [0-9]+ ('.' [0-9]+)?`
    fn lex_number(&mut self) -> LexResult<Token> {
        self.accept(&[is_sign]);
        while self.accept(&[is_digit]) {}

        if !self.accept(&[is_dot]) {
            return Ok(self.chars.emit(TokenKind::Integer));
        }
        if !self.peek(&[is_digit]) {
            return Err(LexError::InvalidDecimal { offset: self.chars.index() });
        }
        while self.accept(&[is_digit]) {}

        Ok(self.chars.emit(TokenKind::Decimal))
    }

    /// `character ::= ['] ([^'\n\r\\] | escape) [']`
    fn lex_character(&mut self) -> LexResult<Token> {
        self.accept(&[is_single_quote]);

        if self.peek(&[is_single_quote]) {
            return Err(LexError::EmptyCharacter { offset: self.chars.index() });
        }
        if self.peek(&[is_backslash]) {
            self.lex_escape()?;
        } else if !self.accept(&[is_character_body]) {
            return Err(self.character_error());
        }

        if !self.accept(&[is_single_quote]) {
            return Err(self.character_error());
        }

        Ok(self.chars.emit(TokenKind::Character))
    }

    /// Reports the current position inside a character literal as either an
    /// invalid character or the end of input.
    fn character_error(&self) -> LexError {
        let offset = self.chars.index();
        if self.chars.has(0) {
            LexError::InvalidCharacter { offset }
        } else {
            LexError::UnterminatedCharacter { offset }
        }
    }

    /// `string ::= '"' ([^"\n\r\\] | escape)* '"'`
    fn lex_string(&mut self) -> LexResult<Token> {
        self.accept(&[is_double_quote]);

        loop {
            if self.peek(&[is_backslash]) {
                self.lex_escape()?;
            } else if !self.accept(&[is_string_body]) {
                break;
            }
        }

        if !self.accept(&[is_double_quote]) {
            return Err(LexError::UnterminatedString { offset: self.chars.index() });
        }

        Ok(self.chars.emit(TokenKind::String))
    }

    /// `escape ::= '\' [bnrt'"\\]`
    fn lex_escape(&mut self) -> LexResult<()> {
        self.accept(&[is_backslash]);

        if !self.accept(&[is_escape_code]) {
            return Err(LexError::InvalidEscape { offset: self.chars.index() });
        }

        Ok(())
    }

    /// `operator ::= [<>!=] '='? | any character`
    fn lex_operator(&mut self) -> Token {
        if self.accept(&[is_comparison_start]) {
            self.accept(&[is_equals]);
        } else {
            self.accept(&[is_any]);
        }

        self.chars.emit(TokenKind::Operator)
    }

    /// Returns `true` if the next characters match `patterns` one by one.
    ///
    /// Never advances the stream.
    #[must_use]
    pub fn peek(&self, patterns: &[Pattern]) -> bool {
        patterns.iter()
                .enumerate()
                .all(|(i, pattern)| self.chars.get(i).is_some_and(|c| pattern(c)))
    }

    /// Behaves like [`Lexer::peek`], and advances past the matched characters
    /// when it returns `true`.
    pub fn accept(&mut self, patterns: &[Pattern]) -> bool {
        let matched = self.peek(patterns);
        if matched {
            for _ in patterns {
                self.chars.advance();
            }
        }
        matched
    }
}

/// Lexes `source` into tokens.
///
/// # Errors
/// Returns a [`LexError`] pointing at the first invalid or missing character.
///
/// # Example
/// ```
/// use ember::{error::LexError, interpreter::lexer::lex};
///
/// assert_eq!(lex("\"abc"), Err(LexError::UnterminatedString { offset: 4 }));
/// ```
pub fn lex(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source).lex()
}
