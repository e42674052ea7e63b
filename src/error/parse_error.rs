#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The text of the token encountered.
        found:    String,
        /// Offset of the offending token.
        offset:   usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// Offset just past the last token.
        offset:   usize,
    },
    /// Found extra tokens after a complete source was parsed.
    TrailingTokens {
        /// The first extra token.
        token:  String,
        /// Offset of the first extra token.
        offset: usize,
    },
    /// Blocks or expressions were nested deeper than the parser allows.
    NestingTooDeep {
        /// The nesting limit.
        limit:  usize,
        /// Offset where the limit was exceeded.
        offset: usize,
    },
}

impl ParseError {
    /// Returns the offset of the offending or missing token.
    ///
    /// # Example
    /// ```
    /// use ember::error::ParseError;
    ///
    /// let error = ParseError::TrailingTokens { token:  "END".to_string(),
    ///                                          offset: 12, };
    /// assert_eq!(error.offset(), 12);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedToken { offset, .. }
            | Self::UnexpectedEndOfInput { offset, .. }
            | Self::TrailingTokens { offset, .. }
            | Self::NestingTooDeep { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    offset, } => write!(f,
                                                        "Error at offset {offset}: Expected {expected}, found '{found}'."),

            Self::UnexpectedEndOfInput { expected, offset } => write!(f,
                                                                      "Error at offset {offset}: Expected {expected}, but the input ended."),

            Self::TrailingTokens { token, offset } => write!(f,
                                                             "Error at offset {offset}: Extra tokens after the last method, starting with '{token}'."),

            Self::NestingTooDeep { limit, offset } => write!(f,
                                                             "Error at offset {offset}: Nesting exceeds the limit of {limit} levels."),
        }
    }
}

impl std::error::Error for ParseError {}
