#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while lexing.
pub enum LexError {
    /// A `.` in a number literal was not followed by a digit.
    InvalidDecimal {
        /// Offset of the missing digit.
        offset: usize,
    },
    /// A character literal had no content (`''`).
    EmptyCharacter {
        /// Offset of the closing quote that appeared too early.
        offset: usize,
    },
    /// A character literal contained an invalid character or more than one
    /// character.
    InvalidCharacter {
        /// Offset of the invalid character.
        offset: usize,
    },
    /// A character literal was never closed.
    UnterminatedCharacter {
        /// Offset where the closing quote was expected.
        offset: usize,
    },
    /// A string literal was never closed.
    UnterminatedString {
        /// Offset immediately past the last consumed character.
        offset: usize,
    },
    /// A backslash was followed by a character outside `bnrt'"\`.
    InvalidEscape {
        /// Offset of the character following the backslash.
        offset: usize,
    },
}

impl LexError {
    /// Returns the offset of the first invalid or missing character.
    ///
    /// # Example
    /// ```
    /// use ember::error::LexError;
    ///
    /// let error = LexError::UnterminatedString { offset: 4 };
    /// assert_eq!(error.offset(), 4);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::InvalidDecimal { offset }
            | Self::EmptyCharacter { offset }
            | Self::InvalidCharacter { offset }
            | Self::UnterminatedCharacter { offset }
            | Self::UnterminatedString { offset }
            | Self::InvalidEscape { offset } => *offset,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDecimal { offset } => {
                write!(f, "Error at offset {offset}: Expected a digit after the decimal point.")
            },
            Self::EmptyCharacter { offset } => {
                write!(f, "Error at offset {offset}: Character literal is empty.")
            },
            Self::InvalidCharacter { offset } => {
                write!(f, "Error at offset {offset}: Invalid character in character literal.")
            },
            Self::UnterminatedCharacter { offset } => write!(f,
                                                             "Error at offset {offset}: Expected closing quote of character literal."),
            Self::UnterminatedString { offset } => {
                write!(f, "Error at offset {offset}: Unterminated string literal.")
            },
            Self::InvalidEscape { offset } => write!(f,
                                                     "Error at offset {offset}: Invalid escape sequence, expected one of b n r t ' \" \\."),
        }
    }
}

impl std::error::Error for LexError {}
