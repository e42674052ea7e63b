/// Token definitions.
///
/// Declares the `Token` struct and the closed set of token kinds produced by
/// the lexer.
pub mod token;

/// Character stream.
///
/// An indexed, lookahead-capable view over the source characters that also
/// tracks where the current token started.
pub mod char_stream;

/// Core lexing routines.
///
/// Contains the `Lexer`, its `peek` / `accept` primitives and one routine per
/// token kind.
pub mod core;

pub use self::core::{LexResult, Lexer, lex};
pub use token::{Token, TokenKind};
