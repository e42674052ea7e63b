/// Token stream.
///
/// An indexed, lookahead-capable view over the lexer's tokens and the
/// `TokenPattern`s they are matched against.
pub mod token_stream;

/// Core parsing logic.
///
/// Contains the `Parser` itself, its lookahead helpers, error construction and
/// the top level rules for sources, fields and methods.
pub mod core;

/// Statement parsing.
///
/// Declarations, assignments, conditionals, loops and returns.
pub mod statement;

/// Binary expression parsing.
///
/// Implements the precedence levels from logical connectives down to
/// multiplication.
pub mod binary;

/// Primary expression parsing.
///
/// Literals, groups, names, calls and `.`-qualified member access.
pub mod primary;

/// Parser utilities.
///
/// Comma-separated lists and literal unescaping.
pub mod utils;

pub use self::core::{MAX_NESTING_DEPTH, ParseResult, Parser, parse};
pub use token_stream::{TokenPattern, TokenStream};
