/// Lexing errors.
///
/// Raised while turning source characters into tokens: unterminated literals,
/// invalid escapes and malformed numbers. Every variant carries the character
/// offset of the first invalid or missing character.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens. Every variant carries the offset of the offending token, or the
/// end-of-input offset when tokens ran out.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during interpretation, such as
/// operand kind mismatches, failed lookups, wrong arity or division by zero.
pub mod runtime_error;
/// Static analysis errors.
///
/// Raised by the analyzer when a typing or scoping rule is violated. Analysis
/// stops at the first error.
pub mod type_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use type_error::TypeError;
