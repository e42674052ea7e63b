/// Dispatch of binary operations.
///
/// Evaluates the operands and routes each operator to its handler.
pub mod core;

/// Arithmetic and string concatenation.
pub mod arithmetic;

/// Equality and ordering.
pub mod comparison;

/// Short-circuit `AND` and `OR`.
pub mod logic;
