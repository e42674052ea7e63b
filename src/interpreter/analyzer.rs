/// Core analysis logic.
///
/// Contains the `Analyzer`, the `Analysis` side table it produces, scope
/// handling and the rules for fields and method declarations.
pub mod core;

/// Statement analysis.
///
/// Declarations, assignments, conditions, loops and returns.
pub mod statement;

/// Expression analysis.
///
/// Literal ranges, operator typing, name resolution and call checking.
pub mod expression;

/// Assignability between types.
pub mod assignable;

pub use self::core::{AnalyzeResult, Analysis, Analyzer, Binding, analyze};
