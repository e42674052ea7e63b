/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions:
/// arithmetic, concatenation, comparisons and the short-circuit logical
/// operators.
pub mod binary;

/// Core evaluation logic and scope management.
///
/// Contains the `Interpreter`, runtime variables and functions, expression
/// dispatch and the conversion of `main`'s result into an exit status.
pub mod core;

/// Statement execution.
///
/// Declarations, assignments, conditionals, `WHILE` loops, returns and
/// blocks, reported through `Completion` values.
pub mod statement;

/// Evaluation of `FOR` loops.
///
/// Binds each element of an iterable to the loop variable and executes the
/// loop body.
pub mod for_loop;

/// Utility functions for evaluation.
///
/// Provides helpers and reusable routines shared by evaluation logic.
pub mod utils;

/// Function evaluation.
///
/// Handles declared and built-in function calls, method calls on objects and
/// argument checking.
pub mod function;
