/// Built-in function implementations.
///
/// The bodies behind the standard registry entries `print`, `logarithm` and
/// `range`.
pub mod builtin;

/// Function and method calls.
///
/// Argument evaluation, lookup by name and arity, and invocation of native
/// and declared functions.
pub mod core;
