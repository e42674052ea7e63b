/// Lexical scopes.
///
/// Defines the `Scope` chain shared by the analyzer and the interpreter.
pub mod scope;

/// Static types.
///
/// Declares `Type`, function signatures, native functions and host-declared
/// object types.
pub mod types;

/// Built-in registry.
///
/// The standard built-in functions and the `Registry` hosts extend with their
/// own functions and object types.
pub mod registry;
