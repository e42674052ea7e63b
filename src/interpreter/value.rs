/// Object instances.
///
/// Defines the `Object` type backing `Value::Object`: a reference to its
/// host-declared type and a mutable set of named fields.
pub mod object;

/// Lazy integer ranges.
///
/// Backs `Value::Range`, the runtime form of `IntegerIterable`.
pub mod range;

/// Core value representation.
///
/// Declares the `Value` enum, conversions into it, kind checks used by the
/// evaluator and its natural text form.
pub mod core;
