use crate::{
    error::TypeError,
    interpreter::{analyzer::core::AnalyzeResult, environment::types::Type},
};

/// Returns `true` if a value of type `source` may be stored where `target`
/// is expected.
///
/// - `Any` accepts every type.
/// - `Comparable` accepts `Integer`, `Decimal`, `Character` and `String`.
/// - Every other type accepts only itself.
///
/// # Example
/// ```
/// use ember::interpreter::{analyzer::assignable::is_assignable, environment::types::Type};
///
/// assert!(is_assignable(&Type::Any, &Type::IntegerIterable));
/// assert!(is_assignable(&Type::Comparable, &Type::Character));
/// assert!(!is_assignable(&Type::Comparable, &Type::Boolean));
/// assert!(!is_assignable(&Type::Integer, &Type::Decimal));
/// ```
#[must_use]
pub fn is_assignable(target: &Type, source: &Type) -> bool {
    match target {
        Type::Any => true,
        Type::Comparable => source.is_comparable(),
        _ => target == source,
    }
}

/// Requires a value of type `source` to be assignable to `target`.
///
/// # Errors
/// `NotAssignable` naming both types when [`is_assignable`] does not hold.
pub fn require_assignable(target: &Type, source: &Type) -> AnalyzeResult<()> {
    if is_assignable(target, source) {
        Ok(())
    } else {
        Err(TypeError::NotAssignable { target: target.to_string(),
                                       found:  source.to_string(), })
    }
}
