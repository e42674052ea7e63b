use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Checks that a call supplies exactly `expected` arguments.
///
/// # Example
/// ```
/// use ember::{error::RuntimeError, interpreter::evaluator::utils::check_arity};
///
/// assert!(check_arity("f", &[1.into()], 1).is_ok());
/// assert_eq!(check_arity("f", &[], 2),
///            Err(RuntimeError::ArgumentCountMismatch { name:     "f".to_string(),
///                                                      expected: 2,
///                                                      found:    0, }));
/// ```
pub fn check_arity(name: &str, args: &[Value], expected: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                  expected,
                                                  found: args.len() })
    }
}

/// Builds the error for an operator applied to values it does not support.
pub fn invalid_operands(operator: impl std::fmt::Display,
                        left: &Value,
                        right: &Value)
                        -> RuntimeError {
    RuntimeError::InvalidOperands { operator: operator.to_string(),
                                    left:     left.kind_name(),
                                    right:    right.kind_name(), }
}
