use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::{core::Value, range::IntegerRange},
    },
    util::num::decimal_to_f64_checked,
};

/// Prints a value to standard output, followed by a newline.
///
/// The value is written in its natural text form, so strings appear without
/// quotes.
///
/// # Example
/// ```
/// use ember::interpreter::{evaluator::function::builtin::print, value::core::Value};
///
/// // The function prints the value to stdout, the doctest only checks the
/// // returned result.
/// assert_eq!(print(&["hello".into()]), Ok(Value::Nil));
/// ```
pub fn print(args: &[Value]) -> EvalResult<Value> {
    check_arity("print", args, 1)?;

    println!("{}", args[0]);
    Ok(Value::Nil)
}

/// Computes the natural logarithm of a decimal.
///
/// The computation goes through `f64`. Arguments that do not fit a double,
/// and results that are not finite (the logarithm of zero or of a negative
/// number), are reported as invalid arguments.
///
/// # Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use ember::interpreter::{evaluator::function::builtin::logarithm, value::core::Value};
///
/// let one = Value::Decimal(BigDecimal::from_str("1.0").unwrap());
/// assert_eq!(logarithm(&[one]), Ok(Value::Decimal(BigDecimal::from(0))));
///
/// let zero = Value::Decimal(BigDecimal::from(0));
/// assert!(logarithm(&[zero]).is_err());
/// ```
pub fn logarithm(args: &[Value]) -> EvalResult<Value> {
    check_arity("logarithm", args, 1)?;

    let Value::Decimal(argument) = &args[0] else {
        return Err(RuntimeError::InvalidArgument { details: format!("logarithm expects a Decimal, found {}",
                                                                    args[0].kind_name()) });
    };

    let result = decimal_to_f64_checked(argument).map(f64::ln)
                                                 .filter(|r| r.is_finite())
                                                 .ok_or_else(|| RuntimeError::InvalidArgument {
                                                     details: format!("logarithm of {} is undefined",
                                                                      args[0]),
                                                 })?;

    BigDecimal::from_str(&result.to_string()).map(Value::Decimal)
                                             .map_err(|e| RuntimeError::InvalidArgument {
                                                 details: e.to_string(),
                                             })
}

/// Produces the integers from `start` (inclusive) to `end` (exclusive).
///
/// The range is lazy: its elements are produced one at a time as a `FOR`
/// loop asks for them. An empty range results when `end <= start`.
///
/// # Example
/// ```
/// use ember::interpreter::{
///     evaluator::function::builtin::range,
///     value::{core::Value, range::IntegerRange},
/// };
/// use num_bigint::BigInt;
///
/// let values = range(&[1.into(), 4.into()]).unwrap();
/// assert_eq!(values.to_string(), "[1, 2, 3]");
///
/// let empty = IntegerRange::new(BigInt::from(0), BigInt::from(0));
/// assert_eq!(range(&[3.into(), 3.into()]), Ok(Value::from(empty)));
/// ```
pub fn range(args: &[Value]) -> EvalResult<Value> {
    check_arity("range", args, 2)?;

    let start = args[0].as_integer()?;
    let end = args[1].as_integer()?;

    Ok(Value::from(IntegerRange::new(start.clone(), end.clone())))
}
