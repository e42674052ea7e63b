use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

/// Converts an arbitrary precision integer to `i32` if it fits.
///
/// ## Example
/// ```
/// use ember::util::num::bigint_to_i32_checked;
/// use num_bigint::BigInt;
///
/// assert_eq!(bigint_to_i32_checked(&BigInt::from(-7)), Some(-7));
/// assert_eq!(bigint_to_i32_checked(&BigInt::from(1_i64 << 31)), None);
/// ```
#[must_use]
pub fn bigint_to_i32_checked(value: &BigInt) -> Option<i32> {
    value.to_i32()
}

/// Converts a decimal to a finite `f64`.
///
/// Returns `None` when the magnitude exceeds the double precision range.
/// Precision beyond what a double can hold is rounded away, which is fine for
/// range checks and for native math routines.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use ember::util::num::decimal_to_f64_checked;
///
/// let small = BigDecimal::from_str("2.5").unwrap();
/// assert_eq!(decimal_to_f64_checked(&small), Some(2.5));
///
/// let huge = BigDecimal::from_str("1e400").unwrap();
/// assert_eq!(decimal_to_f64_checked(&huge), None);
/// ```
#[must_use]
pub fn decimal_to_f64_checked(value: &BigDecimal) -> Option<f64> {
    value.to_f64().filter(|v| v.is_finite())
}

/// Renders a decimal in plain (non-scientific) notation.
///
/// The output always contains a decimal point, so it lexes as a decimal
/// literal again: values without fractional digits get a trailing `.0`.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use ember::util::num::plain_decimal;
///
/// assert_eq!(plain_decimal(&BigDecimal::from_str("3.25").unwrap()), "3.25");
/// assert_eq!(plain_decimal(&BigDecimal::from_str("-0.005").unwrap()), "-0.005");
/// assert_eq!(plain_decimal(&BigDecimal::from_str("1e3").unwrap()), "1000.0");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn plain_decimal(value: &BigDecimal) -> String {
    let (digits, scale) = value.as_bigint_and_exponent();
    let magnitude = digits.magnitude().to_string();

    let body = if scale <= 0 {
        let zeros = "0".repeat(scale.unsigned_abs() as usize);
        format!("{magnitude}{zeros}.0")
    } else {
        let scale = scale.unsigned_abs() as usize;
        if magnitude.len() > scale {
            let (whole, fraction) = magnitude.split_at(magnitude.len() - scale);
            format!("{whole}.{fraction}")
        } else {
            let zeros = "0".repeat(scale - magnitude.len());
            format!("0.{zeros}{magnitude}")
        }
    };

    if digits.sign() == Sign::Minus {
        format!("-{body}")
    } else {
        body
    }
}
