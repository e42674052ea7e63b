use std::num::NonZeroU64;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::Zero;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::invalid_operands,
        },
        value::core::Value,
    },
};

/// Significant digits kept by decimal division.
const DIVISION_PRECISION: NonZeroU64 = NonZeroU64::MIN.saturating_add(33);

impl Interpreter {
    /// Evaluates `+`, `-`, `*` or `/`.
    ///
    /// `+` concatenates the natural text forms when either operand is a
    /// string. Otherwise both operands must be integers or both decimals.
    ///
    /// # Example
    /// ```
    /// use ember::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let sum = Interpreter::eval_arithmetic(BinaryOperator::Add, &"a".into(), &1.into());
    /// assert_eq!(sum, Ok(Value::from("a1")));
    ///
    /// let quotient = Interpreter::eval_arithmetic(BinaryOperator::Div, &(-7).into(), &2.into());
    /// assert_eq!(quotient, Ok(Value::from(-3)));
    /// ```
    pub fn eval_arithmetic(operator: BinaryOperator,
                           left: &Value,
                           right: &Value)
                           -> EvalResult<Value> {
        if operator == BinaryOperator::Add
           && (matches!(left, Value::String(_)) || matches!(right, Value::String(_)))
        {
            return Ok(Value::String(format!("{left}{right}")));
        }

        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Self::eval_integer(operator, a, b),
            (Value::Decimal(a), Value::Decimal(b)) => Self::eval_decimal(operator, a, b),
            _ => Err(invalid_operands(operator, left, right)),
        }
    }

    /// Integer arithmetic. Division truncates toward zero.
    fn eval_integer(operator: BinaryOperator, a: &BigInt, b: &BigInt) -> EvalResult<Value> {
        let result = match operator {
            BinaryOperator::Add => a + b,
            BinaryOperator::Sub => a - b,
            BinaryOperator::Mul => a * b,
            BinaryOperator::Div => {
                if b.is_zero() {
                    return Err(RuntimeError::DivisionByZero);
                }
                a / b
            },
            _ => return Err(invalid_operands(operator, &a.clone().into(), &b.clone().into())),
        };

        Ok(Value::Integer(result))
    }

    /// Decimal arithmetic.
    ///
    /// Quotients are rounded half-to-even to 34 significant digits, with
    /// trailing zeros removed.
    ///
    /// # Example
    /// ```
    /// use std::str::FromStr;
    ///
    /// use bigdecimal::BigDecimal;
    /// use ember::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let decimal = |text: &str| Value::Decimal(BigDecimal::from_str(text).unwrap());
    ///
    /// let third = Interpreter::eval_arithmetic(BinaryOperator::Div, &decimal("1.0"), &decimal("3.0"));
    /// assert_eq!(third, Ok(decimal("0.3333333333333333333333333333333333")));
    ///
    /// let half = Interpreter::eval_arithmetic(BinaryOperator::Div, &decimal("1.0"), &decimal("2.0"));
    /// assert_eq!(half, Ok(decimal("0.5")));
    /// ```
    fn eval_decimal(operator: BinaryOperator,
                    a: &BigDecimal,
                    b: &BigDecimal)
                    -> EvalResult<Value> {
        let result = match operator {
            BinaryOperator::Add => a + b,
            BinaryOperator::Sub => a - b,
            BinaryOperator::Mul => a * b,
            BinaryOperator::Div => {
                if b.is_zero() {
                    return Err(RuntimeError::DivisionByZero);
                }
                (a / b).with_precision_round(DIVISION_PRECISION, RoundingMode::HalfEven)
                       .normalized()
            },
            _ => {
                return Err(invalid_operands(operator,
                                            &a.clone().into(),
                                            &b.clone().into()));
            },
        };

        Ok(Value::Decimal(result))
    }
}
