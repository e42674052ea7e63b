use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::invalid_operands,
        },
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a comparison between two values.
    ///
    /// `==` and `!=` compare any two values structurally; values of
    /// different kinds are simply unequal. The ordering operators require
    /// both operands to be integers, decimals, characters or strings, and
    /// both of the same kind.
    ///
    /// # Example
    /// ```
    /// use ember::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let less = Interpreter::eval_comparison(BinaryOperator::Less, &'a'.into(), &'b'.into());
    /// assert_eq!(less, Ok(Value::from(true)));
    ///
    /// let mixed = Interpreter::eval_comparison(BinaryOperator::Equal, &1.into(), &"1".into());
    /// assert_eq!(mixed, Ok(Value::from(false)));
    ///
    /// assert!(Interpreter::eval_comparison(BinaryOperator::Less, &1.into(), &"1".into()).is_err());
    /// ```
    pub fn eval_comparison(operator: BinaryOperator,
                           left: &Value,
                           right: &Value)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let result = match operator {
            Equal => left == right,
            NotEqual => left != right,
            _ => {
                let ordering = Self::compare(left, right).ok_or_else(|| {
                                                             invalid_operands(operator, left, right)
                                                         })?;
                match operator {
                    Less => ordering == Ordering::Less,
                    LessEqual => ordering != Ordering::Greater,
                    Greater => ordering == Ordering::Greater,
                    GreaterEqual => ordering != Ordering::Less,
                    _ => return Err(invalid_operands(operator, left, right)),
                }
            },
        };

        Ok(Value::Boolean(result))
    }

    /// Orders two values of the same comparable kind.
    fn compare(left: &Value, right: &Value) -> Option<Ordering> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Decimal(a), Value::Decimal(b)) => Some(a.cmp(b)),
            (Value::Character(a), Value::Character(b)) => Some(a.cmp(b)),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}
