use std::rc::Rc;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{object::Object, range::IntegerRange},
    },
    util::num::plain_decimal,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value a program can compute, store in a variable,
/// pass to a function or return from one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value. Returned by methods that end without `RETURN`.
    Nil,
    /// A boolean value (`TRUE` or `FALSE`).
    Boolean(bool),
    /// An arbitrary precision integer.
    Integer(BigInt),
    /// An arbitrary precision decimal.
    Decimal(BigDecimal),
    /// A single character.
    Character(char),
    /// A string of characters.
    String(String),
    /// A run of integers, iterated by `FOR`.
    Range(IntegerRange),
    /// An instance of a host-declared object type.
    Object(Rc<Object>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(BigInt::from(v))
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::Integer(v)
    }
}

impl From<BigDecimal> for Value {
    fn from(v: BigDecimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Character(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<IntegerRange> for Value {
    fn from(v: IntegerRange) -> Self {
        Self::Range(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Nil => Self::Nil,
            LiteralValue::Boolean(b) => Self::Boolean(*b),
            LiteralValue::Integer(n) => Self::Integer(n.clone()),
            LiteralValue::Decimal(d) => Self::Decimal(d.clone()),
            LiteralValue::Character(c) => Self::Character(*c),
            LiteralValue::String(s) => Self::String(s.clone()),
        }
    }
}

impl Value {
    /// Returns the name of the value's runtime kind, as used in error
    /// messages.
    ///
    /// Objects report the name of their type.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::value::{core::Value, range::IntegerRange};
    /// use num_bigint::BigInt;
    ///
    /// assert_eq!(Value::from(3).kind_name(), "Integer");
    ///
    /// let range = IntegerRange::new(BigInt::from(0), BigInt::from(2));
    /// assert_eq!(Value::from(range).kind_name(), "IntegerIterable");
    /// ```
    #[must_use]
    pub fn kind_name(&self) -> String {
        match self {
            Self::Nil => "Nil".to_string(),
            Self::Boolean(_) => "Boolean".to_string(),
            Self::Integer(_) => "Integer".to_string(),
            Self::Decimal(_) => "Decimal".to_string(),
            Self::Character(_) => "Character".to_string(),
            Self::String(_) => "String".to_string(),
            Self::Range(_) => "IntegerIterable".to_string(),
            Self::Object(object) => object.object_type().name().to_string(),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for conditions and the logical operators.
    pub fn as_boolean(&self) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { found: self.kind_name() }),
        }
    }

    /// Borrows the integer inside the value, or returns an error.
    pub fn as_integer(&self) -> EvalResult<&BigInt> {
        match self {
            Self::Integer(n) => Ok(n),
            _ => Err(RuntimeError::ExpectedInteger { found: self.kind_name() }),
        }
    }

    /// Borrows the range inside the value, or returns an error.
    pub fn as_range(&self) -> EvalResult<&IntegerRange> {
        match self {
            Self::Range(range) => Ok(range),
            _ => Err(RuntimeError::ExpectedIterable { found: self.kind_name() }),
        }
    }

    /// Borrows the object inside the value, or returns an error.
    pub fn as_object(&self) -> EvalResult<&Rc<Object>> {
        match self {
            Self::Object(object) => Ok(object),
            _ => Err(RuntimeError::NotAnObject { found: self.kind_name() }),
        }
    }
}

/// Formats a value in its natural text form.
///
/// This is what `print` writes and what string concatenation appends:
/// `NIL`, `TRUE` and `FALSE` for the keyword values, numbers in plain
/// notation, characters and strings without quotes or escapes.
///
/// # Example
/// ```
/// use ember::interpreter::value::{core::Value, range::IntegerRange};
/// use num_bigint::BigInt;
///
/// assert_eq!(Value::Nil.to_string(), "NIL");
/// assert_eq!(Value::from(true).to_string(), "TRUE");
/// assert_eq!(Value::from('x').to_string(), "x");
///
/// let range = IntegerRange::new(BigInt::from(1), BigInt::from(3));
/// assert_eq!(Value::from(range).to_string(), "[1, 2]");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "NIL"),
            Self::Boolean(true) => write!(f, "TRUE"),
            Self::Boolean(false) => write!(f, "FALSE"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{}", plain_decimal(d)),
            Self::Character(c) => write!(f, "{c}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Range(range) => write!(f, "{range}"),
            Self::Object(object) => write!(f, "{object}"),
        }
    }
}
