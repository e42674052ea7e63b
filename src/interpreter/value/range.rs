use std::iter;

use num_bigint::BigInt;
use num_traits::One;

/// A half-open run of integers `[start, end)`.
///
/// The elements are produced on demand, so the size of a range costs nothing
/// until it is iterated. A range whose end does not exceed its start is
/// empty.
#[derive(Debug, Clone, Eq)]
pub struct IntegerRange {
    start: BigInt,
    end:   BigInt,
}

impl IntegerRange {
    /// Creates the range from `start` (inclusive) to `end` (exclusive).
    #[must_use]
    pub const fn new(start: BigInt, end: BigInt) -> Self {
        Self { start, end }
    }

    /// Returns `true` if the range has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Iterates over the elements in ascending order.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::value::range::IntegerRange;
    /// use num_bigint::BigInt;
    ///
    /// let range = IntegerRange::new(BigInt::from(2), BigInt::from(5));
    /// let values = range.iter().collect::<Vec<_>>();
    ///
    /// assert_eq!(values, [BigInt::from(2), BigInt::from(3), BigInt::from(4)]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = BigInt> + '_ {
        let end = &self.end;
        iter::successors(Some(self.start.clone()), |n| Some(n + BigInt::one()))
            .take_while(move |n| n < end)
    }
}

/// Ranges are equal when they hold the same elements, so all empty ranges
/// are equal.
impl PartialEq for IntegerRange {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => true,
            (false, false) => self.start == other.start && self.end == other.end,
            _ => false,
        }
    }
}

impl std::fmt::Display for IntegerRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
