/// Numeric conversion and formatting helpers.
///
/// This module provides safe functions for narrowing arbitrary precision
/// numbers into machine types and for rendering decimals in plain notation.
/// All narrowing functions return `None` instead of silently losing data.
pub mod num;
