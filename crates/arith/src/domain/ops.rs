//! Basic arithmetic operations
//!
//! All operations work on `i64` and use two's-complement wrapping when the
//! exact result is out of range, so results are identical in debug and release
//! builds. See [`crate::domain::checked`] for overflow detection.

use crate::constants::ADDITIVE_IDENTITY;
use crate::domain::error::ArithError;

/// Add two values
#[inline]
pub fn sum(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Subtract `b` from `a`
#[inline]
pub fn sub(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

/// Multiply two values
#[inline]
pub fn times(a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

/// Divide `a` by `b`, truncating toward zero
///
/// Returns `ArithError::DivisionByZero` when `b` is zero.
/// `i64::MIN / -1` wraps to `i64::MIN`.
#[inline]
pub fn divide(a: i64, b: i64) -> Result<i64, ArithError> {
    if b == 0 {
        return Err(ArithError::DivisionByZero);
    }
    Ok(a.wrapping_div(b))
}

/// Sum an arbitrary number of values
///
/// The empty sequence sums to 0. Wrapping addition is associative and
/// commutative, so the result does not depend on element order.
pub fn sum_x<I>(values: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().fold(ADDITIVE_IDENTITY, sum)
}
