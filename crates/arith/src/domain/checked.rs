//! Overflow-detecting arithmetic
//!
//! Each function returns the same value as its counterpart in
//! [`crate::domain::ops`] whenever the exact result fits in `i64`, and
//! `ArithError::Overflow` otherwise.

use crate::domain::error::{ArithError, Operation};

/// Add two values, failing on overflow
#[inline]
pub fn checked_sum(a: i64, b: i64) -> Result<i64, ArithError> {
    a.checked_add(b).ok_or_else(|| ArithError::overflow(Operation::Sum))
}

/// Subtract `b` from `a`, failing on overflow
#[inline]
pub fn checked_sub(a: i64, b: i64) -> Result<i64, ArithError> {
    a.checked_sub(b).ok_or_else(|| ArithError::overflow(Operation::Sub))
}

/// Multiply two values, failing on overflow
#[inline]
pub fn checked_times(a: i64, b: i64) -> Result<i64, ArithError> {
    a.checked_mul(b).ok_or_else(|| ArithError::overflow(Operation::Times))
}

/// Divide `a` by `b`, truncating toward zero
///
/// Fails with `DivisionByZero` when `b` is zero and with `Overflow` for
/// `i64::MIN / -1`.
#[inline]
pub fn checked_divide(a: i64, b: i64) -> Result<i64, ArithError> {
    if b == 0 {
        return Err(ArithError::DivisionByZero);
    }
    a.checked_div(b).ok_or_else(|| ArithError::overflow(Operation::Divide))
}

/// Sum an arbitrary number of values, failing if the total does not fit in `i64`
///
/// The running total is kept in `i128`, so a partial sum that leaves the `i64`
/// range and later comes back is not an error.
pub fn checked_sum_x<I>(values: I) -> Result<i64, ArithError>
where
    I: IntoIterator<Item = i64>,
{
    narrow_total(wide_sum(values))
}

/// Exact sum in `i128`
///
/// Cannot overflow for fewer than 2^64 elements.
fn wide_sum<I>(values: I) -> i128
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().map(i128::from).sum()
}

/// Convert an exact total back to `i64`
fn narrow_total(total: i128) -> Result<i64, ArithError> {
    i64::try_from(total).map_err(|_| ArithError::overflow(Operation::SumX))
}
