//! arith - Pure integer arithmetic helpers
//!
//! This crate provides:
//! - Binary operations over `i64`: `sum`, `sub`, `times`, `divide`
//! - A variadic sum (`sum_x` and the `sum_x!` macro)
//! - Overflow-detecting counterparts of every operation

pub mod constants;
pub mod domain;

// Re-export commonly used types
pub use constants::*;
pub use domain::checked::{checked_divide, checked_sub, checked_sum, checked_sum_x, checked_times};
pub use domain::error::{ArithError, Operation};
pub use domain::ops::{divide, sub, sum, sum_x, times};

/// Sum any number of values, written as a variadic call
///
/// `sum_x!(1, 3, 5)` expands to `sum_x([1, 3, 5])`; `sum_x!()` is the additive identity.
#[macro_export]
macro_rules! sum_x {
    () => {
        $crate::constants::ADDITIVE_IDENTITY
    };
    ($($value:expr),+ $(,)?) => {
        $crate::domain::ops::sum_x([$($value),+])
    };
}
