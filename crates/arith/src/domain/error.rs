//! Arithmetic error definitions

use std::fmt;

/// Operation that produced an error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Sum,
    Sub,
    Times,
    Divide,
    SumX,
}

impl Operation {
    /// Public function name of the operation
    pub fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Sub => "sub",
            Self::Times => "times",
            Self::Divide => "divide",
            Self::SumX => "sum_x",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Arithmetic errors
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
    /// Denominator was zero
    #[error("division by zero")]
    DivisionByZero,
    /// Exact result does not fit in `i64`
    #[error("integer overflow in {op}")]
    Overflow { op: Operation },
}

impl ArithError {
    /// Overflow error for the given operation
    pub const fn overflow(op: Operation) -> Self {
        Self::Overflow { op }
    }
}
