//! Arithmetic operators and their application.

use thiserror::Error;

/// Errors an operator can produce instead of a numeric result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Division where the divisor evaluates to zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// The four supported arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Glyph used when composing the display string.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => 'x',
            Self::Divide => '/',
        }
    }

    /// Apply the operator to two operand values.
    ///
    /// Division checks the divisor's value, not its text, so `"0."` and
    /// `"0.00"` divisors are rejected the same as `"0"`.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ArithmeticError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    Err(ArithmeticError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}
