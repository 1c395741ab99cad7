// ============================================================================
// Numeric Errors
// Error types for rational arithmetic operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during fraction arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// A fraction with a zero denominator reached normalization
    DivisionByZero,
    /// An intermediate or canonical component left the i64 range
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => {
                write!(f, "division by zero: denominator is not allowed to be zero")
            },
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: component exceeded i64 range")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
