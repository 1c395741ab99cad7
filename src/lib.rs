// ============================================================================
// Fraction Arithmetic Library
// Exact rational arithmetic with canonical normalization
// ============================================================================

//! # Fraction Arithmetic
//!
//! Exact fraction arithmetic over signed 64-bit integers.
//!
//! ## Features
//!
//! - **Canonical normalization**: positive denominator, coprime components,
//!   zero as `{0/1}`
//! - **Checked arithmetic** (`checked_add`, `checked_sub`, `checked_mul`)
//!   returning [`numeric::NumericError`] on a zero denominator or overflow
//! - **Operator traits** (`+`, `-`, `*`) that panic on the same conditions
//! - **Configurable calculator** with event reporting through `tracing`
//!
//! ## Example
//!
//! ```rust
//! use fraction_arith::prelude::*;
//! use std::sync::Arc;
//!
//! let half = Fraction::new(1, 2);
//! let third = Fraction::new(2, 6);
//!
//! // Value-level arithmetic
//! assert_eq!(half.checked_add(third).unwrap(), Fraction::new(5, 6));
//! assert_eq!((half * third).to_string(), "{1/6}");
//!
//! // Configured calculator reporting to a handler
//! let calculator = FractionCalculator::new(
//!     ArithmeticConfig::strict(),
//!     Arc::new(LoggingEventHandler),
//! );
//! assert_eq!(
//!     calculator.subtract(half, half).unwrap(),
//!     Fraction::ZERO
//! );
//! assert_eq!(
//!     calculator.normalize(Fraction::new(3, 0)),
//!     Err(NumericError::DivisionByZero)
//! );
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ArithmeticConfig, OperandNormalization};
    pub use crate::engine::{FractionCalculator, FractionCalculatorBuilder};
    pub use crate::interfaces::{
        ArithmeticEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, Operation,
    };
    pub use crate::numeric::{gcd, signum, Fraction, NumericError, NumericResult};
}
