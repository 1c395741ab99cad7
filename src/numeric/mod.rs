// ============================================================================
// Numeric Module
// Exact rational arithmetic over signed 64-bit integers
// ============================================================================
//
// This module provides:
// - Fraction: numerator/denominator value type with canonical normalization
// - gcd/signum: integer helpers normalization is built on
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point operations
// - Checked arithmetic returns Result; operator traits panic
// - Construction is unchecked, normalization establishes invariants

mod errors;
mod fraction;
mod integer;

pub use errors::{NumericError, NumericResult};
pub use fraction::Fraction;
pub use integer::{gcd, signum};
