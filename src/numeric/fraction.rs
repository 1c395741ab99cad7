// ============================================================================
// Fraction
// Exact rational value over i64 with canonical normalization
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::integer::{gcd, signum};
use std::fmt;
use std::ops::{Add, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rational number stored as a signed numerator and denominator.
///
/// Construction never validates: a `Fraction` may carry a zero or negative
/// denominator, or an unreduced ratio. The canonical invariants
/// (`denominator > 0`, coprime components, zero as `{0/1}`) are established
/// by [`Fraction::normalize`], which every arithmetic operation runs on its
/// result.
///
/// Equality is structural: `{2/4}` and `{1/2}` compare unequal until both
/// are normalized.
///
/// # Example
/// ```
/// use fraction_arith::numeric::Fraction;
///
/// let a = Fraction::new(2, 3);
/// let b = Fraction::new(1, 5);
/// assert_eq!(a.checked_add(b).unwrap(), Fraction::new(13, 15));
/// assert_eq!((a - b).to_string(), "{7/15}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Zero in canonical form
    pub const ZERO: Self = Self::new(0, 1);

    /// One in canonical form
    pub const ONE: Self = Self::new(1, 1);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a fraction as given, without reducing or validating it.
    #[inline]
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Create `value/1`.
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self::new(value, 1)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn numerator(self) -> i64 {
        self.numerator
    }

    #[inline]
    pub const fn denominator(self) -> i64 {
        self.denominator
    }

    /// Check whether the fraction is already in canonical form.
    #[inline]
    pub const fn is_normalized(self) -> bool {
        if self.denominator <= 0 {
            return false;
        }
        if self.numerator == 0 {
            return self.denominator == 1;
        }
        gcd(self.numerator, self.denominator) == 1
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    /// Reduce to canonical form.
    ///
    /// The sign migrates to the numerator, the denominator becomes positive
    /// and both components are divided by their greatest common divisor.
    /// A zero numerator always yields `{0/1}`. Idempotent.
    ///
    /// # Errors
    /// - `DivisionByZero` if the denominator is zero
    /// - `Overflow` if a canonical component does not fit in i64
    ///   (only reachable with `i64::MIN` components)
    pub fn normalize(self) -> NumericResult<Self> {
        if self.denominator == 0 {
            return Err(NumericError::DivisionByZero);
        }

        let sign = signum(self.denominator) * signum(self.numerator);
        // Non-zero because the denominator is non-zero
        let divisor = gcd(self.numerator, self.denominator) as i128;

        // i128 intermediate: |i64::MIN| does not fit in i64
        let numerator = sign as i128 * self.numerator.unsigned_abs() as i128 / divisor;
        let denominator = self.denominator.unsigned_abs() as i128 / divisor;

        Ok(Self::new(narrow(numerator)?, narrow(denominator)?))
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// Only `self` is normalized before combining; `rhs` is used as given.
    /// When the normalized left denominator equals `rhs`'s raw denominator
    /// the numerators are summed directly, otherwise the operands are
    /// cross-multiplied. The result is normalized.
    ///
    /// # Errors
    /// - `DivisionByZero` if either denominator is zero
    /// - `Overflow` if an intermediate product or sum leaves the i64 range
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.combine(rhs, i64::checked_add)
    }

    /// Checked subtraction. Same operand handling as [`Fraction::checked_add`].
    ///
    /// # Errors
    /// - `DivisionByZero` if either denominator is zero
    /// - `Overflow` if an intermediate product or difference leaves the i64 range
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.combine(rhs, i64::checked_sub)
    }

    /// Checked multiplication.
    ///
    /// Normalizes `self`, multiplies component-wise with `rhs` as given and
    /// normalizes the product.
    ///
    /// # Errors
    /// - `DivisionByZero` if either denominator is zero
    /// - `Overflow` if a component product leaves the i64 range
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let lhs = self.normalize()?;
        rhs.reject_zero_denominator()?;
        let numerator = lhs
            .numerator
            .checked_mul(rhs.numerator)
            .ok_or(NumericError::Overflow)?;
        let denominator = lhs
            .denominator
            .checked_mul(rhs.denominator)
            .ok_or(NumericError::Overflow)?;

        Self::new(numerator, denominator).normalize()
    }

    /// Shared body of addition and subtraction.
    fn combine(self, rhs: Self, op: fn(i64, i64) -> Option<i64>) -> NumericResult<Self> {
        let lhs = self.normalize()?;
        rhs.reject_zero_denominator()?;

        let combined = if lhs.denominator == rhs.denominator {
            let numerator = op(lhs.numerator, rhs.numerator).ok_or(NumericError::Overflow)?;
            Self::new(numerator, lhs.denominator)
        } else {
            let left = lhs
                .numerator
                .checked_mul(rhs.denominator)
                .ok_or(NumericError::Overflow)?;
            let right = rhs
                .numerator
                .checked_mul(lhs.denominator)
                .ok_or(NumericError::Overflow)?;
            let denominator = lhs
                .denominator
                .checked_mul(rhs.denominator)
                .ok_or(NumericError::Overflow)?;
            Self::new(op(left, right).ok_or(NumericError::Overflow)?, denominator)
        };

        combined.normalize()
    }

    /// A zero rhs denominator always zeroes the combined one; report it
    /// before any component product can overflow.
    #[inline]
    fn reject_zero_denominator(self) -> NumericResult<()> {
        if self.denominator == 0 {
            Err(NumericError::DivisionByZero)
        } else {
            Ok(())
        }
    }
}

#[inline]
fn narrow(value: i128) -> NumericResult<i64> {
    i64::try_from(value).map_err(|_| NumericError::Overflow)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Fraction {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Fraction {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

// Infallible operators treat a zero denominator as a fatal precondition
// violation and panic. Use checked_* to recover.
impl Add for Fraction {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
            .unwrap_or_else(|e| panic!("fraction addition failed: {}", e))
    }
}

impl Sub for Fraction {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
            .unwrap_or_else(|e| panic!("fraction subtraction failed: {}", e))
    }
}

impl Mul for Fraction {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
            .unwrap_or_else(|e| panic!("fraction multiplication failed: {}", e))
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}/{}}}", self.numerator, self.denominator)
    }
}

// ============================================================================
// Conversion to rust_decimal (for API boundaries)
// ============================================================================

impl Fraction {
    /// Convert to rust_decimal::Decimal.
    ///
    /// Intended for display and debugging only; non-terminating expansions
    /// are rounded to the precision `Decimal` carries.
    ///
    /// # Errors
    /// - `DivisionByZero` if the denominator is zero
    /// - `Overflow` if the quotient is not representable
    pub fn to_decimal(self) -> NumericResult<rust_decimal::Decimal> {
        if self.denominator == 0 {
            return Err(NumericError::DivisionByZero);
        }
        rust_decimal::Decimal::from(self.numerator)
            .checked_div(rust_decimal::Decimal::from(self.denominator))
            .ok_or(NumericError::Overflow)
    }
}

// ============================================================================
// Tests
// ============================================================================
