// ============================================================================
// Integer Helpers
// Sign and greatest-common-divisor primitives used by normalization
// ============================================================================

/// Sign of `x`: `-1`, `0` or `+1`.
#[inline]
pub const fn signum(x: i64) -> i64 {
    if x == 0 {
        0
    } else if x < 0 {
        -1
    } else {
        1
    }
}

/// Greatest common divisor of `a` and `b`, always non-negative.
///
/// Works on magnitudes, so negative operands are accepted.
/// `gcd(0, n) == |n|`, `gcd(n, 0) == |n|` and `gcd(0, 0) == 0`.
///
/// Returned as `u64` because `gcd(i64::MIN, 0)` is `2^63`.
#[inline]
pub const fn gcd(a: i64, b: i64) -> u64 {
    let mut x = a.unsigned_abs();
    let mut y = b.unsigned_abs();
    while y != 0 {
        let r = x % y;
        x = y;
        y = r;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    #[test]
    fn test_signum() {
        assert_eq!(signum(10), 1);
        assert_eq!(signum(-12), -1);
        assert_eq!(signum(0), 0);
        assert_eq!(signum(i64::MIN), -1);
        assert_eq!(signum(i64::MAX), 1);
    }

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(13, 15), 1);
        assert_eq!(gcd(9, 3), 3);
    }

    #[test]
    fn test_gcd_negative_operands() {
        assert_eq!(gcd(-4, 2), 2);
        assert_eq!(gcd(4, -2), 2);
        assert_eq!(gcd(-4, -6), 2);
    }

    #[test]
    fn test_gcd_zero() {
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(-5, 0), 5);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(i64::MIN, 0), 1u64 << 63);
    }

    #[test]
    fn test_gcd_divides_both() {
        fn prop(a: i64, b: i64) -> TestResult {
            let g = gcd(a, b);
            if g == 0 {
                return TestResult::from_bool(a == 0 && b == 0);
            }
            TestResult::from_bool(
                a.unsigned_abs() % g == 0 && b.unsigned_abs() % g == 0,
            )
        }
        quickcheck(prop as fn(i64, i64) -> TestResult);
    }

    #[test]
    fn test_gcd_symmetric() {
        fn prop(a: i64, b: i64) -> bool {
            gcd(a, b) == gcd(b, a)
        }
        quickcheck(prop as fn(i64, i64) -> bool);
    }

    #[test]
    fn test_signum_times_value_is_magnitude() {
        fn prop(x: i32) -> bool {
            let x = x as i64;
            signum(x) * x == x.abs()
        }
        quickcheck(prop as fn(i32) -> bool);
    }
}
