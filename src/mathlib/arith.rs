//! Integer arithmetic and callback invocation.

/// Add two integers, wrapping on overflow.
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Multiply two integers, wrapping on overflow.
#[inline]
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Iterative factorial.
///
/// Returns 1 for `n <= 1`. There is no overflow guard: from `n = 13` on the
/// result is the wrapped 32-bit product.
pub fn factorial(n: i32) -> i32 {
    if n <= 1 {
        return 1;
    }

    (2..=n).fold(1i32, |acc, i| acc.wrapping_mul(i))
}

/// Invoke `op` with `(a, b)` and return its result.
///
/// The callback is always required here; see `sample::apply_op` for the
/// variant that tolerates an absent one.
#[inline]
pub fn apply_operation<F>(a: i32, b: i32, op: F) -> i32
where
    F: FnOnce(i32, i32) -> i32,
{
    op(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_and_multiply() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-7, 3), -4);
        assert_eq!(multiply(6, 7), 42);
        assert_eq!(multiply(-4, 5), -20);
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(multiply(i32::MAX, 2), -2);
        assert_eq!(multiply(i32::MIN, -1), i32::MIN);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(-3), 1);
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(12), 479_001_600);
    }

    #[test]
    fn test_factorial_overflow() {
        // 13! = 6227020800, truncated to 32 bits
        assert_eq!(factorial(13), 1_932_053_504);
        assert_eq!(factorial(13), 6_227_020_800i64 as i32);
    }

    #[test]
    fn test_apply_operation() {
        assert_eq!(apply_operation(2, 3, |a, b| a + b), 5);
        assert_eq!(apply_operation(4, 5, multiply), 20);
    }

    proptest! {
        #[test]
        fn add_matches_wide_arithmetic(a: i32, b: i32) {
            prop_assert_eq!(add(a, b), (a as i64 + b as i64) as i32);
        }

        #[test]
        fn multiply_matches_wide_arithmetic(a: i32, b: i32) {
            prop_assert_eq!(multiply(a, b), (a as i64 * b as i64) as i32);
        }
    }
}
