//! Arithmetic, array and callback operations.

/// Add two integers, wrapping on overflow.
#[inline]
pub fn add_numbers(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Multiply two integers, wrapping on overflow.
#[inline]
pub fn multiply_numbers(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Sum all elements, wrapping on overflow. Empty input sums to 0.
pub fn sum_array(arr: &[i32]) -> i32 {
    arr.iter().fold(0i32, |sum, &v| sum.wrapping_add(v))
}

/// Double every element of the caller's buffer in place.
pub fn double_array(arr: &mut [i32]) {
    arr.iter_mut().for_each(|v| *v = v.wrapping_mul(2));
}

/// Invoke `op` with `(a, b)`, or return 0 without invoking anything when
/// there is no callback.
#[inline]
pub fn apply_op<F>(a: i32, b: i32, op: Option<F>) -> i32
where
    F: FnOnce(i32, i32) -> i32,
{
    op.map_or(0, |f| f(a, b))
}
