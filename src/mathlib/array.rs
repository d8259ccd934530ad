//! Array reduction and in-place transformation.

/// Sum all elements, wrapping on overflow. Empty input sums to 0.
pub fn array_sum(arr: &[i32]) -> i32 {
    arr.iter().fold(0i32, |sum, &v| sum.wrapping_add(v))
}

/// Double every element of the caller's buffer in place.
pub fn array_double(arr: &mut [i32]) {
    for v in arr.iter_mut() {
        *v = v.wrapping_mul(2);
    }
}
