//! FFI exports for the utility library.

use super::types::{c_str_bytes, c_str_bytes_mut, int_slice, int_slice_mut, MathBinaryOp};
use crate::mathlib::{self, Point};
use libc::{c_char, size_t};

#[no_mangle]
pub extern "C" fn add(a: i32, b: i32) -> i32 {
    mathlib::add(a, b)
}

#[no_mangle]
pub extern "C" fn multiply(a: i32, b: i32) -> i32 {
    mathlib::multiply(a, b)
}

#[no_mangle]
pub extern "C" fn factorial(n: i32) -> i32 {
    mathlib::factorial(n)
}

// ============================================================================
// Arrays
// ============================================================================

/// Sum `len` integers.
///
/// # Safety
/// `arr` must be valid for `len` reads. It may be null only when `len` is 0.
#[no_mangle]
pub unsafe extern "C" fn array_sum(arr: *const i32, len: size_t) -> i32 {
    mathlib::array_sum(int_slice(arr, len))
}

/// Double `len` integers in place.
///
/// # Safety
/// `arr` must be valid for `len` reads and writes. It may be null only when
/// `len` is 0. Concurrent calls on the same buffer must be serialized by the
/// caller.
#[no_mangle]
pub unsafe extern "C" fn array_double(arr: *mut i32, len: size_t) {
    mathlib::array_double(int_slice_mut(arr, len));
}

// ============================================================================
// Strings
// ============================================================================

/// Count bytes equal to `target` in a NUL-terminated string.
///
/// # Safety
/// `s` must be non-null and NUL-terminated. There is no null guard here.
#[no_mangle]
pub unsafe extern "C" fn count_chars(s: *const c_char, target: c_char) -> size_t {
    mathlib::count_chars(c_str_bytes(s), target as u8)
}

/// Reverse a NUL-terminated string in place.
///
/// # Safety
/// `s` must be non-null, NUL-terminated and writable.
#[no_mangle]
pub unsafe extern "C" fn reverse_string(s: *mut c_char) {
    mathlib::reverse_string(c_str_bytes_mut(s));
}

// ============================================================================
// Structs
// ============================================================================

#[no_mangle]
pub extern "C" fn point_add(a: Point, b: Point) -> Point {
    mathlib::point_add(a, b)
}

#[no_mangle]
pub extern "C" fn point_distance_squared(a: Point, b: Point) -> i32 {
    mathlib::point_distance_squared(a, b)
}

// ============================================================================
// Callbacks
// ============================================================================

/// Invoke `op(a, b)`.
///
/// `op` is a non-nullable function pointer. Passing null from C is undefined
/// behavior; use `apply_op` for the null-tolerant variant.
#[no_mangle]
pub extern "C" fn apply_operation(a: i32, b: i32, op: MathBinaryOp) -> i32 {
    mathlib::apply_operation(a, b, |x, y| op(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    extern "C" fn sub(a: i32, b: i32) -> i32 {
        a - b
    }

    #[test]
    fn test_arrays_through_pointers() {
        let mut data = [1, 2, 3];
        unsafe {
            assert_eq!(array_sum(data.as_ptr(), data.len()), 6);
            array_double(data.as_mut_ptr(), data.len());
        }
        assert_eq!(data, [2, 4, 6]);
    }

    #[test]
    fn test_reverse_through_pointer() {
        let mut buf = *b"abc\0";
        unsafe {
            reverse_string(buf.as_mut_ptr() as *mut c_char);
        }
        assert_eq!(&buf, b"cba\0");
    }

    #[test]
    fn test_apply_operation() {
        assert_eq!(apply_operation(9, 4, sub), 5);
    }
}
