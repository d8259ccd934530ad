//! C-compatible type definitions and raw buffer helpers.

use libc::c_char;

/// Binary callback for `apply_operation`. Must not be null.
pub type MathBinaryOp = extern "C" fn(a: i32, b: i32) -> i32;

/// Binary callback for `apply_op`. May be null.
pub type SampleBinaryOp = Option<extern "C" fn(a: i32, b: i32) -> i32>;

/// Borrow `len` integers starting at `arr`.
///
/// # Safety
/// When `len` is nonzero, `arr` must be valid for `len` reads.
#[inline]
pub(crate) unsafe fn int_slice<'a>(arr: *const i32, len: usize) -> &'a [i32] {
    if len == 0 {
        return &[];
    }
    std::slice::from_raw_parts(arr, len)
}

/// Mutably borrow `len` integers starting at `arr`.
///
/// # Safety
/// When `len` is nonzero, `arr` must be valid for `len` reads and writes and
/// not aliased for the lifetime of the borrow.
#[inline]
pub(crate) unsafe fn int_slice_mut<'a>(arr: *mut i32, len: usize) -> &'a mut [i32] {
    if len == 0 {
        return &mut [];
    }
    std::slice::from_raw_parts_mut(arr, len)
}

/// Borrow the bytes of a NUL-terminated string, terminator excluded.
///
/// # Safety
/// `s` must be non-null and point to a NUL-terminated string.
#[inline]
pub(crate) unsafe fn c_str_bytes<'a>(s: *const c_char) -> &'a [u8] {
    std::slice::from_raw_parts(s as *const u8, libc::strlen(s))
}

/// Mutably borrow the bytes of a NUL-terminated string, terminator excluded.
///
/// # Safety
/// `s` must be non-null, NUL-terminated and writable.
#[inline]
pub(crate) unsafe fn c_str_bytes_mut<'a>(s: *mut c_char) -> &'a mut [u8] {
    std::slice::from_raw_parts_mut(s as *mut u8, libc::strlen(s))
}
