//! FFI exports for the translate sample library.

use super::types::{c_str_bytes, int_slice, int_slice_mut, SampleBinaryOp};
use crate::sample::{self, Vec2};
use libc::{c_char, size_t};
use tracing::trace;

/// NUL-terminated copy of [`sample::VERSION`].
static VERSION_NUL: &[u8] = b"1.0.0\0";

/// Get the library version as a static NUL-terminated string.
#[no_mangle]
pub extern "C" fn sample_version() -> *const c_char {
    VERSION_NUL.as_ptr() as *const c_char
}

#[no_mangle]
pub extern "C" fn add_numbers(a: i32, b: i32) -> i32 {
    sample::add_numbers(a, b)
}

#[no_mangle]
pub extern "C" fn multiply_numbers(a: i32, b: i32) -> i32 {
    sample::multiply_numbers(a, b)
}

// ============================================================================
// Arrays
// ============================================================================

/// Sum `len` integers.
///
/// # Safety
/// `arr` must be valid for `len` reads. It may be null only when `len` is 0.
#[no_mangle]
pub unsafe extern "C" fn sum_array(arr: *const i32, len: size_t) -> i32 {
    sample::sum_array(int_slice(arr, len))
}

/// Double `len` integers in place.
///
/// # Safety
/// `arr` must be valid for `len` reads and writes. It may be null only when
/// `len` is 0.
#[no_mangle]
pub unsafe extern "C" fn double_array(arr: *mut i32, len: size_t) {
    sample::double_array(int_slice_mut(arr, len));
}

// ============================================================================
// Structs
// ============================================================================

#[no_mangle]
pub extern "C" fn vec2_add(a: Vec2, b: Vec2) -> Vec2 {
    sample::vec2_add(a, b)
}

#[no_mangle]
pub extern "C" fn vec2_scale(v: Vec2, factor: i32) -> Vec2 {
    sample::vec2_scale(v, factor)
}

#[no_mangle]
pub extern "C" fn vec2_dot(a: Vec2, b: Vec2) -> i32 {
    sample::vec2_dot(a, b)
}

// ============================================================================
// Strings
// ============================================================================

/// Length of a NUL-terminated string. Returns 0 for null.
///
/// # Safety
/// `s` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn string_length(s: *const c_char) -> size_t {
    if s.is_null() {
        trace!("string_length called with null string");
        return 0;
    }
    sample::string_length(Some(c_str_bytes(s)))
}

/// Copy at most `max_len - 1` bytes of `src` into `dest`, then terminate.
///
/// Never writes more than `max_len` bytes and never reads more than
/// `max_len - 1` source bytes. Does nothing when either pointer is null or
/// `max_len` is 0. Bytes are copied front to back one at a time, so a
/// destination that starts before an overlapping source is well defined.
///
/// # Safety
/// `src` must be null, or readable up to its terminator or `max_len - 1`
/// bytes, whichever comes first. `dest` must be null or valid for `max_len`
/// writes.
#[no_mangle]
pub unsafe extern "C" fn string_copy(dest: *mut c_char, src: *const c_char, max_len: size_t) {
    if dest.is_null() || src.is_null() || max_len == 0 {
        trace!(
            dest_null = dest.is_null(),
            src_null = src.is_null(),
            max_len,
            "string_copy skipped"
        );
        return;
    }

    // Raw pointer accesses only: the buffers may overlap.
    let mut i = 0;
    while i < max_len - 1 {
        let byte = src.add(i).read();
        if byte == 0 {
            break;
        }
        dest.add(i).write(byte);
        i += 1;
    }
    dest.add(i).write(0);
}

// ============================================================================
// Callbacks
// ============================================================================

/// Invoke `op(a, b)`, or return 0 when `op` is null.
#[no_mangle]
pub extern "C" fn apply_op(a: i32, b: i32, op: SampleBinaryOp) -> i32 {
    if op.is_none() {
        trace!(a, b, "apply_op called without a callback");
    }
    sample::apply_op(a, b, op.map(|f| move |x, y| f(x, y)))
}
