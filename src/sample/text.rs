//! Bounded NUL-terminated byte string operations.

use tracing::debug;

/// Length of the terminator-delimited string, or 0 when there is none.
///
/// A slice without a NUL byte is treated as terminated at its end.
pub fn string_length(s: Option<&[u8]>) -> usize {
    match s {
        Some(s) => s.iter().position(|&b| b == 0).unwrap_or(s.len()),
        None => 0,
    }
}

/// Copy `src` into `dest`, writing at most `max_len` bytes including the
/// terminator.
///
/// Does nothing when either buffer is absent or `max_len` is 0. Otherwise at
/// most `max_len - 1` bytes of the source string are copied, followed by a
/// NUL. The usable capacity never exceeds `dest.len()`, and bytes of `dest`
/// past the terminator are left untouched.
pub fn string_copy(dest: Option<&mut [u8]>, src: Option<&[u8]>, max_len: usize) {
    let (Some(dest), Some(src)) = (dest, src) else {
        return;
    };

    let capacity = max_len.min(dest.len());
    if capacity == 0 {
        return;
    }

    let src_len = string_length(Some(src));
    let n = src_len.min(capacity - 1);
    if n < src_len {
        debug!(src_len, capacity, "string_copy truncated source");
    }

    dest[..n].copy_from_slice(&src[..n]);
    dest[n] = 0;
}
