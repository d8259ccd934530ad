//! NUL-terminated byte string operations.
//!
//! Inputs are byte slices holding C-style strings: the string ends at the
//! first NUL byte, or at the end of the slice when there is none.

/// Length of the terminator-delimited string held in `s`.
#[inline]
fn terminated_len(s: &[u8]) -> usize {
    s.iter().position(|&b| b == 0).unwrap_or(s.len())
}

/// Count occurrences of `target` before the terminator.
pub fn count_chars(s: &[u8], target: u8) -> usize {
    s[..terminated_len(s)].iter().filter(|&&b| b == target).count()
}

/// Reverse the string in place, leaving the terminator and anything after it
/// untouched.
pub fn reverse_string(s: &mut [u8]) {
    let len = terminated_len(s);
    s[..len].reverse();
}
