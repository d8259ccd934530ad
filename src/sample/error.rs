//! Errors raised when decoding sample declarations.

use thiserror::Error;

/// Errors from converting raw values into sample types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// Discriminant does not name a color. `COLOR_COUNT` is rejected too.
    #[error("unknown color discriminant: {0}")]
    UnknownColor(i32),

    /// Discriminant does not name a status.
    #[error("unknown status discriminant: {0}")]
    UnknownStatus(i32),

    /// Person name bytes are not valid UTF-8.
    #[error("person name is not valid UTF-8")]
    NameNotUtf8,
}
