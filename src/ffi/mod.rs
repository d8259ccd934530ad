//! FFI (Foreign Function Interface) layer for C bindings.
//!
//! Exports both sample libraries under their C names and
//! signatures. Exports delegate to the safe Rust API after turning raw
//! pointer/length pairs into slices, except `string_copy`, which works on raw
//! pointers so that it reads no further than the C bound and tolerates
//! overlapping buffers.

pub mod mathlib;
pub mod sample;
pub mod types;

pub use types::{MathBinaryOp, SampleBinaryOp};
