//! FFI Samples - small utility libraries exposed over the C ABI.
//!
//! This crate carries two parallel sample libraries, each usable from Rust
//! through a safe API and from C (or any language with C FFI) through
//! `#[no_mangle]` exports:
//!
//! - `mathlib`: integer arithmetic, array reduction and doubling, byte
//!   string counting and reversal, 2D points and a callback invoker
//! - `sample`: the same categories plus enums, a person record, a nested
//!   entity record, constants and macro replacements
//!
//! The two libraries stay separate on purpose. Their callback invokers differ:
//! `sample::apply_op` accepts an absent callback and returns 0, while
//! `mathlib::apply_operation` always requires one.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     FFI Layer (ffisamples.h)        │
//! │  extern "C" exports & repr(C) types │
//! └─────────────────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────┐
//! │            Safe Rust API            │
//! │  ┌───────────┐  ┌───────────────┐  │
//! │  │  mathlib  │  │    sample     │  │
//! │  │ (Point)   │  │ (Vec2, Color, │  │
//! │  │           │  │  Person, ...) │  │
//! │  └───────────┘  └───────────────┘  │
//! └─────────────────────────────────────┘
//! ```
//!
//! # FFI Usage
//!
//! ```c
//! int32_t data[3] = {1, 2, 3};
//! double_array(data, 3);              // data == {2, 4, 6}
//!
//! char buf[3];
//! string_copy(buf, "hello", sizeof buf); // buf == "he"
//!
//! int32_t r = apply_op(2, 3, NULL);   // r == 0
//! ```
//!
//! # Rust Usage
//!
//! ```
//! use ffisamples::{mathlib, sample};
//!
//! let mut data = [1, 2, 3];
//! mathlib::array_double(&mut data);
//! assert_eq!(data, [2, 4, 6]);
//!
//! assert_eq!(sample::apply_op(2, 3, Some(|a: i32, b: i32| a + b)), 5);
//! assert_eq!(sample::apply_op(2, 3, None::<fn(i32, i32) -> i32>), 0);
//! ```

pub mod ffi;
pub mod mathlib;
pub mod sample;

// Re-export commonly used items
pub use mathlib::Point;
pub use sample::{Color, Entity, Person, SampleError, Status, Vec2};

// Re-export the C exports for cbindgen and C-style callers
pub use ffi::mathlib::*;
pub use ffi::sample::*;
pub use ffi::types::*;
