//! Translate sample library.
//!
//! A superset of the categories in `mathlib` plus declarations that exist to
//! show how enums, nested records, constants and macros cross the C ABI:
//! [`Color`], [`Status`], [`Person`] and [`Entity`] are not consumed by any
//! operation here.

pub mod error;
pub mod ops;
pub mod record;
pub mod text;
pub mod types;
pub mod vec2;

pub use error::SampleError;
pub use ops::{add_numbers, apply_op, double_array, multiply_numbers, sum_array};
pub use record::{Entity, Person};
pub use text::{string_copy, string_length};
pub use types::{min, square, Color, Status, COLOR_COUNT, MAX_SIZE, PERSON_NAME_CAPACITY, VERSION};
pub use vec2::{vec2_add, vec2_dot, vec2_scale, Vec2};
