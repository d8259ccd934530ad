//! Hand-written utility library: arithmetic, arrays, byte strings and points.
//!
//! All integer arithmetic is 32-bit signed with wraparound on overflow.

pub mod arith;
pub mod array;
pub mod point;
pub mod text;

pub use arith::{add, apply_operation, factorial, multiply};
pub use array::{array_double, array_sum};
pub use point::{point_add, point_distance_squared, Point};
pub use text::{count_chars, reverse_string};
