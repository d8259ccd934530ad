//! 2D integer vectors.

use std::ops::{Add, Mul};

/// A vector with 32-bit signed components.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    /// Create a new vector.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        vec2_add(self, rhs)
    }
}

impl Mul<i32> for Vec2 {
    type Output = Vec2;

    fn mul(self, factor: i32) -> Vec2 {
        vec2_scale(self, factor)
    }
}

/// Component-wise sum.
pub fn vec2_add(a: Vec2, b: Vec2) -> Vec2 {
    Vec2 {
        x: a.x.wrapping_add(b.x),
        y: a.y.wrapping_add(b.y),
    }
}

/// Multiply both components by `factor`.
pub fn vec2_scale(v: Vec2, factor: i32) -> Vec2 {
    Vec2 {
        x: v.x.wrapping_mul(factor),
        y: v.y.wrapping_mul(factor),
    }
}

/// Dot product.
pub fn vec2_dot(a: Vec2, b: Vec2) -> i32 {
    a.x.wrapping_mul(b.x).wrapping_add(a.y.wrapping_mul(b.y))
}
