//! 2D integer points.

use std::ops::Add;

/// A point with 32-bit signed coordinates.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        point_add(self, rhs)
    }
}

/// Component-wise sum, wrapping on overflow.
pub fn point_add(a: Point, b: Point) -> Point {
    Point {
        x: a.x.wrapping_add(b.x),
        y: a.y.wrapping_add(b.y),
    }
}

/// Squared Euclidean distance. No square root is taken.
pub fn point_distance_squared(a: Point, b: Point) -> i32 {
    let dx = b.x.wrapping_sub(a.x);
    let dy = b.y.wrapping_sub(a.y);
    dx.wrapping_mul(dx).wrapping_add(dy.wrapping_mul(dy))
}
