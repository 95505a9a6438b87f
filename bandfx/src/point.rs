use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A point on the integer grid a gradient is queried over.
///
/// Vector helpers widen coordinates to `i128`, so differences, dot products
/// and squared distances of any two points are exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Produces the vector pointing from `origin` to this point.
    pub fn translate_to(self, origin: Point) -> Vector2<i128> {
        Vector2::<i128>::from(self) - Vector2::<i128>::from(origin)
    }

    pub fn dot_product(self, other: Point) -> i128 {
        Vector2::<i128>::from(self).dot(&Vector2::<i128>::from(other))
    }

    pub fn distance_squared(self, other: Point) -> i128 {
        let d = other.translate_to(self);
        d.dot(&d)
    }

    /// Euclidean distance, truncated towards zero.
    ///
    /// Band boundaries of radial gradients are defined in terms of this
    /// truncated value, so it must not be rounded.
    pub fn distance(self, other: Point) -> i64 {
        // at most 2^32 * sqrt(2), always fits
        self.distance_squared(other).unsigned_abs().isqrt() as i64
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for Vector2<i128> {
    fn from(point: Point) -> Self {
        Vector2::new(point.x as i128, point.y as i128)
    }
}
