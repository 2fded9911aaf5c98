//! Axis-aligned bounding boxes over voxel coordinates.
//!
//! Bounds are stored as `i64` so that dilating any `i32` coordinate by one
//! voxel stays representable: `i32::MIN - 1` and `i32::MAX + 1` both fit.
//! The empty sentinel has every minimum at `i64::MAX` and every maximum at
//! `i64::MIN`, so merging it into another box is a no-op.

use std::fmt;

use crate::point::Point;

/// An inclusive axis-aligned box `[min, max]` per axis.
///
/// Once non-empty, a box only ever grows: [`merge`](Self::merge) never
/// raises a minimum nor lowers a maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    min: [i64; 3],
    max: [i64; 3],
}

impl BoundingBox {
    /// The box that encloses nothing.
    pub const EMPTY: BoundingBox = BoundingBox {
        min: [i64::MAX; 3],
        max: [i64::MIN; 3],
    };

    /// Create a box from explicit inclusive bounds.
    ///
    /// No ordering check is made; a box with `min > max` on any axis is
    /// treated as empty.
    pub const fn from_bounds(min: [i64; 3], max: [i64; 3]) -> Self {
        Self { min, max }
    }

    /// The box `p - 1 ..= p + 1` on every axis.
    pub fn dilated(p: Point) -> Self {
        let [x, y, z] = p.to_array().map(i64::from);
        Self {
            min: [x - 1, y - 1, z - 1],
            max: [x + 1, y + 1, z + 1],
        }
    }

    /// Whether the box encloses nothing (`min > max` on some axis).
    pub fn is_empty(&self) -> bool {
        (0..3).any(|i| self.min[i] > self.max[i])
    }

    /// Inclusive minimum corner.
    pub fn min(&self) -> [i64; 3] {
        self.min
    }

    /// Inclusive maximum corner.
    pub fn max(&self) -> [i64; 3] {
        self.max
    }

    /// Bounds as `[min_x, min_y, min_z, max_x, max_y, max_z]`.
    pub fn to_array(&self) -> [i64; 6] {
        [
            self.min[0], self.min[1], self.min[2], self.max[0], self.max[1], self.max[2],
        ]
    }

    /// Grow in place to the elementwise min/max of `self` and `other`.
    pub fn merge(&mut self, other: &BoundingBox) {
        for i in 0..3 {
            self.min[i] = self.min[i].min(other.min[i]);
            self.max[i] = self.max[i].max(other.max[i]);
        }
    }

    /// The elementwise min/max of `self` and `other`.
    #[must_use]
    pub fn merged(mut self, other: &BoundingBox) -> Self {
        self.merge(other);
        self
    }

    /// Open-interval test: every coordinate strictly inside `(min, max)`.
    ///
    /// Points on the boundary report `false`. Used as a cheap pre-filter,
    /// not as exact segment membership.
    pub fn contains_exclusive(&self, p: Point) -> bool {
        let c = p.to_array().map(i64::from);
        (0..3).all(|i| c[i] > self.min[i] && c[i] < self.max[i])
    }

    /// Closed-interval test: every coordinate within `[min, max]`.
    pub fn contains_inclusive(&self, p: Point) -> bool {
        let c = p.to_array().map(i64::from);
        (0..3).all(|i| c[i] >= self.min[i] && c[i] <= self.max[i])
    }

    /// Whether `other` lies entirely within `self`. An empty `other` is
    /// enclosed by any box.
    pub fn encloses(&self, other: &BoundingBox) -> bool {
        other.is_empty()
            || (0..3).all(|i| self.min[i] <= other.min[i] && self.max[i] >= other.max[i])
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[empty]");
        }
        let [x0, y0, z0, x1, y1, z1] = self.to_array();
        write!(f, "[{x0}, {y0}, {z0}, {x1}, {y1}, {z1}]")
    }
}
