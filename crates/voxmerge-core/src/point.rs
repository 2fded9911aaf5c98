//! Integer voxel coordinates and the 18-connected neighbourhood.
//!
//! A [`Point`] addresses one voxel of the occupancy grid. The neighbourhood
//! used for segment dilation is 18-connected: the 6 face-adjacent and the
//! 12 edge-adjacent voxels, excluding the 8 corner diagonals.

use std::fmt;

/// The 6 face-adjacent offsets: one axis changes by ±1.
pub const FACE_OFFSETS: [(i32, i32, i32); 6] = [
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
];

/// The 12 edge-adjacent offsets: permutations of `(±1, ±1, 0)`.
pub const EDGE_OFFSETS: [(i32, i32, i32); 12] = [
    (-1, -1, 0),
    (-1, 1, 0),
    (1, -1, 0),
    (1, 1, 0),
    (-1, 0, -1),
    (-1, 0, 1),
    (1, 0, -1),
    (1, 0, 1),
    (0, -1, -1),
    (0, -1, 1),
    (0, 1, -1),
    (0, 1, 1),
];

/// All 18 face and edge offsets, faces first.
pub const NEIGHBOURHOOD_18: [(i32, i32, i32); 18] = [
    FACE_OFFSETS[0],
    FACE_OFFSETS[1],
    FACE_OFFSETS[2],
    FACE_OFFSETS[3],
    FACE_OFFSETS[4],
    FACE_OFFSETS[5],
    EDGE_OFFSETS[0],
    EDGE_OFFSETS[1],
    EDGE_OFFSETS[2],
    EDGE_OFFSETS[3],
    EDGE_OFFSETS[4],
    EDGE_OFFSETS[5],
    EDGE_OFFSETS[6],
    EDGE_OFFSETS[7],
    EDGE_OFFSETS[8],
    EDGE_OFFSETS[9],
    EDGE_OFFSETS[10],
    EDGE_OFFSETS[11],
];

/// A voxel coordinate in the occupancy grid.
///
/// Equality, ordering, and hashing are component-wise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl Point {
    /// The grid origin `(0, 0, 0)`.
    pub const ORIGIN: Point = Point { x: 0, y: 0, z: 0 };

    /// Create a point from its three coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The point shifted by `(dx, dy, dz)`, or `None` if any axis overflows `i32`.
    pub fn checked_offset(self, dx: i32, dy: i32, dz: i32) -> Option<Point> {
        Some(Point {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            z: self.z.checked_add(dz)?,
        })
    }

    /// The point shifted by `(dx, dy, dz)`.
    ///
    /// # Panics
    ///
    /// Panics on `i32` overflow. Use [`checked_offset`](Self::checked_offset)
    /// near the edge of the coordinate range.
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Point {
        self.checked_offset(dx, dy, dz)
            .unwrap_or_else(|| panic!("offset ({dx}, {dy}, {dz}) overflows {self}"))
    }

    /// The point itself followed by its 18 face/edge neighbours.
    ///
    /// Neighbours that fall outside the `i32` coordinate range are skipped,
    /// so this yields between 7 and 19 points (19 everywhere except the
    /// extreme corners of the coordinate space).
    pub fn neighbourhood(self) -> impl Iterator<Item = Point> {
        std::iter::once(self).chain(
            NEIGHBOURHOOD_18
                .into_iter()
                .filter_map(move |(dx, dy, dz)| self.checked_offset(dx, dy, dz)),
        )
    }

    /// Coordinates as an array `[x, y, z]`.
    pub fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[i32; 3]> for Point {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<(i32, i32, i32)> for Point {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self { x, y, z }
    }
}

impl From<Point> for [i32; 3] {
    fn from(p: Point) -> Self {
        p.to_array()
    }
}
