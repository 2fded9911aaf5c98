//! Reusable voxel-blob fixtures.
//!
//! - [`ball`]: every voxel within a Euclidean radius of a centre.
//! - [`line`]: a straight run of voxels along one step vector.
//! - [`scattered`]: seeded pseudo-random voxels inside a cube.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use voxmerge_core::Point;

/// All voxels whose centre is within `radius` of `center` (inclusive).
///
/// Ordered z-then-y-then-x for determinism.
pub fn ball(center: Point, radius: i32) -> Vec<Point> {
    let r2 = i64::from(radius) * i64::from(radius);
    let mut out = Vec::new();
    for dz in -radius..=radius {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let d2 = i64::from(dx * dx) + i64::from(dy * dy) + i64::from(dz * dz);
                if d2 <= r2 {
                    out.push(center.offset(dx, dy, dz));
                }
            }
        }
    }
    out
}

/// `len` voxels starting at `start`, each shifted by `step` from the last.
pub fn line(start: Point, step: (i32, i32, i32), len: usize) -> Vec<Point> {
    let mut out = Vec::with_capacity(len);
    let mut p = start;
    for i in 0..len {
        if i > 0 {
            p = p.offset(step.0, step.1, step.2);
        }
        out.push(p);
    }
    out
}

/// `count` voxels drawn uniformly from `[0, extent)³` with a seeded ChaCha8 RNG.
///
/// Identical seeds produce identical sequences. Duplicates are possible.
///
/// # Panics
///
/// Panics if `extent` is zero or exceeds `i32::MAX`.
pub fn scattered(seed: u64, count: usize, extent: u32) -> Vec<Point> {
    assert!(extent > 0 && extent <= i32::MAX as u32, "extent {extent} out of range");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut coord = || (rng.next_u32() % extent) as i32;
    (0..count)
        .map(|_| {
            let (x, y, z) = (coord(), coord(), coord());
            Point::new(x, y, z)
        })
        .collect()
}
