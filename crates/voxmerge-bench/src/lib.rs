//! Benchmark profiles for voxmerge.
//!
//! - [`packing_profile`]: seeded grains scattered through a cubic domain
//! - [`place_grain`]: the rasterizer's insert-then-merge step for one grain

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use voxmerge_core::{Point, SegmentId};
use voxmerge_segment::{Registry, RegistryError};
use voxmerge_test_utils::fixtures::{ball, scattered};

/// Voxelized grains for a packing benchmark.
///
/// `grains` balls of `radius` voxels, centres drawn with `seed` from the
/// interior of an `extent`³ domain so no voxel leaves it.
pub fn packing_profile(seed: u64, grains: usize, radius: i32, extent: u32) -> Vec<Vec<Point>> {
    let margin = radius.max(0);
    let inner = extent.saturating_sub(2 * margin as u32).max(1);
    scattered(seed, grains, inner)
        .into_iter()
        .map(|c| ball(c.offset(margin, margin, margin), radius))
        .collect()
}

/// Create segment `id` from `voxels`, then merge in every segment that
/// already owns one of them.
///
/// Returns whether any merge happened.
pub fn place_grain(
    registry: &mut Registry,
    id: SegmentId,
    voxels: &[Point],
) -> Result<bool, RegistryError> {
    registry.create_segment(id)?;
    registry.add_points(id, voxels.iter().copied())?;

    let mut touching: Vec<SegmentId> = voxels
        .iter()
        .flat_map(|&p| registry.segments_containing(p))
        .filter(|&other| other != id)
        .collect();
    if touching.is_empty() {
        return Ok(false);
    }
    touching.sort_unstable();
    touching.dedup();
    registry.merge_segments(id, &touching)
}
