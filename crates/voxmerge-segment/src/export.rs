//! Owned per-segment output records.

use voxmerge_core::{BoundingBox, Point, SegmentId};

use crate::segment::Segment;

/// The exported state of one surviving segment.
///
/// This is the hand-off to whatever writer encodes the final registry
/// (image stacks, point clouds, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentExport {
    /// Segment identifier.
    pub id: SegmentId,
    /// Dilated enclosing box.
    pub bbox: BoundingBox,
    /// Member voxels in first-insertion order.
    pub points: Vec<Point>,
}

impl From<&Segment> for SegmentExport {
    fn from(segment: &Segment) -> Self {
        Self {
            id: segment.id(),
            bbox: segment.bbox(),
            points: segment.points().collect(),
        }
    }
}

impl From<Segment> for SegmentExport {
    fn from(segment: Segment) -> Self {
        let (id, points, bbox) = segment.into_parts();
        Self {
            id,
            bbox,
            points: points.into_iter().collect(),
        }
    }
}
