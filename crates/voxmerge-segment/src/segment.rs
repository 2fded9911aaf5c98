//! A growable voxel set with a dilated bounding box.
//!
//! Inserting a voxel also inserts its 18-connected neighbourhood and grows
//! the box by one voxel past it on every axis. Two segments that are merely
//! near each other therefore overlap in both point set and box, which is
//! what lets the caller detect merge candidates without a full scan.

use indexmap::IndexSet;
use voxmerge_core::{BoundingBox, Point, SegmentId};

/// One tracked connected structure.
///
/// Segments only grow: points are never removed and the box never shrinks.
/// The point set iterates in first-insertion order.
#[derive(Clone, Debug)]
pub struct Segment {
    id: SegmentId,
    points: IndexSet<Point>,
    bbox: BoundingBox,
}

impl Segment {
    /// Create an empty segment. The box starts as [`BoundingBox::EMPTY`].
    pub fn new(id: SegmentId) -> Self {
        Self {
            id,
            points: IndexSet::new(),
            bbox: BoundingBox::EMPTY,
        }
    }

    /// The segment's identifier, fixed at construction.
    pub fn id(&self) -> SegmentId {
        self.id
    }

    /// The current enclosing box, dilated by one voxel.
    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    /// Number of distinct member voxels.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no voxel has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Member voxels in first-insertion order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Insert `p` with its 18 face/edge neighbours and grow the box to
    /// `p - 1 ..= p + 1`.
    ///
    /// Up to 19 coordinates are inserted; ones already present are ignored.
    pub fn add_point(&mut self, p: Point) {
        self.points.extend(p.neighbourhood());
        self.merge_bbox(&BoundingBox::dilated(p));
    }

    /// Grow the box in place to cover `other`.
    pub fn merge_bbox(&mut self, other: &BoundingBox) {
        self.bbox.merge(other);
    }

    /// Cheap pre-filter: `p` strictly inside the box on every axis.
    ///
    /// May report `true` for points that are not members, and reports
    /// `false` for points on the box boundary. Use [`contains`](Self::contains)
    /// for exact membership.
    pub fn within_bbox(&self, p: Point) -> bool {
        self.bbox.contains_exclusive(p)
    }

    /// Exact membership test.
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// Take ownership of `other`'s points and box.
    ///
    /// The receiver's id is unchanged. Registry bookkeeping (erasing
    /// `other`'s id) is the caller's job; see
    /// [`Registry::merge_segments`](crate::Registry::merge_segments).
    pub fn absorb(&mut self, other: Segment) {
        self.points.reserve(other.points.len());
        self.points.extend(other.points);
        self.bbox.merge(&other.bbox);
    }

    /// Consume the segment into its raw parts.
    pub fn into_parts(self) -> (SegmentId, IndexSet<Point>, BoundingBox) {
        (self.id, self.points, self.bbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use voxmerge_core::{EDGE_OFFSETS, FACE_OFFSETS};

    #[test]
    fn new_segment_is_empty() {
        let s = Segment::new(SegmentId(1));
        assert_eq!(s.id(), SegmentId(1));
        assert!(s.is_empty());
        assert!(s.bbox().is_empty());
        assert!(!s.within_bbox(Point::ORIGIN));
    }

    #[test]
    fn add_point_inserts_center_and_neighbourhood() {
        let mut s = Segment::new(SegmentId(1));
        let p = Point::new(5, 5, 5);
        s.add_point(p);

        assert_eq!(s.len(), 19);
        assert!(s.contains(p));
        assert!(s.contains(Point::new(4, 5, 5)));
        for (dx, dy, dz) in FACE_OFFSETS.into_iter().chain(EDGE_OFFSETS) {
            assert!(s.contains(p.offset(dx, dy, dz)));
        }
        assert!(!s.contains(Point::new(4, 4, 4)));
        assert!(!s.contains(Point::new(6, 6, 6)));
        assert_eq!(s.bbox().to_array(), [4, 4, 4, 6, 6, 6]);
    }

    #[test]
    fn repeated_insertion_is_idempotent() {
        let mut s = Segment::new(SegmentId(1));
        s.add_point(Point::new(1, 1, 1));
        let before = (s.len(), s.bbox());
        s.add_point(Point::new(1, 1, 1));
        assert_eq!((s.len(), s.bbox()), before);
    }

    #[test]
    fn adjacent_insertions_share_neighbours() {
        let mut s = Segment::new(SegmentId(1));
        s.add_point(Point::new(0, 0, 0));
        s.add_point(Point::new(1, 0, 0));
        // 19 + 19 minus the 10 voxels both neighbourhoods cover.
        assert_eq!(s.len(), 28);
    }

    #[test]
    fn within_bbox_is_open_interval() {
        let mut s = Segment::new(SegmentId(1));
        s.add_point(Point::new(5, 5, 5));
        assert!(!s.within_bbox(Point::new(4, 5, 5)));
        assert!(s.within_bbox(Point::new(5, 5, 5)));
        // Member, but on the boundary.
        assert!(s.contains(Point::new(5, 5, 6)));
        assert!(!s.within_bbox(Point::new(5, 5, 6)));
    }

    #[test]
    fn insertion_at_origin_keeps_box_ordered() {
        let mut s = Segment::new(SegmentId(1));
        s.add_point(Point::ORIGIN);
        assert_eq!(s.bbox().to_array(), [-1, -1, -1, 1, 1, 1]);
        assert!(s.within_bbox(Point::ORIGIN));
    }

    #[test]
    fn absorb_unions_points_and_boxes() {
        let mut s = Segment::new(SegmentId(1));
        s.add_point(Point::new(5, 5, 5));
        let mut t = Segment::new(SegmentId(2));
        t.add_point(Point::new(5, 5, 6));
        let t_points: Vec<_> = t.points().collect();

        s.absorb(t);
        assert_eq!(s.id(), SegmentId(1));
        assert_eq!(s.bbox().to_array(), [4, 4, 4, 6, 6, 7]);
        for p in t_points {
            assert!(s.contains(p));
        }
    }

    #[test]
    fn absorbing_empty_segment_changes_nothing() {
        let mut s = Segment::new(SegmentId(1));
        s.add_point(Point::new(3, 3, 3));
        let before = s.clone();
        s.absorb(Segment::new(SegmentId(2)));
        assert_eq!(s.bbox(), before.bbox());
        assert_eq!(s.len(), before.len());
    }

    #[test]
    fn points_iterate_in_insertion_order() {
        let mut s = Segment::new(SegmentId(1));
        s.add_point(Point::new(9, 9, 9));
        s.add_point(Point::new(0, 0, 0));
        let pts: Vec<_> = s.points().collect();
        assert_eq!(pts[0], Point::new(9, 9, 9));
        assert_eq!(pts[19], Point::new(0, 0, 0));
    }

    fn arb_point() -> impl Strategy<Value = Point> {
        (-64i32..64, -64i32..64, -64i32..64).prop_map(Point::from)
    }

    proptest! {
        #[test]
        fn inserted_points_are_members(points in prop::collection::vec(arb_point(), 1..40)) {
            let mut s = Segment::new(SegmentId(0));
            for &p in &points {
                s.add_point(p);
            }
            for &p in &points {
                prop_assert!(s.contains(p));
                for (dx, dy, dz) in voxmerge_core::NEIGHBOURHOOD_18 {
                    prop_assert!(s.contains(p.offset(dx, dy, dz)));
                }
                prop_assert!(s.bbox().encloses(&BoundingBox::dilated(p)));
            }
        }

        #[test]
        fn bbox_grows_monotonically(points in prop::collection::vec(arb_point(), 1..40)) {
            let mut s = Segment::new(SegmentId(0));
            let mut prev = s.bbox();
            for p in points {
                s.add_point(p);
                let next = s.bbox();
                prop_assert!(next.encloses(&prev), "{} does not enclose {}", next, prev);
                prev = next;
            }
        }

        #[test]
        fn every_member_lies_in_closed_box(points in prop::collection::vec(arb_point(), 1..20)) {
            let mut s = Segment::new(SegmentId(0));
            for p in points {
                s.add_point(p);
            }
            let bbox = s.bbox();
            for q in s.points() {
                prop_assert!(bbox.contains_inclusive(q));
            }
        }
    }
}
