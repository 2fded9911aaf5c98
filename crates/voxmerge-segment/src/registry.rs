//! The id-indexed owner of all active segments.
//!
//! [`Registry`] is the arena: segments live in it by [`SegmentId`] and are
//! reached only through it. Merging moves the absorbed segment out of the
//! map and into the receiver, so an absorbed id cannot be dereferenced
//! afterwards; it simply resolves to `None`.

use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};
use voxmerge_core::{Point, SegmentId};

use crate::config::{ConfigError, RegistryConfig, VoxelDomain};
use crate::error::RegistryError;
use crate::export::SegmentExport;
use crate::segment::Segment;
use crate::LOG_TARGET;

/// Mapping from id to active [`Segment`], in creation order.
///
/// Passed explicitly to everything that needs it: constructed when the
/// pipeline starts, mutated while geometry is rasterized, and consumed by
/// [`into_export`](Self::into_export) at the end.
#[derive(Clone, Debug)]
pub struct Registry {
    segments: IndexMap<SegmentId, Segment>,
    domain: Option<VoxelDomain>,
}

impl Registry {
    /// Create an empty registry after validating `config`.
    pub fn new(config: RegistryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            segments: IndexMap::with_capacity(config.initial_capacity),
            domain: config.domain,
        })
    }

    /// The configured voxel domain, if any.
    pub fn domain(&self) -> Option<VoxelDomain> {
        self.domain
    }

    /// Start tracking a new, empty segment under `id`.
    ///
    /// Fails with [`RegistryError::DuplicateSegment`] if `id` is active.
    /// An id freed by a merge may be used again.
    pub fn create_segment(&mut self, id: SegmentId) -> Result<&mut Segment, RegistryError> {
        match self.segments.entry(id) {
            indexmap::map::Entry::Occupied(_) => Err(RegistryError::DuplicateSegment { id }),
            indexmap::map::Entry::Vacant(slot) => {
                trace!(target: LOG_TARGET, %id, "created segment");
                Ok(slot.insert(Segment::new(id)))
            }
        }
    }

    /// Insert one occupied voxel into segment `id`.
    ///
    /// See [`Segment::add_point`] for the dilation applied.
    pub fn add_point(&mut self, id: SegmentId, p: Point) -> Result<(), RegistryError> {
        check_domain(self.domain, id, p)?;
        let segment = self
            .segments
            .get_mut(&id)
            .ok_or(RegistryError::UnknownSegment { id })?;
        segment.add_point(p);
        Ok(())
    }

    /// Insert a run of voxels into segment `id`.
    ///
    /// Stops at the first point outside the domain; points before it stay
    /// inserted.
    pub fn add_points<I>(&mut self, id: SegmentId, points: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = Point>,
    {
        let domain = self.domain;
        let segment = self
            .segments
            .get_mut(&id)
            .ok_or(RegistryError::UnknownSegment { id })?;
        for p in points {
            check_domain(domain, id, p)?;
            segment.add_point(p);
        }
        Ok(())
    }

    /// Fold every segment in `others` into `receiver`.
    ///
    /// - An empty `others` returns `Ok(false)` and mutates nothing.
    /// - Entries equal to `receiver` are skipped.
    /// - Entries with no active segment (already absorbed, listed twice,
    ///   never created) are skipped.
    /// - Every other entry has its points and box moved into `receiver`
    ///   and its id erased from the registry.
    ///
    /// Returns `Ok(true)` for any non-empty `others`, including a list that
    /// names only `receiver`. An unknown `receiver` with a non-empty list is
    /// [`RegistryError::UnknownSegment`], and nothing is erased.
    pub fn merge_segments(
        &mut self,
        receiver: SegmentId,
        others: &[SegmentId],
    ) -> Result<bool, RegistryError> {
        if others.is_empty() {
            return Ok(false);
        }
        let target = self
            .segments
            .get_index_of(&receiver)
            .ok_or(RegistryError::UnknownSegment { id: receiver })?;

        // Absorbed slots are erased by one `retain` pass: O(n) per merge.
        let mut absorbed: IndexSet<SegmentId> = IndexSet::new();
        for &id in others {
            if id == receiver || absorbed.contains(&id) {
                continue;
            }
            let Some(slot) = self.segments.get_mut(&id) else {
                trace!(target: LOG_TARGET, %id, "merge candidate not active, skipped");
                continue;
            };
            let other = std::mem::replace(slot, Segment::new(id));
            self.segments[target].absorb(other);
            absorbed.insert(id);
        }
        if !absorbed.is_empty() {
            self.segments.retain(|id, _| !absorbed.contains(id));
        }

        debug!(
            target: LOG_TARGET,
            %receiver,
            absorbed = absorbed.len(),
            remaining = self.segments.len(),
            "merged segments"
        );
        Ok(true)
    }

    /// The active segment for `id`.
    pub fn get(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(&id)
    }

    /// Mutable access to the active segment for `id`.
    ///
    /// The borrow ends before any merge can run, so the handle cannot
    /// outlive an absorption.
    pub fn get_mut(&mut self, id: SegmentId) -> Option<&mut Segment> {
        self.segments.get_mut(&id)
    }

    /// Whether `id` names an active segment.
    pub fn contains_segment(&self, id: SegmentId) -> bool {
        self.segments.contains_key(&id)
    }

    /// Number of active segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no segment is active.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Active ids in creation order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = SegmentId> + '_ {
        self.segments.keys().copied()
    }

    /// Active segments in creation order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Segment> + '_ {
        self.segments.values()
    }

    /// Total member voxels across all active segments.
    pub fn point_count(&self) -> usize {
        self.segments.values().map(Segment::len).sum()
    }

    /// Ids whose box strictly contains `p` (the cheap pre-filter).
    ///
    /// A hit is a merge *candidate*, not proof of membership.
    pub fn candidates_near(&self, p: Point) -> SmallVec<[SegmentId; 4]> {
        self.segments
            .values()
            .filter(|s| s.within_bbox(p))
            .map(Segment::id)
            .collect()
    }

    /// Ids of the segments that have `p` as a member.
    ///
    /// Filters on the closed box first, since members can sit on the box
    /// boundary where [`candidates_near`](Self::candidates_near) misses them.
    pub fn segments_containing(&self, p: Point) -> SmallVec<[SegmentId; 4]> {
        self.segments
            .values()
            .filter(|s| s.bbox().contains_inclusive(p) && s.contains(p))
            .map(Segment::id)
            .collect()
    }

    /// Snapshot every active segment, in creation order.
    pub fn export(&self) -> Vec<SegmentExport> {
        self.segments.values().map(SegmentExport::from).collect()
    }

    /// Consume the registry into its exported segments, in creation order.
    pub fn into_export(self) -> Vec<SegmentExport> {
        self.segments
            .into_values()
            .map(SegmentExport::from)
            .collect()
    }
}

/// Reject `p` if a domain is configured and `p` lies outside it.
fn check_domain(
    domain: Option<VoxelDomain>,
    id: SegmentId,
    p: Point,
) -> Result<(), RegistryError> {
    match domain {
        Some(domain) if !domain.contains(p) => {
            warn!(target: LOG_TARGET, %id, point = %p, "point outside voxel domain");
            Err(RegistryError::OutOfDomain { point: p, domain })
        }
        _ => Ok(()),
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            segments: IndexMap::with_capacity(RegistryConfig::DEFAULT_INITIAL_CAPACITY),
            domain: None,
        }
    }
}
