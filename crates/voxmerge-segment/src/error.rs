//! Registry error types.

use std::error::Error;
use std::fmt;

use voxmerge_core::{Point, SegmentId};

use crate::config::VoxelDomain;

/// Errors from resolving or populating segments through a [`Registry`](crate::Registry).
///
/// The merge protocol itself never fails for its candidates: stale or
/// repeated candidate ids are skipped. Only an unknown *receiver* is an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// No active segment has this id (never created, or already absorbed).
    UnknownSegment {
        /// The unresolved id.
        id: SegmentId,
    },
    /// A segment with this id is already active.
    DuplicateSegment {
        /// The id that is already in use.
        id: SegmentId,
    },
    /// The point lies outside the configured voxel domain.
    OutOfDomain {
        /// The rejected point.
        point: Point,
        /// The domain it was checked against.
        domain: VoxelDomain,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSegment { id } => write!(f, "unknown segment: {id}"),
            Self::DuplicateSegment { id } => write!(f, "segment {id} is already active"),
            Self::OutOfDomain { point, domain } => {
                write!(f, "point {point} out of domain: {domain}")
            }
        }
    }
}

impl Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let e = RegistryError::UnknownSegment { id: SegmentId(4) };
        assert_eq!(e.to_string(), "unknown segment: 4");

        let e = RegistryError::OutOfDomain {
            point: Point::new(-1, 0, 0),
            domain: VoxelDomain::cube(8),
        };
        assert_eq!(
            e.to_string(),
            "point (-1, 0, 0) out of domain: x in [0, 8), y in [0, 8), z in [0, 8)"
        );
    }
}
