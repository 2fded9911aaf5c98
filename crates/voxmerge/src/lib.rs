//! voxmerge: connected-segment tracking for rasterized voxel geometry.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the voxmerge sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use voxmerge::prelude::*;
//!
//! let mut registry = Registry::new(RegistryConfig::default()).unwrap();
//!
//! // Two blobs discovered by the rasterizer.
//! registry.create_segment(SegmentId(1)).unwrap();
//! registry.add_point(SegmentId(1), Point::new(5, 5, 5)).unwrap();
//! registry.create_segment(SegmentId(2)).unwrap();
//! registry.add_point(SegmentId(2), Point::new(5, 5, 6)).unwrap();
//!
//! // The caller decides they touch, then folds 2 into 1.
//! assert!(registry.merge_segments(SegmentId(1), &[SegmentId(2)]).unwrap());
//! assert!(registry.get(SegmentId(2)).is_none());
//! assert_eq!(
//!     registry.get(SegmentId(1)).unwrap().bbox().to_array(),
//!     [4, 4, 4, 6, 6, 7]
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `voxmerge-core` | `Point`, `BoundingBox`, `SegmentId`, neighbourhood tables |
//! | [`segment`] | `voxmerge-segment` | `Segment`, `Registry`, configuration, errors, export |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Voxel coordinates, boxes, and ids (`voxmerge-core`).
pub use voxmerge_core as types;

/// Segments, the registry, and the merge protocol (`voxmerge-segment`).
///
/// [`segment::Registry`] is the entry point; [`segment::SegmentExport`] is
/// its output record.
pub use voxmerge_segment as segment;

/// Common imports for typical voxmerge usage.
///
/// ```rust
/// use voxmerge::prelude::*;
/// ```
pub mod prelude {
    // Value types
    pub use voxmerge_core::{BoundingBox, Point, SegmentId};

    // Segments and registry
    pub use voxmerge_segment::{Registry, RegistryConfig, Segment, SegmentExport, VoxelDomain};

    // Errors
    pub use voxmerge_segment::{ConfigError, RegistryError};
}
