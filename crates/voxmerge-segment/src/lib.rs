//! Segment tracking and merging for rasterized voxel geometry.
//!
//! A [`Segment`] is a growable set of voxels believed to form one connected
//! structure, together with a [`BoundingBox`](voxmerge_core::BoundingBox)
//! kept one voxel larger than its members. The [`Registry`] owns every
//! active segment by [`SegmentId`](voxmerge_core::SegmentId) and coalesces
//! segments when the caller reports that they have come into contact.
//!
//! # Ownership
//!
//! ```text
//! Registry (sole owner)
//! └── IndexMap<SegmentId, Segment>   creation order
//!     └── Segment
//!         ├── IndexSet<Point>         insertion order
//!         └── BoundingBox             dilated by one voxel
//! ```
//!
//! Callers hold ids, never references, across a merge. An absorbed id
//! resolves to `None` afterwards.
//!
//! # Threading
//!
//! Nothing here locks. A registry shared between threads must be wrapped in
//! the caller's own mutex; insertion and merge-driven erasure are not safe
//! to interleave.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;
pub mod registry;
pub mod segment;

pub use config::{ConfigError, RegistryConfig, VoxelDomain};
pub use error::RegistryError;
pub use export::SegmentExport;
pub use registry::Registry;
pub use segment::Segment;

/// `tracing` target for every event emitted by this crate.
pub(crate) const LOG_TARGET: &str = "voxmerge";
