//! Core value types for voxel segment tracking.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the voxel coordinate ([`Point`]), the dilated enclosing box
//! ([`BoundingBox`]), and the strongly-typed segment identifier
//! ([`SegmentId`]) shared by the rest of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bbox;
pub mod id;
pub mod point;

pub use bbox::BoundingBox;
pub use id::SegmentId;
pub use point::{Point, EDGE_OFFSETS, FACE_OFFSETS, NEIGHBOURHOOD_18};
