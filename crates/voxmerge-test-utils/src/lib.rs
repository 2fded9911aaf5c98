//! Test utilities and fixtures for voxmerge development.
//!
//! Provides voxel-blob generators ([`fixtures`]) and a [`RegistryBuilder`]
//! for assembling registries with preconfigured segments.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use voxmerge_core::{Point, SegmentId};
use voxmerge_segment::{Registry, RegistryConfig, VoxelDomain};

/// Builder for registries with known segments.
///
/// Segments are created in the order they are added, and each point is fed
/// through [`Registry::add_point`], so the result matches what a
/// rasterizer would have produced.
pub struct RegistryBuilder {
    config: RegistryConfig,
    segments: Vec<(SegmentId, Vec<Point>)>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            config: RegistryConfig::default(),
            segments: Vec::new(),
        }
    }

    /// Restrict the registry to `domain`.
    pub fn domain(mut self, domain: VoxelDomain) -> Self {
        self.config.domain = Some(domain);
        self
    }

    /// Add a segment seeded with `points`.
    pub fn segment(mut self, id: u32, points: impl IntoIterator<Item = Point>) -> Self {
        self.segments.push((SegmentId(id), points.into_iter().collect()));
        self
    }

    /// Build the registry.
    ///
    /// # Panics
    ///
    /// Panics if the config is invalid, an id repeats, or a point falls
    /// outside the configured domain. Fixtures are expected to be well-formed.
    pub fn build(self) -> Registry {
        let mut registry = Registry::new(self.config).expect("fixture config must be valid");
        for (id, points) in self.segments {
            registry
                .create_segment(id)
                .unwrap_or_else(|e| panic!("fixture segment {id}: {e}"));
            registry
                .add_points(id, points)
                .unwrap_or_else(|e| panic!("fixture segment {id}: {e}"));
        }
        registry
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
