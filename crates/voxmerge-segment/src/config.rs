//! Registry configuration, voxel domain bounds, and validation errors.
//!
//! [`RegistryConfig`] is the builder-input for [`Registry::new`](crate::Registry::new).
//! [`validate()`](RegistryConfig::validate) checks it before any segment exists.

use std::error::Error;
use std::fmt;

use voxmerge_core::Point;

// ── VoxelDomain ────────────────────────────────────────────────────

/// Extent of the voxel grid the rasterizer writes into.
///
/// Valid coordinates are `0 <= c < extent` on each axis. When a registry is
/// configured with a domain, points outside it are rejected on insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VoxelDomain {
    extent: [u32; 3],
}

impl VoxelDomain {
    /// Maximum extent per axis: coordinates are `i32`.
    pub const MAX_EXTENT: u32 = i32::MAX as u32;

    /// A domain of `x × y × z` voxels.
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { extent: [x, y, z] }
    }

    /// A cubic domain of `n × n × n` voxels.
    pub const fn cube(n: u32) -> Self {
        Self::new(n, n, n)
    }

    /// Per-axis extent.
    pub fn extent(&self) -> [u32; 3] {
        self.extent
    }

    /// Number of voxels in the domain.
    pub fn voxel_count(&self) -> u64 {
        self.extent.iter().map(|&e| u64::from(e)).product()
    }

    /// Whether `p` lies inside the domain.
    pub fn contains(&self, p: Point) -> bool {
        p.to_array()
            .iter()
            .zip(self.extent)
            .all(|(&c, e)| c >= 0 && (c as u32) < e)
    }
}

impl fmt::Display for VoxelDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.extent;
        write!(f, "x in [0, {x}), y in [0, {y}), z in [0, {z})")
    }
}

// ── RegistryConfig ─────────────────────────────────────────────────

/// Configuration for a [`Registry`](crate::Registry).
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// Segment slots reserved up front. Default: 64.
    pub initial_capacity: usize,
    /// Optional grid extent enforced by `add_point`. Default: `None`
    /// (any `i32` coordinate is accepted).
    pub domain: Option<VoxelDomain>,
}

impl RegistryConfig {
    /// Default number of pre-reserved segment slots.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 64;

    /// A config restricted to `domain`, other values default.
    pub fn with_domain(domain: VoxelDomain) -> Self {
        Self {
            domain: Some(domain),
            ..Self::default()
        }
    }

    /// Check structural invariants.
    ///
    /// Rejects a domain with a zero extent, or one wider than `i32` can
    /// address.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(domain) = self.domain else {
            return Ok(());
        };
        for (axis, value) in ["x", "y", "z"].into_iter().zip(domain.extent) {
            if value == 0 {
                return Err(ConfigError::EmptyDomain { axis });
            }
            if value > VoxelDomain::MAX_EXTENT {
                return Err(ConfigError::DomainTooLarge {
                    axis,
                    value,
                    max: VoxelDomain::MAX_EXTENT,
                });
            }
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            domain: None,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`RegistryConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A domain axis has zero extent.
    EmptyDomain {
        /// The offending axis name.
        axis: &'static str,
    },
    /// A domain axis is wider than the `i32` coordinate range.
    DomainTooLarge {
        /// The offending axis name.
        axis: &'static str,
        /// The configured extent.
        value: u32,
        /// The largest accepted extent.
        max: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDomain { axis } => write!(f, "domain axis {axis} has zero extent"),
            Self::DomainTooLarge { axis, value, max } => {
                write!(f, "domain axis {axis} extent {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = RegistryConfig::default();
        assert_eq!(config.initial_capacity, 64);
        assert!(config.domain.is_none());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_extent_rejected() {
        let config = RegistryConfig::with_domain(VoxelDomain::new(4, 0, 4));
        assert_eq!(config.validate(), Err(ConfigError::EmptyDomain { axis: "y" }));
    }

    #[test]
    fn oversized_extent_rejected() {
        let config = RegistryConfig::with_domain(VoxelDomain::new(4, 4, u32::MAX));
        assert_eq!(
            config.validate(),
            Err(ConfigError::DomainTooLarge {
                axis: "z",
                value: u32::MAX,
                max: VoxelDomain::MAX_EXTENT,
            })
        );
    }

    #[test]
    fn domain_contains_half_open_range() {
        let d = VoxelDomain::new(3, 4, 5);
        assert!(d.contains(Point::ORIGIN));
        assert!(d.contains(Point::new(2, 3, 4)));
        assert!(!d.contains(Point::new(3, 0, 0)));
        assert!(!d.contains(Point::new(0, -1, 0)));
        assert_eq!(d.voxel_count(), 60);
    }
}
