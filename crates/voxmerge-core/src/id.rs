//! Strongly-typed segment identifier.

use std::fmt;

/// Identifies a segment within a registry.
///
/// Identifiers are assigned by the caller when a new voxel blob is
/// discovered. An id is never reused while the segment holding it is
/// active; once a merge absorbs the segment, the id resolves to nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub u32);

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SegmentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_bare_number() {
        assert_eq!(SegmentId(17).to_string(), "17");
    }

    #[test]
    fn ordering_follows_inner_value() {
        assert!(SegmentId(1) < SegmentId(2));
        assert_eq!(SegmentId::from(9), SegmentId(9));
    }
}
