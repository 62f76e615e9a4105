//! Landmark set container and face-mesh index tables

use crate::point::Point2;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Landmark index tables for the 478-point face-mesh layout
pub mod indices {
    /// Left eye contour: [outer corner, upper x2, inner corner, lower x2]
    pub const LEFT_EYE: [usize; 6] = [362, 385, 387, 263, 373, 380];

    /// Right eye contour, same ordering as `LEFT_EYE`
    pub const RIGHT_EYE: [usize; 6] = [33, 160, 158, 133, 153, 144];

    /// Mouth: [outer corners x2, outer lips x2, inner lips x2, inner corners x2]
    pub const MOUTH: [usize; 8] = [61, 291, 0, 17, 13, 14, 78, 308];

    pub const NOSE_TIP: usize = 1;
    pub const CHIN: usize = 199;
    pub const LEFT_EYE_OUTER: usize = 263;
    pub const RIGHT_EYE_OUTER: usize = 33;
    pub const LEFT_EAR: usize = 454;
    pub const RIGHT_EAR: usize = 234;
}

/// Ordered set of normalized facial keypoints produced by an external
/// landmark detector. Empty when no face was detected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandmarkSet {
    points: Vec<Point2>,
}

impl LandmarkSet {
    /// Wrap detector output
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Number of keypoints
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the detector found no face
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at a mesh index, validated against the set size
    pub fn get(&self, index: usize) -> Option<Point2> {
        self.points.get(index).copied()
    }

    /// Gather a fixed index subset. Returns `None` (and logs) if any index
    /// falls outside the set, so callers never risk out-of-bounds access on
    /// short detector output.
    pub fn subset<const N: usize>(&self, idx: &[usize; N]) -> Option<[Point2; N]> {
        let mut out = [Point2::default(); N];
        for (slot, &i) in out.iter_mut().zip(idx.iter()) {
            match self.points.get(i) {
                Some(p) => *slot = *p,
                None => {
                    warn!(
                        index = i,
                        len = self.points.len(),
                        "landmark index outside detector output"
                    );
                    return None;
                }
            }
        }
        Some(out)
    }
}
