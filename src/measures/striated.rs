//! Striated: how many of the tree's degree-2 bends are sharp reversals.

use crate::core::types::Mst;
use crate::measures::{obtuse_v2_corners, v2_corners};

/// `count(obtuse V2 corners) / count(V2 corners)`. 0 when there are no V2
/// corners at all (e.g. a star or a path with fewer than 3 nodes).
pub fn striated_score(tree: &Mst) -> f64 {
    let corners = v2_corners(tree);
    if corners.is_empty() {
        return 0.0;
    }
    obtuse_v2_corners(tree).len() as f64 / corners.len() as f64
}
