//! Stringy: how close the tree is to a single long path.

use crate::core::types::Mst;
use crate::measures::{v1_vertices, v2_corners, v3_plus_vertices};

/// `(v1 - v3) / (|nodes| - v1 - v3)`, clamped to `[0, 1]`; 0 when the
/// denominator isn't positive. Wired into [`crate::scag`].
pub fn stringy_score(tree: &Mst) -> f64 {
    let v1 = v1_vertices(tree).len() as f64;
    let v3 = v3_plus_vertices(tree).len() as f64;
    let n = tree.nodes.len() as f64;
    let denom = n - v1 - v3;
    if denom <= 0.0 {
        0.0
    } else {
        ((v1 - v3) / denom).clamp(0.0, 1.0)
    }
}

/// The alternative formulation: `v2 / (|nodes| - v1)`. Not wired into
/// [`crate::scag`]; exposed for callers who want it.
pub fn stringy_score_alt(tree: &Mst) -> f64 {
    let v1 = v1_vertices(tree).len() as f64;
    let v2 = v2_corners(tree).len() as f64;
    let n = tree.nodes.len() as f64;
    let denom = n - v1;
    if denom <= 0.0 {
        0.0
    } else {
        (v2 / denom).clamp(0.0, 1.0)
    }
}
