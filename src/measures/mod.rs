//! The nine scagnostic measures.
//!
//! Each measure is a pure function over the pruned MST (plus, for
//! Convex/Skinny, the hull artifacts). This module holds the
//! vertex-degree helpers (V1/V2/V2-corner extraction) every topological
//! measure shares; each measure itself lives in its own small file, one
//! function per file.

mod clumpy;
mod convex;
mod monotonic;
mod skewed;
mod skinny;
mod sparse;
mod striated;
mod stringy;

pub use clumpy::clumpy_score;
pub use convex::convex_score;
pub use monotonic::monotonic_score;
pub use skewed::{skewed_score, skewed_score_corrected};
pub use skinny::skinny_score;
pub use sparse::sparse_score;
pub use striated::striated_score;
pub use stringy::{stringy_score, stringy_score_alt};

use crate::core::types::{Mst, Point, V2Corner};

/// Nodes of `tree` with degree exactly 1.
pub fn v1_vertices(tree: &Mst) -> Vec<Point> {
    tree.nodes.iter().copied().filter(|&p| tree.degree(p) == 1).collect()
}

/// Nodes of `tree` with degree exactly 3 or more.
pub fn v3_plus_vertices(tree: &Mst) -> Vec<Point> {
    tree.nodes.iter().copied().filter(|&p| tree.degree(p) >= 3).collect()
}

/// Every degree-2 vertex of `tree`, paired with its two neighbors.
pub fn v2_corners(tree: &Mst) -> Vec<V2Corner> {
    tree.nodes
        .iter()
        .copied()
        .filter(|&p| tree.degree(p) == 2)
        .map(|p| {
            let neighbors = tree.neighbors(p);
            V2Corner {
                vertex: p,
                neighbor_a: neighbors[0],
                neighbor_b: neighbors[1],
            }
        })
        .collect()
}

/// Cosine of the interior angle at `corner.vertex`, between the two rays to
/// its neighbors.
fn corner_cosine(corner: &V2Corner) -> f64 {
    let v = corner.vertex;
    let ax = corner.neighbor_a.x - v.x;
    let ay = corner.neighbor_a.y - v.y;
    let bx = corner.neighbor_b.x - v.x;
    let by = corner.neighbor_b.y - v.y;
    let dot = ax * bx + ay * by;
    let mag = ((ax * ax + ay * ay).sqrt()) * ((bx * bx + by * by).sqrt());
    if mag == 0.0 {
        1.0
    } else {
        (dot / mag).clamp(-1.0, 1.0)
    }
}

/// Threshold used by Striated: an interior angle past 135 degrees has
/// `cos(theta) < -sqrt(2)/2`.
const OBTUSE_COSINE_THRESHOLD: f64 = -std::f64::consts::FRAC_1_SQRT_2;

/// Every V2 corner of `tree` whose interior angle exceeds 135 degrees.
pub fn obtuse_v2_corners(tree: &Mst) -> Vec<V2Corner> {
    v2_corners(tree)
        .into_iter()
        .filter(|c| corner_cosine(c) < OBTUSE_COSINE_THRESHOLD)
        .collect()
}
