//! Sparse: how spread-out the MST's typical edge is.

use crate::core::types::Mst;
use crate::core::util::quantile;

/// The 0.9 quantile of the MST's edge weights, clamped to `[0, 1]`.
pub fn sparse_score(tree: &Mst) -> f64 {
    let weights: Vec<f64> = tree.links.iter().map(|e| e.weight).collect();
    if weights.is_empty() {
        return 0.0;
    }
    quantile(&weights, 0.9).clamp(0.0, 1.0)
}
