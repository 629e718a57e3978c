//! Skewed: how lopsided the MST's edge-weight distribution is.

use crate::core::types::Mst;
use crate::core::util::quantiles;

/// `(q90 - q50) / (q90 - q10)`, clamped to `[0, 1]`. This is the form wired
/// into [`crate::scag`] by default.
pub fn skewed_score(tree: &Mst) -> f64 {
    let weights: Vec<f64> = tree.links.iter().map(|e| e.weight).collect();
    if weights.is_empty() {
        return 0.0;
    }
    let qs = quantiles(&weights, &[0.9, 0.5, 0.1]);
    let (q90, q50, q10) = (qs[0], qs[1], qs[2]);
    let denom = q90 - q10;
    if denom == 0.0 {
        0.0
    } else {
        ((q90 - q50) / denom).clamp(0.0, 1.0)
    }
}

/// The literature variant that damps the raw score by `|nodes| / (|nodes| +
/// c)`, so small trees don't report artificially extreme skew. Not wired
/// into [`crate::scag`]; exposed for callers who want it.
pub fn skewed_score_corrected(tree: &Mst, c: f64) -> f64 {
    let base = skewed_score(tree);
    let n = tree.nodes.len() as f64;
    if n + c == 0.0 {
        0.0
    } else {
        (base * n / (n + c)).clamp(0.0, 1.0)
    }
}
