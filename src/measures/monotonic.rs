//! Monotonic: squared Spearman rank correlation between the original x and
//! y coordinates of the pruned MST's nodes.

use crate::core::types::Mst;

/// `rho^2` where `rho` is the Pearson correlation of the rank-transformed
/// x and y coordinates. 0 for fewer than two nodes, or when either
/// coordinate has zero variance across ranks.
pub fn monotonic_score(tree: &Mst) -> f64 {
    let n = tree.nodes.len();
    if n < 2 {
        return 0.0;
    }
    let xs: Vec<f64> = tree.nodes.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = tree.nodes.iter().map(|p| p.y).collect();
    let rx = ranks(&xs);
    let ry = ranks(&ys);
    let rho = pearson(&rx, &ry);
    (rho * rho).clamp(0.0, 1.0)
}

/// Average ranks (1-based), tied values sharing the mean of the positions
/// they span.
fn ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap());

    let mut result = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        let avg_rank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            result[idx] = avg_rank;
        }
        i = j + 1;
    }
    result
}

fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len() as f64;
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for i in 0..a.len() {
        let da = a[i] - mean_a;
        let db = b[i] - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }
    if var_a == 0.0 || var_b == 0.0 {
        0.0
    } else {
        cov / (var_a.sqrt() * var_b.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{MstEdge, Point};

    fn chain_from(points: &[(f64, f64)]) -> Mst {
        let nodes: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        let links: Vec<MstEdge> = nodes
            .windows(2)
            .map(|w| MstEdge { u: w[0], v: w[1], weight: 1.0 })
            .collect();
        Mst { nodes, links }
    }

    #[test]
    fn test_strictly_increasing_sequence_scores_near_one() {
        let tree = chain_from(&[(0.0, 0.0), (1.0, 2.0), (2.0, 4.0), (3.0, 6.0), (4.0, 8.0)]);
        let score = monotonic_score(&tree);
        assert!((score - 1.0).abs() < 1e-9, "expected ~1.0, got {}", score);
    }

    #[test]
    fn test_decreasing_sequence_also_scores_near_one() {
        // squared correlation is sign-agnostic.
        let tree = chain_from(&[(0.0, 8.0), (1.0, 6.0), (2.0, 4.0), (3.0, 2.0), (4.0, 0.0)]);
        let score = monotonic_score(&tree);
        assert!((score - 1.0).abs() < 1e-9, "expected ~1.0, got {}", score);
    }

    #[test]
    fn test_uncorrelated_cross_scores_low() {
        let tree = chain_from(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)]);
        let score = monotonic_score(&tree);
        assert!(score < 0.2, "expected low monotonic score, got {}", score);
    }

    #[test]
    fn test_single_node_scores_zero() {
        let tree = Mst { nodes: vec![Point::new(0.0, 0.0)], links: vec![] };
        assert_eq!(monotonic_score(&tree), 0.0);
    }
}
