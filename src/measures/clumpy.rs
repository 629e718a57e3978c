//! Clumpy: how much the MST's mass concentrates into tight sub-clusters.
//!
//! Per-edge evaluation is independent across edges, so this is the one
//! measure computed with `rayon`.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::core::types::{Mst, MstEdge, Point};

/// For each edge, removing it splits the tree into two subtrees; let `S`
/// be the smaller one (by node count) and `e*` its heaviest internal edge.
/// That edge's score is `1 - weight(e*) / weight(e)`. The overall Clumpy
/// score is the max over all edges, i.e. the tightest such sub-cluster.
pub fn clumpy_score(tree: &Mst) -> f64 {
    if tree.links.is_empty() {
        return 0.0;
    }

    tree.links
        .par_iter()
        .enumerate()
        .map(|(i, edge)| per_edge_score(tree, i, edge))
        .reduce(|| 0.0_f64, f64::max)
        .clamp(0.0, 1.0)
}

fn per_edge_score(tree: &Mst, removed_index: usize, removed: &MstEdge) -> f64 {
    let mut adjacency: HashMap<Point, Vec<usize>> = HashMap::new();
    for (i, e) in tree.links.iter().enumerate() {
        if i == removed_index {
            continue;
        }
        adjacency.entry(e.u).or_default().push(i);
        adjacency.entry(e.v).or_default().push(i);
    }

    let side_a = reachable_from(removed.u, &adjacency, tree);
    let side_b: HashSet<Point> = tree
        .nodes
        .iter()
        .copied()
        .filter(|p| !side_a.contains(p))
        .collect();

    let smaller = if side_a.len() <= side_b.len() { &side_a } else { &side_b };

    let max_internal_weight = tree
        .links
        .iter()
        .enumerate()
        .filter(|&(i, e)| i != removed_index && smaller.contains(&e.u) && smaller.contains(&e.v))
        .map(|(_, e)| e.weight)
        .fold(0.0_f64, f64::max);

    if removed.weight == 0.0 {
        0.0
    } else {
        1.0 - max_internal_weight / removed.weight
    }
}

fn reachable_from(
    start: Point,
    adjacency: &HashMap<Point, Vec<usize>>,
    tree: &Mst,
) -> HashSet<Point> {
    let mut visited = HashSet::new();
    visited.insert(start);
    let mut stack = vec![start];
    while let Some(p) = stack.pop() {
        if let Some(incident) = adjacency.get(&p) {
            for &edge_idx in incident {
                let e = tree.links[edge_idx];
                let other = if e.u == p { e.v } else { e.u };
                if visited.insert(other) {
                    stack.push(other);
                }
            }
        }
    }
    visited
}
