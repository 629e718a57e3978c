//! Graph construction, minimum spanning tree, and outlier pruning.
//!
//! The site graph is undirected and coordinate-keyed (no parallel edges,
//! no self-loops); building it on `petgraph`'s `UnGraphMap` lets node
//! identity be the rounded coordinate itself rather than a synthetic
//! index.

use std::cmp::Ordering;

use petgraph::graphmap::UnGraphMap;

use crate::core::types::{Mst, MstEdge, Point, Triangulation};
use crate::core::util::{distance, round_1e10};

/// Builds the weighted site graph from a triangulation's triangle
/// coordinates, deduplicating nodes and edges by coordinate identity.
pub fn build_graph(triangulation: &Triangulation) -> Mst {
    let mut graph: UnGraphMap<Point, f64> = UnGraphMap::new();

    for tri in &triangulation.triangle_coordinates {
        for &p in tri {
            graph.add_node(p);
        }
        for &(u, v) in &[(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            if u == v {
                continue;
            }
            let weight = round_1e10(distance(u, v));
            graph.add_edge(u, v, weight);
        }
    }

    let nodes: Vec<Point> = graph.nodes().collect();
    let links: Vec<MstEdge> = graph
        .all_edges()
        .map(|(u, v, &weight)| MstEdge { u, v, weight })
        .collect();

    Mst { nodes, links }
}

/// A simple union-find (disjoint-set) structure over `0..n`, with path
/// compression and union by rank.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            self.parent[i] = self.find(self.parent[i]);
        }
        self.parent[i]
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less => self.parent[ra] = rb,
            Ordering::Greater => self.parent[rb] = ra,
            Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }
}

/// Computes a minimum spanning tree (or forest, if the graph is
/// disconnected) over `graph` via canonical ascending-weight Kruskal.
/// Ties break on edge insertion order, since `graph.links` already carries
/// the graph-build's deterministic order.
pub fn kruskal_mst(graph: &Mst) -> Mst {
    let index_of: std::collections::HashMap<Point, usize> = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(i, &p)| (p, i))
        .collect();

    let mut edges: Vec<(usize, MstEdge)> = graph.links.iter().copied().enumerate().collect();
    edges.sort_by(|a, b| {
        a.1.weight
            .partial_cmp(&b.1.weight)
            .unwrap()
            .then(a.0.cmp(&b.0))
    });

    let mut uf = UnionFind::new(graph.nodes.len());
    let mut links = Vec::new();
    for (_, edge) in edges {
        let ru = uf.find(index_of[&edge.u]);
        let rv = uf.find(index_of[&edge.v]);
        if ru != rv {
            uf.union(ru, rv);
            links.push(edge);
        }
    }

    Mst {
        nodes: graph.nodes.clone(),
        links,
    }
}

/// Result of outlier pruning over an MST.
pub struct Outlying {
    pub score: f64,
    pub upper_bound: f64,
    pub outlying_links: Vec<MstEdge>,
    pub outlying_points: Vec<Point>,
    pub pruned: Mst,
}

/// Prunes `mst` of edges whose weight exceeds the outlier upper bound
/// `omega = Q3 + 1.5 * IQR` (or the caller-supplied override), and reports
/// the removed edges/points plus the outlying score.
pub fn prune_outliers(mst: &Mst, override_bound: Option<f64>) -> Outlying {
    let weights: Vec<f64> = mst.links.iter().map(|e| e.weight).collect();
    let upper_bound = override_bound.unwrap_or_else(|| {
        if weights.is_empty() {
            return 0.0;
        }
        let quartiles = crate::core::util::quantiles(&weights, &[0.25, 0.75]);
        let (q1, q3) = (quartiles[0], quartiles[1]);
        let iqr = q3 - q1;
        q3 + 1.5 * iqr
    });

    let mut outlying_links = Vec::new();
    let mut kept_links = Vec::new();
    for &edge in &mst.links {
        if edge.weight > upper_bound {
            outlying_links.push(edge);
        } else {
            kept_links.push(edge);
        }
    }

    let total_weight: f64 = weights.iter().sum();
    let outlying_weight: f64 = outlying_links.iter().map(|e| e.weight).sum();
    let score = if total_weight > 0.0 {
        (outlying_weight / total_weight).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let mut remaining_degree: std::collections::HashMap<Point, usize> =
        std::collections::HashMap::new();
    for edge in &kept_links {
        *remaining_degree.entry(edge.u).or_insert(0) += 1;
        *remaining_degree.entry(edge.v).or_insert(0) += 1;
    }

    let mut outlying_points = Vec::new();
    for edge in &outlying_links {
        for p in [edge.u, edge.v] {
            if remaining_degree.get(&p).copied().unwrap_or(0) == 0 && !outlying_points.contains(&p)
            {
                outlying_points.push(p);
            }
        }
    }

    // Iterate `mst.nodes` (insertion-ordered from the `UnGraphMap` build)
    // rather than the `HashMap`'s own key order, which is randomized per
    // process run and would otherwise leak into every public artifact
    // derived from this tree's node order.
    let pruned_nodes: Vec<Point> = mst
        .nodes
        .iter()
        .copied()
        .filter(|p| remaining_degree.get(p).copied().unwrap_or(0) > 0)
        .collect();

    Outlying {
        score,
        upper_bound,
        outlying_links,
        outlying_points,
        pruned: Mst {
            nodes: pruned_nodes,
            links: kept_links,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Point;

    fn triangle() -> Triangulation {
        Triangulation {
            sites: vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
            triangles: vec![[0, 1, 2]],
            triangle_coordinates: vec![[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)]],
        }
    }

    #[test]
    fn test_build_graph_dedups_nodes_and_edges() {
        let graph = build_graph(&triangle());
        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.links.len(), 3);
        for link in &graph.links {
            assert_ne!(link.u, link.v);
        }
    }

    #[test]
    fn test_kruskal_mst_edge_count() {
        let graph = build_graph(&triangle());
        let mst = kruskal_mst(&graph);
        assert_eq!(mst.links.len(), mst.nodes.len() - 1);
        for e in &mst.links {
            assert!(e.weight > 0.0);
        }
    }

    #[test]
    fn test_kruskal_picks_cheapest_edges() {
        // Four points on a line: 0 -- 1 -- 2 -- 3, with a long diagonal chord
        // that should never be selected over the short segments.
        let p0 = Point::new(0.0, 0.0);
        let p1 = Point::new(1.0, 0.0);
        let p2 = Point::new(2.0, 0.0);
        let p3 = Point::new(3.0, 0.0);
        let graph = Mst {
            nodes: vec![p0, p1, p2, p3],
            links: vec![
                MstEdge { u: p0, v: p1, weight: 1.0 },
                MstEdge { u: p1, v: p2, weight: 1.0 },
                MstEdge { u: p2, v: p3, weight: 1.0 },
                MstEdge { u: p0, v: p3, weight: 3.0 },
            ],
        };
        let mst = kruskal_mst(&graph);
        assert_eq!(mst.links.len(), 3);
        assert!((mst.total_weight() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_prune_outliers_no_outliers_when_uniform() {
        let p0 = Point::new(0.0, 0.0);
        let p1 = Point::new(1.0, 0.0);
        let p2 = Point::new(2.0, 0.0);
        let mst = Mst {
            nodes: vec![p0, p1, p2],
            links: vec![
                MstEdge { u: p0, v: p1, weight: 1.0 },
                MstEdge { u: p1, v: p2, weight: 1.0 },
            ],
        };
        let outlying = prune_outliers(&mst, None);
        assert_eq!(outlying.score, 0.0);
        assert!(outlying.outlying_links.is_empty());
        assert_eq!(outlying.pruned.links.len(), 2);
    }

    #[test]
    fn test_prune_outliers_detects_long_edge() {
        // Five edges (odd count) so Q1/Q3 land exactly on the uniform
        // weight-1 edges instead of averaging across the outlier, keeping
        // omega small enough for the 97-weight edge to clear it.
        let p0 = Point::new(0.0, 0.0);
        let p1 = Point::new(1.0, 0.0);
        let p2 = Point::new(2.0, 0.0);
        let p3 = Point::new(3.0, 0.0);
        let p4 = Point::new(4.0, 0.0);
        let p5 = Point::new(104.0, 0.0);
        let mst = Mst {
            nodes: vec![p0, p1, p2, p3, p4, p5],
            links: vec![
                MstEdge { u: p0, v: p1, weight: 1.0 },
                MstEdge { u: p1, v: p2, weight: 1.0 },
                MstEdge { u: p2, v: p3, weight: 1.0 },
                MstEdge { u: p3, v: p4, weight: 1.0 },
                MstEdge { u: p4, v: p5, weight: 97.0 },
            ],
        };
        let outlying = prune_outliers(&mst, None);
        assert!(outlying.score > 0.0);
        assert_eq!(outlying.outlying_links.len(), 1);
        assert_eq!(outlying.outlying_links[0].weight, 97.0);
        assert!(outlying.outlying_points.contains(&p5));
    }

    #[test]
    fn test_prune_outliers_respects_override() {
        let p0 = Point::new(0.0, 0.0);
        let p1 = Point::new(1.0, 0.0);
        let mst = Mst {
            nodes: vec![p0, p1],
            links: vec![MstEdge { u: p0, v: p1, weight: 1.0 }],
        };
        let outlying = prune_outliers(&mst, Some(0.5));
        assert_eq!(outlying.upper_bound, 0.5);
        assert_eq!(outlying.outlying_links.len(), 1);
    }
}
