/*!
# Core Data Types

This module defines the data model the rest of the crate is built on: the
2-D `Point`, the binning/triangulation/graph/hull artifacts derived from it,
and the `ScagOptions`/`ScagResult` records exchanged with callers.

`Point` doubles as a graph node key: it implements `Eq`/`Hash`/`Ord` by
rounding both coordinates to 1e-10, so two points that differ only in the
last few bits of floating-point noise compare equal. `graph::SiteGraph`
(a `petgraph::graphmap::UnGraphMap<Point, f64>`) relies on this — node
identity *is* the rounded coordinate, matching the "sites are pairwise
distinct" invariant the binner establishes.
*/

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// One 2-D point, used for raw input, normalized points, bin centers
/// ("sites"), and hull/polygon vertices alike.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinates rounded to 1e-10, used for equality/hashing/ordering and
    /// as the `UnGraphMap` node key.
    fn rounded(&self) -> (i64, i64) {
        const SCALE: f64 = 1e10;
        (
            (self.x * SCALE).round() as i64,
            (self.y * SCALE).round() as i64,
        )
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.rounded() == other.rounded()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rounded().hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rounded().cmp(&other.rounded())
    }
}

/// A hexagonal bin: its center (the "site" fed to triangulation), its
/// radius, and the original points that fell into it.
#[derive(Debug, Clone)]
pub struct Bin {
    pub center: Point,
    pub radius: f64,
    pub points: Vec<Point>,
}

/// The only supported bin shape today; kept as an enum (rather than a bare
/// bool) so a future bin shape is an additive variant, not a breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinType {
    Hexagon,
}

impl Default for BinType {
    fn default() -> Self {
        BinType::Hexagon
    }
}

/// Options accepted by [`crate::scag`]. Every field has a default matching
/// the upstream scagnostics implementation's defaults.
#[derive(Debug, Clone)]
pub struct ScagOptions {
    pub bin_type: BinType,
    pub start_bin_grid_size: u32,
    pub min_bins: u32,
    pub max_bins: u32,
    pub is_normalized: bool,
    pub is_binned: bool,
    pub outlying_upper_bound: Option<f64>,
}

impl Default for ScagOptions {
    fn default() -> Self {
        Self {
            bin_type: BinType::Hexagon,
            start_bin_grid_size: 40,
            min_bins: 50,
            max_bins: 500,
            is_normalized: false,
            is_binned: false,
            outlying_upper_bound: None,
        }
    }
}

/// A 2-D Delaunay triangulation (or its collinear-input line-graph
/// replacement, see [`crate::delaunay`]).
#[derive(Debug, Clone, Default)]
pub struct Triangulation {
    pub sites: Vec<Point>,
    pub triangles: Vec<[usize; 3]>,
    pub triangle_coordinates: Vec<[Point; 3]>,
}

/// One weighted edge of the site graph or the MST.
#[derive(Debug, Clone, Copy)]
pub struct MstEdge {
    pub u: Point,
    pub v: Point,
    pub weight: f64,
}

/// A minimum spanning tree (or, after pruning, the "no-outlying tree").
#[derive(Debug, Clone, Default)]
pub struct Mst {
    pub nodes: Vec<Point>,
    pub links: Vec<MstEdge>,
}

impl Mst {
    /// Degree of `p` within this tree (0 if `p` is not a node here).
    pub fn degree(&self, p: Point) -> usize {
        self.links
            .iter()
            .filter(|e| e.u == p || e.v == p)
            .count()
    }

    /// The neighbors of `p` within this tree, in link-insertion order.
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        self.links
            .iter()
            .filter_map(|e| {
                if e.u == p {
                    Some(e.v)
                } else if e.v == p {
                    Some(e.u)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Total weight of all links.
    pub fn total_weight(&self) -> f64 {
        self.links.iter().map(|e| e.weight).sum()
    }
}

/// A closed, counter-clockwise-ordered polygon boundary.
#[derive(Debug, Clone, Default)]
pub struct Polygon(pub Vec<Point>);

/// A V2 vertex and its two tree neighbors, in neighbor-discovery order.
#[derive(Debug, Clone, Copy)]
pub struct V2Corner {
    pub vertex: Point,
    pub neighbor_a: Point,
    pub neighbor_b: Point,
}

/// Everything [`crate::scag`] hands back: the nine scores plus the
/// geometric artifacts they were derived from.
#[derive(Debug, Clone)]
pub struct ScagResult {
    pub normalized_points: Vec<Point>,
    pub bins: Vec<Bin>,
    pub bin_size: u32,
    pub bin_radius: f64,
    pub delaunay: Triangulation,
    pub triangles: Vec<[usize; 3]>,
    pub triangle_coordinates: Vec<[Point; 3]>,
    pub graph: Mst,
    pub mst: Mst,
    pub outlying_score: f64,
    pub outlying_upper_bound: f64,
    pub outlying_links: Vec<MstEdge>,
    pub outlying_points: Vec<Point>,
    pub no_outlying_tree: Mst,
    pub convex_hull: Polygon,
    pub alpha_hull: Vec<Polygon>,

    pub skewed_score: f64,
    pub sparse_score: f64,
    pub clumpy_score: f64,
    pub striated_score: f64,
    pub convex_score: f64,
    pub skinny_score: f64,
    pub stringy_score: f64,
    pub monotonic_score: f64,

    pub v1s: Vec<Point>,
    pub v2_corners: Vec<V2Corner>,
    pub obtuse_v2_corners: Vec<V2Corner>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_equality_rounds_noise() {
        let a = Point::new(0.1 + 1e-13, 0.2);
        let b = Point::new(0.1, 0.2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_point_ordering_is_lexicographic() {
        let mut pts = vec![Point::new(1.0, 0.0), Point::new(0.0, 1.0), Point::new(0.0, 0.0)];
        pts.sort();
        assert_eq!(pts[0], Point::new(0.0, 0.0));
        assert_eq!(pts[1], Point::new(0.0, 1.0));
        assert_eq!(pts[2], Point::new(1.0, 0.0));
    }

    #[test]
    fn test_mst_degree_and_neighbors() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(2.0, 0.0);
        let mst = Mst {
            nodes: vec![a, b, c],
            links: vec![
                MstEdge { u: a, v: b, weight: 1.0 },
                MstEdge { u: b, v: c, weight: 1.0 },
            ],
        };
        assert_eq!(mst.degree(a), 1);
        assert_eq!(mst.degree(b), 2);
        assert_eq!(mst.neighbors(b), vec![a, c]);
        assert_eq!(mst.total_weight(), 2.0);
    }

    #[test]
    fn test_default_options() {
        let opts = ScagOptions::default();
        assert_eq!(opts.start_bin_grid_size, 40);
        assert_eq!(opts.min_bins, 50);
        assert_eq!(opts.max_bins, 500);
        assert!(!opts.is_normalized);
        assert!(!opts.is_binned);
        assert!(opts.outlying_upper_bound.is_none());
    }
}
