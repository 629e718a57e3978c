//! Alpha-shape construction.
//!
//! An alpha-complex keeps only the Delaunay triangles whose circumradius
//! fits inside a disc of radius `1 / alpha`; the edges left on the
//! boundary of the surviving triangles (those touching exactly one kept
//! triangle) are the alpha-shape's boundary. If no triangle survives
//! (alpha too aggressive), `concaveHull1` backs off the edge-length
//! threshold until something qualifies.

use std::collections::HashMap;

use crate::core::types::{Point, Polygon, Triangulation};
use crate::core::util::distance;

type Edge = (Point, Point);

fn canonical(a: Point, b: Point) -> Edge {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn triangle_edges(t: &[Point; 3]) -> [Edge; 3] {
    [
        canonical(t[0], t[1]),
        canonical(t[1], t[2]),
        canonical(t[2], t[0]),
    ]
}

/// Circumradius of triangle `(a, b, c)`; `None` if the triangle is
/// degenerate (collinear / zero area).
fn circumradius(a: Point, b: Point, c: Point) -> Option<f64> {
    let ax = a.x;
    let ay = a.y;
    let bx = b.x;
    let by = b.y;
    let cx = c.x;
    let cy = c.y;

    let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));
    if d.abs() < 1e-12 {
        return None;
    }

    let ux = ((ax * ax + ay * ay) * (by - cy)
        + (bx * bx + by * by) * (cy - ay)
        + (cx * cx + cy * cy) * (ay - by))
        / d;
    let uy = ((ax * ax + ay * ay) * (cx - bx)
        + (bx * bx + by * by) * (ax - cx)
        + (cx * cx + cy * cy) * (bx - ax))
        / d;

    let center = Point::new(ux, uy);
    Some(distance(center, a))
}

/// Edges that belong to exactly one triangle whose circumradius passes the
/// `alpha` criterion (or every Delaunay triangle, when `alpha <= 0`, the
/// convex-hull special case).
fn boundary_edges_for_alpha(triangulation: &Triangulation, alpha: f64) -> Vec<Edge> {
    let disc_radius = if alpha <= 0.0 { f64::INFINITY } else { 1.0 / alpha };
    let mut counts: HashMap<Edge, u32> = HashMap::new();
    for t in &triangulation.triangle_coordinates {
        let keep = match circumradius(t[0], t[1], t[2]) {
            Some(r) => r <= disc_radius,
            None => false,
        };
        if keep {
            for e in triangle_edges(t) {
                *counts.entry(e).or_insert(0) += 1;
            }
        }
    }
    counts.into_iter().filter(|&(_, c)| c == 1).map(|(e, _)| e).collect()
}

/// Boundary edges of the *unfiltered* Delaunay triangulation (the
/// `concaveHull1` fallback only ever relaxes an edge-length threshold
/// against these, not against a re-filtered alpha-complex).
fn full_boundary_edges(triangulation: &Triangulation) -> Vec<Edge> {
    let mut counts: HashMap<Edge, u32> = HashMap::new();
    for t in &triangulation.triangle_coordinates {
        for e in triangle_edges(t) {
            *counts.entry(e).or_insert(0) += 1;
        }
    }
    counts.into_iter().filter(|&(_, c)| c == 1).map(|(e, _)| e).collect()
}

/// The back-off fallback when the alpha-complex has no boundary at all:
/// relax an edge-length threshold starting at `1/alpha - 0.01` in `0.01`
/// increments until at least one Delaunay-boundary edge is short enough.
fn concave_hull1(triangulation: &Triangulation, alpha: f64) -> Vec<Edge> {
    let full_boundary = full_boundary_edges(triangulation);
    if full_boundary.is_empty() {
        return full_boundary;
    }
    let mut threshold = if alpha > 0.0 { 1.0 / alpha - 0.01 } else { 0.0 };
    loop {
        let qualifying: Vec<Edge> = full_boundary
            .iter()
            .copied()
            .filter(|&(u, v)| distance(u, v) <= threshold)
            .collect();
        if !qualifying.is_empty() {
            return qualifying;
        }
        threshold += 0.01;
        if threshold > 10.0 {
            return full_boundary;
        }
    }
}

/// Partitions `edges` into connected components by shared endpoint, then
/// orders each component's vertices counter-clockwise around its centroid.
fn components_to_polygons(edges: &[Edge]) -> Vec<Polygon> {
    if edges.is_empty() {
        return Vec::new();
    }

    let mut points: Vec<Point> = Vec::new();
    let mut index_of: HashMap<Point, usize> = HashMap::new();
    for &(u, v) in edges {
        for p in [u, v] {
            index_of.entry(p).or_insert_with(|| {
                points.push(p);
                points.len() - 1
            });
        }
    }

    let mut parent: Vec<usize> = (0..points.len()).collect();
    fn find(parent: &mut [usize], i: usize) -> usize {
        if parent[i] != i {
            parent[i] = find(parent, parent[i]);
        }
        parent[i]
    }
    for &(u, v) in edges {
        let iu = find(&mut parent, index_of[&u]);
        let iv = find(&mut parent, index_of[&v]);
        if iu != iv {
            parent[iu] = iv;
        }
    }

    let mut components: HashMap<usize, Vec<Point>> = HashMap::new();
    for (i, &p) in points.iter().enumerate() {
        let root = find(&mut parent, i);
        components.entry(root).or_default().push(p);
    }

    let mut polygons: Vec<Polygon> = components
        .into_values()
        .map(|mut verts| {
            let cx = verts.iter().map(|p| p.x).sum::<f64>() / verts.len() as f64;
            let cy = verts.iter().map(|p| p.y).sum::<f64>() / verts.len() as f64;
            verts.sort_by(|a, b| {
                let angle_a = (a.y - cy).atan2(a.x - cx);
                let angle_b = (b.y - cy).atan2(b.x - cx);
                angle_a.partial_cmp(&angle_b).unwrap()
            });
            Polygon(verts)
        })
        .collect();

    // `components` is a `HashMap`, so the order polygons came out in above is
    // randomized per process run; sort by each polygon's minimum vertex
    // (`Point` is already a total order) so the returned `Vec<Polygon>` is
    // stable for identical input.
    polygons.sort_by(|a, b| a.0.iter().min().unwrap().cmp(b.0.iter().min().unwrap()));
    polygons
}

/// Computes the alpha-shape of `triangulation` at the given `alpha`: one
/// polygon per connected component of the alpha-complex's boundary.
/// Collinear input (an empty triangle list) has no alpha-shape.
pub fn alpha_shape(triangulation: &Triangulation, alpha: f64) -> Vec<Polygon> {
    if triangulation.triangle_coordinates.is_empty() {
        return Vec::new();
    }
    let mut boundary = boundary_edges_for_alpha(triangulation, alpha);
    if boundary.is_empty() {
        boundary = concave_hull1(triangulation, alpha);
    }
    components_to_polygons(&boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_triangulation() -> Triangulation {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(1.0, 1.0);
        let d = Point::new(0.0, 1.0);
        Triangulation {
            sites: vec![a, b, c, d],
            triangles: vec![[0, 1, 2], [0, 2, 3]],
            triangle_coordinates: vec![[a, b, c], [a, c, d]],
        }
    }

    #[test]
    fn test_alpha_zero_recovers_full_boundary() {
        let tri = square_triangulation();
        let hull = alpha_shape(&tri, 0.0);
        assert_eq!(hull.len(), 1);
        assert_eq!(hull[0].0.len(), 4);
    }

    #[test]
    fn test_collinear_input_has_no_alpha_shape() {
        let tri = Triangulation {
            sites: vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
            triangles: Vec::new(),
            triangle_coordinates: vec![[Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(1.0, 1.0)]],
        };
        assert!(alpha_shape(&tri, 1.0).is_empty());
    }

    #[test]
    fn test_large_alpha_falls_back_to_concave_hull1() {
        let tri = square_triangulation();
        // A very large alpha shrinks the admissible disc to ~0, emptying the
        // alpha-complex and forcing the back-off fallback.
        let hull = alpha_shape(&tri, 1000.0);
        assert!(!hull.is_empty());
    }
}
