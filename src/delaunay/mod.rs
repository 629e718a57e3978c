//! 2-D Delaunay triangulation.
//!
//! Standard cases run an incremental Bowyer-Watson triangulation.
//! Collinear input does not admit a real triangulation, so a line graph
//! is built instead — see [`is_collinear`] and the "Collinear fallback"
//! note in DESIGN.md.

use crate::core::types::{Point, Triangulation};

/// Triangulates `sites`. Assumes `sites` are pairwise distinct (the
/// binner's post-condition).
pub fn delaunay(sites: &[Point]) -> Triangulation {
    if sites.len() < 3 || is_collinear(sites) {
        return collinear_line_graph(sites);
    }
    bowyer_watson(sites)
}

/// True if every site lies on a single straight line (within floating
/// tolerance), including the degenerate cases of fewer than 3 sites or all
/// sites sharing one x (a vertical line, where the general cross-product
/// test is still valid).
pub fn is_collinear(sites: &[Point]) -> bool {
    if sites.len() < 3 {
        return true;
    }
    let a = sites[0];
    let b = sites.iter().find(|&&p| p != a).copied();
    let Some(b) = b else {
        return true;
    };
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    sites.iter().all(|&p| {
        let (apx, apy) = (p.x - a.x, p.y - a.y);
        (abx * apy - aby * apx).abs() < 1e-9
    })
}

/// Builds the collinear-fallback "triangulation": sites sorted
/// lexicographically and connected consecutively, exposed both as a
/// degenerate `[Point; 3]` chain (so the rest of the pipeline sees a
/// uniform `triangle_coordinates` shape) and as an empty `triangles` index
/// list, since the indices have no meaningful triangle interpretation here.
fn collinear_line_graph(sites: &[Point]) -> Triangulation {
    let mut sorted: Vec<Point> = sites.to_vec();
    sorted.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap()
            .then(a.y.partial_cmp(&b.y).unwrap())
    });

    let mut triangle_coordinates = Vec::new();
    for w in sorted.windows(2) {
        triangle_coordinates.push([w[0], w[1], w[1]]);
    }

    Triangulation {
        sites: sorted,
        triangles: Vec::new(),
        triangle_coordinates,
    }
}

#[derive(Debug, Clone, Copy)]
struct Triangle {
    a: usize,
    b: usize,
    c: usize,
}

/// Incremental Bowyer-Watson triangulation, with a super-triangle large
/// enough to enclose every site (sites are normalized into `[0, 1]^2`, so a
/// fixed oversized super-triangle suffices).
fn bowyer_watson(sites: &[Point]) -> Triangulation {
    let n = sites.len();
    let mut points: Vec<Point> = sites.to_vec();

    let super_a = Point::new(-100.0, -100.0);
    let super_b = Point::new(100.0, -100.0);
    let super_c = Point::new(0.0, 100.0);
    let ia = points.len();
    points.push(super_a);
    let ib = points.len();
    points.push(super_b);
    let ic = points.len();
    points.push(super_c);

    let mut triangles = vec![Triangle { a: ia, b: ib, c: ic }];

    for i in 0..n {
        let p = points[i];
        let mut bad_triangles = Vec::new();
        for (idx, t) in triangles.iter().enumerate() {
            if in_circumcircle(p, points[t.a], points[t.b], points[t.c]) {
                bad_triangles.push(idx);
            }
        }

        let mut polygon: Vec<(usize, usize)> = Vec::new();
        for &idx in &bad_triangles {
            let t = triangles[idx];
            for edge in [(t.a, t.b), (t.b, t.c), (t.c, t.a)] {
                let shared = bad_triangles.iter().any(|&other| {
                    other != idx && {
                        let o = triangles[other];
                        let oedges = [(o.a, o.b), (o.b, o.c), (o.c, o.a)];
                        oedges
                            .iter()
                            .any(|&(x, y)| (x == edge.0 && y == edge.1) || (x == edge.1 && y == edge.0))
                    }
                });
                if !shared {
                    polygon.push(edge);
                }
            }
        }

        let mut kept = Vec::with_capacity(triangles.len());
        for (idx, t) in triangles.into_iter().enumerate() {
            if !bad_triangles.contains(&idx) {
                kept.push(t);
            }
        }
        triangles = kept;

        for (u, v) in polygon {
            triangles.push(Triangle { a: u, b: v, c: i });
        }
    }

    triangles.retain(|t| t.a < n && t.b < n && t.c < n);

    let triangle_coordinates = triangles
        .iter()
        .map(|t| [sites[t.a], sites[t.b], sites[t.c]])
        .collect();
    let tri_indices = triangles.iter().map(|t| [t.a, t.b, t.c]).collect();

    Triangulation {
        sites: sites.to_vec(),
        triangles: tri_indices,
        triangle_coordinates,
    }
}

/// True if `p` lies strictly inside the circumcircle of triangle `(a, b, c)`.
fn in_circumcircle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let ax = a.x - p.x;
    let ay = a.y - p.y;
    let bx = b.x - p.x;
    let by = b.y - p.y;
    let cx = c.x - p.x;
    let cy = c.y - p.y;

    let det = (ax * ax + ay * ay) * (bx * cy - cx * by)
        - (bx * bx + by * by) * (ax * cy - cx * ay)
        + (cx * cx + cy * cy) * (ax * by - bx * ay);

    // Orientation of (a, b, c) determines the sign convention for "inside".
    let orientation = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    if orientation > 0.0 {
        det > 1e-9
    } else {
        det < -1e-9
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_collinear_detects_line() {
        let pts = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        assert!(is_collinear(&pts));
    }

    #[test]
    fn test_is_collinear_rejects_triangle() {
        let pts = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
        assert!(!is_collinear(&pts));
    }

    #[test]
    fn test_collinear_produces_line_graph_not_fan() {
        let pts = vec![
            Point::new(3.0, 3.0),
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ];
        let tri = delaunay(&pts);
        assert!(tri.triangles.is_empty());
        assert_eq!(tri.triangle_coordinates.len(), 3);
        assert_eq!(tri.sites[0], Point::new(0.0, 0.0));
        assert_eq!(tri.sites[3], Point::new(3.0, 3.0));
    }

    #[test]
    fn test_square_triangulation_has_two_triangles() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let tri = delaunay(&pts);
        assert_eq!(tri.triangles.len(), 2);
        for t in &tri.triangles {
            assert_ne!(t[0], t[1]);
            assert_ne!(t[1], t[2]);
            assert_ne!(t[0], t[2]);
        }
    }

    #[test]
    fn test_grid_triangulation_covers_all_sites() {
        let mut pts = Vec::new();
        for i in 0..4 {
            for j in 0..4 {
                pts.push(Point::new(i as f64 / 3.0, j as f64 / 3.0));
            }
        }
        let tri = delaunay(&pts);
        let mut used = std::collections::HashSet::new();
        for t in &tri.triangles {
            used.insert(t[0]);
            used.insert(t[1]);
            used.insert(t[2]);
        }
        assert_eq!(used.len(), pts.len());
    }
}
