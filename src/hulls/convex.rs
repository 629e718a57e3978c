//! Convex hull.
//!
//! Collinear sites are returned as-is (there is no proper hull);
//! otherwise the convex hull is the alpha-shape at `alpha = 0` (the
//! unfiltered Delaunay boundary), with unique vertices sorted
//! counter-clockwise around the centroid.

use crate::core::types::{Point, Polygon, Triangulation};
use crate::delaunay::is_collinear;

/// Computes the convex hull of the sites underlying `triangulation`.
pub fn convex_hull(triangulation: &Triangulation) -> Polygon {
    if triangulation.triangles.is_empty() || is_collinear(&triangulation.sites) {
        return Polygon(triangulation.sites.clone());
    }

    let mut polygons = super::alpha::alpha_shape(triangulation, 0.0);
    // alpha = 0 keeps every Delaunay triangle, so the boundary of a
    // connected triangulation is a single component; merging defensively
    // still yields the right hull if triangulation somehow isn't connected.
    let mut verts: Vec<Point> = polygons.drain(..).flat_map(|p| p.0).collect();
    verts.sort();
    verts.dedup();

    if verts.len() < 3 {
        return Polygon(verts);
    }

    let cx = verts.iter().map(|p| p.x).sum::<f64>() / verts.len() as f64;
    let cy = verts.iter().map(|p| p.y).sum::<f64>() / verts.len() as f64;
    verts.sort_by(|a, b| {
        let angle_a = (a.y - cy).atan2(a.x - cx);
        let angle_b = (b.y - cy).atan2(b.x - cx);
        angle_a.partial_cmp(&angle_b).unwrap()
    });

    Polygon(verts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_hull_has_four_vertices() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(1.0, 1.0);
        let d = Point::new(0.0, 1.0);
        let tri = Triangulation {
            sites: vec![a, b, c, d],
            triangles: vec![[0, 1, 2], [0, 2, 3]],
            triangle_coordinates: vec![[a, b, c], [a, c, d]],
        };
        let hull = convex_hull(&tri);
        assert_eq!(hull.0.len(), 4);
    }

    #[test]
    fn test_collinear_returns_sites_as_is() {
        let tri = Triangulation {
            sites: vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)],
            triangles: Vec::new(),
            triangle_coordinates: vec![[Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(1.0, 1.0)]],
        };
        let hull = convex_hull(&tri);
        assert_eq!(hull.0.len(), 3);
    }
}
