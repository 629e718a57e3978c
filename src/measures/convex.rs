//! Convex: how much of the convex hull the (possibly multi-component)
//! alpha-shape fills.

use crate::core::types::Polygon;
use crate::hulls::polygon_area;

/// `area(alpha-hull) / area(convex-hull)`, clamped to `[0, 1]`. A
/// multi-component alpha-shape contributes the sum of its components'
/// areas.
pub fn convex_score(alpha_hull: &[Polygon], convex_hull: &Polygon) -> f64 {
    let convex_area = polygon_area(&convex_hull.0);
    if convex_area == 0.0 {
        return 0.0;
    }
    let alpha_area: f64 = alpha_hull.iter().map(|p| polygon_area(&p.0)).sum();
    (alpha_area / convex_area).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Point;

    fn square() -> Polygon {
        Polygon(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_identical_hulls_score_one() {
        let hull = square();
        assert!((convex_score(&[hull.clone()], &hull) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_area_convex_hull_scores_zero() {
        let degenerate = Polygon(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert_eq!(convex_score(&[square()], &degenerate), 0.0);
    }

    #[test]
    fn test_smaller_alpha_hull_scores_below_one() {
        let half = Polygon(vec![
            Point::new(0.0, 0.0),
            Point::new(0.5, 0.0),
            Point::new(0.5, 1.0),
            Point::new(0.0, 1.0),
        ]);
        let score = convex_score(&[half], &square());
        assert!((score - 0.5).abs() < 1e-12);
    }
}
