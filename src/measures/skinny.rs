//! Skinny: how far the alpha-shape departs from a circle's area-to-perimeter
//! ratio, the limit shape that minimizes this measure.

use crate::core::types::Polygon;
use crate::hulls::{polygon_area, polygon_perimeter};

/// `1 - sqrt(4*pi*area) / perimeter`, summing area and perimeter across
/// every component of the (possibly multi-component) alpha-shape.
/// Degenerate hulls (zero perimeter) score 1 (maximally "skinny").
pub fn skinny_score(alpha_hull: &[Polygon]) -> f64 {
    let area: f64 = alpha_hull.iter().map(|p| polygon_area(&p.0)).sum();
    let perimeter: f64 = alpha_hull.iter().map(|p| polygon_perimeter(&p.0)).sum();
    if perimeter == 0.0 {
        return 1.0;
    }
    (1.0 - (4.0 * std::f64::consts::PI * area).sqrt() / perimeter).clamp(0.0, 1.0)
}
