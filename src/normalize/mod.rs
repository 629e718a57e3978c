//! Normalization: maps raw points into the unit square.
//!
//! A zero-range axis (every point shares that coordinate) maps to the
//! constant 0.5 rather than dividing by zero.

use crate::core::types::Point;
use crate::core::util::bounds;

/// Maps `points` into `[0, 1]^2` by per-axis min-max scaling. Returns a new
/// vector; `points` is left untouched.
pub fn normalize(points: &[Point]) -> Vec<Point> {
    let ((min_x, max_x), (min_y, max_y)) = bounds(points);
    let range_x = max_x - min_x;
    let range_y = max_y - min_y;

    points
        .iter()
        .map(|p| {
            let nx = if range_x == 0.0 {
                0.5
            } else {
                (p.x - min_x) / range_x
            };
            let ny = if range_y == 0.0 {
                0.5
            } else {
                (p.y - min_y) / range_y
            };
            Point::new(nx, ny)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_maps_to_unit_square() {
        let pts = vec![
            Point::new(-5.0, 10.0),
            Point::new(5.0, 20.0),
            Point::new(0.0, 15.0),
        ];
        let normalized = normalize(&pts);
        for p in &normalized {
            assert!((0.0..=1.0).contains(&p.x));
            assert!((0.0..=1.0).contains(&p.y));
        }
        assert_eq!(normalized[0], Point::new(0.0, 0.0));
        assert_eq!(normalized[1], Point::new(1.0, 1.0));
        assert_eq!(normalized[2], Point::new(0.5, 0.5));
    }

    #[test]
    fn test_normalize_zero_range_axis_maps_to_half() {
        let pts = vec![
            Point::new(3.0, 1.0),
            Point::new(3.0, 2.0),
            Point::new(3.0, 3.0),
        ];
        let normalized = normalize(&pts);
        for p in &normalized {
            assert_eq!(p.x, 0.5);
        }
    }
}
