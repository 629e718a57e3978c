//! Hexagonal, adaptive spatial binning.
//!
//! Binning aggregates normalized points into a set of "sites" (bin
//! centers) small enough for Delaunay triangulation to stay cheap but
//! large enough to retain the scatter's shape. The target bin count is
//! kept in `[minBins, maxBins]` by an adaptive grid-size search.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::core::types::{Bin, Point, ScagOptions};

/// Binning gives up narrowing the grid size after this many iterations and
/// returns the closest bin set found so far.
const MAX_ITERATIONS: u32 = 64;

/// A completed binning pass: the bins themselves, the grid size that
/// produced them, and the hex radius used (0 for the degenerate
/// one-bin-per-point path).
pub struct Binning {
    pub bins: Vec<Bin>,
    pub grid_size: u32,
    pub radius: f64,
}

/// Produces the set of bins (and thus the sites) for `points` under
/// `options`. `points` is expected to already be normalized to `[0, 1]^2`.
pub fn bin(points: &[Point], options: &ScagOptions) -> Binning {
    let distinct = distinct_points(points);
    if (distinct.len() as u32) < options.min_bins {
        debug!(
            distinct = distinct.len(),
            min_bins = options.min_bins,
            "fewer distinct points than minBins, one bin per point"
        );
        let bins = distinct
            .into_iter()
            .map(|(center, members)| Bin {
                center,
                radius: 0.0,
                points: members,
            })
            .collect();
        return Binning { bins, grid_size: 0, radius: 0.0 };
    }

    let mut grid_size = options.start_bin_grid_size.max(1);
    let mut best: Option<(Vec<Bin>, u32, f64)> = None;
    let mut best_distance = u32::MAX;

    for iteration in 0..MAX_ITERATIONS {
        let short_diagonal = 1.0 / grid_size as f64;
        let radius = short_diagonal / std::f64::consts::SQRT_2;
        let bins = hexbin(points, radius);
        let count = bins.len() as u32;

        let distance = if count < options.min_bins {
            options.min_bins - count
        } else if count > options.max_bins {
            count - options.max_bins
        } else {
            0
        };
        if distance < best_distance {
            best_distance = distance;
            best = Some((bins.clone(), grid_size, radius));
        }
        if distance == 0 {
            debug!(iteration, grid_size, bins = count, "binning converged");
            return Binning { bins, grid_size, radius };
        }

        if count > options.max_bins {
            grid_size = (grid_size / 2).max(1);
        } else {
            grid_size += 5;
        }
    }

    warn!(
        iterations = MAX_ITERATIONS,
        "binning did not converge within the iteration cap, returning closest bin set"
    );
    let (bins, grid_size, radius) = best.unwrap_or_default();
    Binning { bins, grid_size, radius }
}

/// Groups points sharing the same (rounded) coordinate, preserving first-seen
/// order so results stay deterministic for a given input order.
fn distinct_points(points: &[Point]) -> Vec<(Point, Vec<Point>)> {
    let mut order: Vec<Point> = Vec::new();
    let mut groups: HashMap<Point, Vec<Point>> = HashMap::new();
    for &p in points {
        groups.entry(p).or_insert_with(|| {
            order.push(p);
            Vec::new()
        });
        groups.get_mut(&p).unwrap().push(p);
    }
    order.into_iter().map(|p| (p, groups.remove(&p).unwrap())).collect()
}

/// Assigns each point to the hexagon it falls in, for a hex tiling with
/// circumradius `r`. Follows the standard "two candidate centers, pick the
/// nearer" hexbin construction: a naive rectangular round gives the wrong
/// answer for points near a hex's diagonal edges, so points close to a row
/// boundary are re-checked against the adjacent row's candidate center.
fn hexbin(points: &[Point], r: f64) -> Vec<Bin> {
    let dx = r * 3f64.sqrt();
    let dy = r * 1.5;

    let mut order: Vec<(i64, i64)> = Vec::new();
    let mut groups: HashMap<(i64, i64), (f64, f64, Vec<Point>)> = HashMap::new();

    for &p in points {
        let py = p.y / dy;
        let mut pj = py.round();
        let px = p.x / dx - (if pj as i64 & 1 != 0 { 0.5 } else { 0.0 });
        let mut pi = px.round();
        let py1 = py - pj;

        if (py1 * 3.0).abs() > 1.0 {
            let px1 = px - pi;
            let pi2 = pi + if px < pi { -0.5 } else { 0.5 };
            let pj2 = pj + if py < pj { -1.0 } else { 1.0 };
            let px2 = px - pi2;
            let py2 = py - pj2;
            if px1 * px1 + py1 * py1 > px2 * px2 + py2 * py2 {
                pi = pi2 + if (pj as i64) & 1 != 0 { 0.5 } else { -0.5 };
                pj = pj2;
            }
        }

        let key = (pi as i64, pj as i64);
        let entry = groups.entry(key).or_insert_with(|| {
            let cx = pi * dx + (if pj as i64 & 1 != 0 { dx / 2.0 } else { 0.0 });
            let cy = pj * dy;
            order.push(key);
            (cx, cy, Vec::new())
        });
        entry.2.push(p);
    }

    order
        .into_iter()
        .map(|key| {
            let (cx, cy, members) = groups.remove(&key).unwrap();
            Bin {
                center: Point::new(cx, cy),
                radius: r,
                points: members,
            }
        })
        .collect()
}
