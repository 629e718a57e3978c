//! Scagnostics: scatterplot diagnostics for 2-D point scatters.
//!
//! [`scag`] is the crate's single entry point: it runs the full pipeline
//! (normalize → bin → Delaunay → graph → MST → outlier-prune → measures →
//! hulls) over a slice of [`core::types::Point`] and returns a
//! [`core::types::ScagResult`].

pub mod binning;
pub mod core;
pub mod delaunay;
pub mod graph;
pub mod hulls;
pub mod measures;
pub mod normalize;
#[cfg(feature = "logging")]
mod settings;

use tracing::debug;

use crate::core::error::Result;
use crate::core::types::{Point, ScagOptions, ScagResult};
use crate::core::validation::{validate_options, validate_points};
use crate::measures::{obtuse_v2_corners, v1_vertices, v2_corners};

/// Runs the full scagnostics pipeline over `points` under `options`.
///
/// Requires at least three points; every other precondition in `options`
/// (e.g. `minBins <= maxBins`) is checked up front, so every stage below
/// this point can assume validated input.
pub fn scag(points: &[Point], options: &ScagOptions) -> Result<ScagResult> {
    validate_points(points)?;
    validate_options(options)?;

    let normalized_points = if options.is_normalized {
        points.to_vec()
    } else {
        normalize::normalize(points)
    };

    let (sites, bin_size, bin_radius, bins) = if options.is_binned {
        (normalized_points.clone(), 0, 0.0, Vec::new())
    } else {
        let binning = binning::bin(&normalized_points, options);
        let sites: Vec<Point> = binning.bins.iter().map(|b| b.center).collect();
        (sites, binning.grid_size, binning.radius, binning.bins)
    };
    debug!(sites = sites.len(), bin_size, "binning complete");

    let triangulation = delaunay::delaunay(&sites);
    let graph = graph::build_graph(&triangulation);
    let mst = graph::kruskal_mst(&graph);
    debug!(nodes = mst.nodes.len(), links = mst.links.len(), "MST built");

    let outlying = graph::prune_outliers(&mst, options.outlying_upper_bound);
    let tree = &outlying.pruned;
    debug!(
        score = outlying.score,
        removed = outlying.outlying_links.len(),
        "outlier pruning complete"
    );

    let convex_hull = hulls::convex_hull(&triangulation);
    let alpha = if outlying.upper_bound > 0.0 {
        1.0 / outlying.upper_bound
    } else {
        f64::INFINITY
    };
    let alpha_hull = hulls::alpha_shape(&triangulation, alpha);

    let skewed_score = measures::skewed_score(tree);
    let sparse_score = measures::sparse_score(tree);
    let clumpy_score = measures::clumpy_score(tree);
    let striated_score = measures::striated_score(tree);
    let convex_score = measures::convex_score(&alpha_hull, &convex_hull);
    let skinny_score = measures::skinny_score(&alpha_hull);
    let stringy_score = measures::stringy_score(tree);
    let monotonic_score = measures::monotonic_score(tree);
    let v1s = v1_vertices(tree);
    let v2_corner_list = v2_corners(tree);
    let obtuse_corners = obtuse_v2_corners(tree);

    Ok(ScagResult {
        normalized_points,
        bins,
        bin_size,
        bin_radius,
        triangles: triangulation.triangles.clone(),
        triangle_coordinates: triangulation.triangle_coordinates.clone(),
        delaunay: triangulation,
        graph,
        mst,
        outlying_score: outlying.score,
        outlying_upper_bound: outlying.upper_bound,
        outlying_links: outlying.outlying_links,
        outlying_points: outlying.outlying_points,
        no_outlying_tree: outlying.pruned,
        convex_hull,
        alpha_hull,

        skewed_score,
        sparse_score,
        clumpy_score,
        striated_score,
        convex_score,
        skinny_score,
        stringy_score,
        monotonic_score,

        v1s,
        v2_corners: v2_corner_list,
        obtuse_v2_corners: obtuse_corners,
    })
}
