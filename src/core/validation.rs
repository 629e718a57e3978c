/*!
# Input Validation

Centralizes the precondition checks the `scag` entry point requires, so
every pipeline stage downstream can assume validated input.
*/

use crate::core::error::{Result, ScagnosticsError};
use crate::core::types::{Point, ScagOptions};

/// Returns `Ok(())` iff `points` has at least three entries and every
/// coordinate is finite.
pub fn validate_points(points: &[Point]) -> Result<()> {
    if points.len() < 3 {
        return Err(ScagnosticsError::insufficient_points(format!(
            "need at least 3 points, got {}",
            points.len()
        )));
    }
    for p in points {
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(ScagnosticsError::invalid_option(format!(
                "point ({}, {}) is not finite",
                p.x, p.y
            )));
        }
    }
    Ok(())
}

/// Returns `Ok(())` iff `options` is internally consistent: positive bin
/// sizes and `minBins <= maxBins`.
pub fn validate_options(options: &ScagOptions) -> Result<()> {
    if options.start_bin_grid_size == 0 {
        return Err(ScagnosticsError::invalid_option(
            "startBinGridSize must be positive",
        ));
    }
    if options.min_bins == 0 || options.max_bins == 0 {
        return Err(ScagnosticsError::invalid_option(
            "minBins and maxBins must be positive",
        ));
    }
    if options.min_bins > options.max_bins {
        return Err(ScagnosticsError::invalid_option(format!(
            "minBins ({}) must be <= maxBins ({})",
            options.min_bins, options.max_bins
        )));
    }
    if let Some(bound) = options.outlying_upper_bound {
        if !bound.is_finite() || bound < 0.0 {
            return Err(ScagnosticsError::invalid_option(
                "outlyingUpperBound must be a non-negative finite number",
            ));
        }
    }
    Ok(())
}
