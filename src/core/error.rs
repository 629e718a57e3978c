/*!
# Unified Error Type

This module provides a single error enum for every failure mode the
`scag` pipeline can surface at its public boundary.
*/

use std::error::Error;
use std::fmt;

/// Unified error type for scagnostics computation.
#[derive(Debug)]
pub enum ScagnosticsError {
    /// Fewer than three points were supplied.
    InsufficientPoints(String),

    /// An option value was out of range or unsupported (e.g. `minBins > maxBins`,
    /// an unknown `binType`, a negative bin size).
    InvalidOption(String),

    /// A pipeline stage hit an unrecoverable condition (should not occur for
    /// validated input; surfaced rather than panicking).
    AlgorithmError(String),
}

impl ScagnosticsError {
    /// Creates an insufficient-points error.
    pub fn insufficient_points(message: impl Into<String>) -> Self {
        ScagnosticsError::InsufficientPoints(message.into())
    }

    /// Creates an invalid-option error.
    pub fn invalid_option(message: impl Into<String>) -> Self {
        ScagnosticsError::InvalidOption(message.into())
    }

    /// Creates an algorithm error.
    pub fn algorithm_error(message: impl Into<String>) -> Self {
        ScagnosticsError::AlgorithmError(message.into())
    }
}

impl fmt::Display for ScagnosticsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScagnosticsError::InsufficientPoints(msg) => {
                write!(f, "insufficient points: {}", msg)
            }
            ScagnosticsError::InvalidOption(msg) => write!(f, "invalid option: {}", msg),
            ScagnosticsError::AlgorithmError(msg) => write!(f, "algorithm error: {}", msg),
        }
    }
}

impl Error for ScagnosticsError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScagnosticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScagnosticsError::insufficient_points("need at least 3 points, got 2");
        assert_eq!(
            format!("{}", err),
            "insufficient points: need at least 3 points, got 2"
        );

        let err = ScagnosticsError::invalid_option("minBins (100) > maxBins (50)");
        assert_eq!(
            format!("{}", err),
            "invalid option: minBins (100) > maxBins (50)"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn Error> = Box::new(ScagnosticsError::algorithm_error("no sites"));
        assert_eq!(err.to_string(), "algorithm error: no sites");
    }
}
