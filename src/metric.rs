//! Error metrics between successive iterates.
//!
//! ┌ [`compute_error`]        : scalar iterates
//! └ [`compute_vector_error`] : vector iterates under an L1 / L2 / L∞ [`Norm`]
//!
//! Relative mode divides by `|current|` for scalars and by `max|current|`
//! (the largest component magnitude, not per component) for vectors.

use thiserror::Error;
use crate::tolerance::ErrorType;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MetricError {
    #[error("relative error undefined: current iterate is zero")]
    ZeroIterate,

    #[error("length mismatch: current has {current} components, previous has {previous}")]
    LengthMismatch { current: usize, previous: usize },
}

/// Vector norm used to measure the step between iterates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Norm {
    /// Sum of absolute differences.
    L1,
    /// Euclidean length of the difference.
    #[default]
    L2,
    /// Largest absolute difference.
    LInf,
}

impl Norm {
    /// Norm of `|x - y|`, `x` and `y` of equal length.
    pub fn distance(self, x: &[f64], y: &[f64]) -> f64 {
        let diffs = x.iter().zip(y).map(|(xi, yi)| (xi - yi).abs());
        match self {
            Norm::L1   => diffs.sum(),
            Norm::L2   => diffs.map(|d| d * d).sum::<f64>().sqrt(),
            Norm::LInf => diffs.fold(0.0, f64::max),
        }
    }
}

/// `|current - previous|`, divided by `|current|` in relative mode.
///
/// # Errors
/// [`MetricError::ZeroIterate`] in relative mode when `current == 0`.
pub fn compute_error(current: f64, previous: f64, error_type: ErrorType) -> Result<f64, MetricError> {
    let step = (current - previous).abs();
    match error_type {
        ErrorType::Absolute => Ok(step),
        ErrorType::Relative => {
            if current == 0.0 {
                return Err(MetricError::ZeroIterate);
            }
            Ok(step / current.abs())
        }
    }
}

/// `norm(x - x_prev)`, divided by `max|x|` in relative mode.
///
/// # Errors
/// ├ [`MetricError::LengthMismatch`] : slices differ in length
/// └ [`MetricError::ZeroIterate`]    : relative mode with `x` identically zero
pub fn compute_vector_error(
    x: &[f64],
    x_prev: &[f64],
    norm: Norm,
    error_type: ErrorType,
) -> Result<f64, MetricError> {
    if x.len() != x_prev.len() {
        return Err(MetricError::LengthMismatch { current: x.len(), previous: x_prev.len() });
    }

    let step = norm.distance(x, x_prev);
    match error_type {
        ErrorType::Absolute => Ok(step),
        ErrorType::Relative => {
            let scale = x.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
            if scale == 0.0 {
                return Err(MetricError::ZeroIterate);
            }
            Ok(step / scale)
        }
    }
}
