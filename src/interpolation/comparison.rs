//! Builds every interpolation model on the same points.

use tracing::debug;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::CommonCfg;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::model::InterpolationModel;
use crate::interpolation::{lagrange, linear, newton, spline, vandermonde};


#[derive(Debug, Clone)]
pub struct ComparisonEntry {
    pub algorithm : Algorithm,
    pub model     : Result<InterpolationModel, InterpolationError>,
}


/// Runs `algorithm` on `cfg`.
pub fn run(algorithm: Algorithm, cfg: &CommonCfg) -> Result<InterpolationModel, InterpolationError> {
    match algorithm {
        Algorithm::Vandermonde  => vandermonde::interpolate(cfg),
        Algorithm::Lagrange     => lagrange::interpolate(cfg),
        Algorithm::Newton       => newton::interpolate(cfg),
        Algorithm::LinearSpline => linear::interpolate(cfg),
        Algorithm::CubicSpline  => spline::natural::interpolate(cfg),
    }
}


/// Runs every engine in [`Algorithm::ALL`] order, keeping each model or
/// error (e.g. the cubic spline rejects 3 points while the others succeed).
pub fn compare(cfg: &CommonCfg) -> Vec<ComparisonEntry> {
    let entries: Vec<ComparisonEntry> = Algorithm::ALL
        .iter()
        .map(|&algorithm| ComparisonEntry { algorithm, model: run(algorithm, cfg) })
        .collect();

    debug!(
        built = entries.iter().filter(|e| e.model.is_ok()).count(),
        total = entries.len(),
        "interpolation comparison finished"
    );
    entries
}
