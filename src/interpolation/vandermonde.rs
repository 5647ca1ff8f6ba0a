//! Vandermonde interpolation

use nalgebra::{DMatrix, DVector};
use tracing::{debug, warn};

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::CommonCfg;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::model::{Form, InterpolationModel};
use crate::interpolation::polynomial::Polynomial;


/// `V[i, j] = x[i]^j`.
pub fn vandermonde_matrix(x: &[f64]) -> DMatrix<f64> {
    let n = x.len();
    DMatrix::from_fn(n, n, |i, j| x[i].powi(j as i32))
}


/// Solves `V·c = y` for the power-basis coefficients `c` (ascending).
///
/// # Errors
/// - Input errors from [`CommonCfg::validate`]
/// - [`InterpolationError::SingularSystem`] if LU cannot solve `V`
///
/// # Notes
/// `V` is badly conditioned for many or widely spread nodes, so high-degree
/// fits lose accuracy; prefer [`super::newton::interpolate`] there.
pub fn interpolate(cfg: &CommonCfg) -> Result<InterpolationModel, InterpolationError> {
    cfg.validate()?;
    let x = cfg.x();
    let v = vandermonde_matrix(x);
    let y = DVector::from_column_slice(cfg.y());

    let coeffs = match v.lu().solve(&y) {
        Some(c) if c.iter().all(|v| v.is_finite()) => c,
        _ => {
            warn!(algorithm = "vandermonde", points = x.len(), "singular Vandermonde system");
            return Err(InterpolationError::SingularSystem);
        }
    };

    debug!(algorithm = "vandermonde", points = x.len(), "model built");
    Ok(InterpolationModel::new(
        Algorithm::Vandermonde,
        Form::Power(Polynomial::new(coeffs.iter().copied().collect())),
        cfg.decimals(),
    ))
}
