//! Lagrange interpolation

use tracing::debug;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::CommonCfg;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::model::{Form, InterpolationModel};


/// Builds `P(x) = Σ yᵢ·Lᵢ(x)` with
///
/// ```text
/// Lᵢ(x) = Π_{j≠i} (x - xⱼ) / (xᵢ - xⱼ)
/// ```
///
/// Same polynomial as [`super::vandermonde::interpolate`], built without a
/// linear solve. The model evaluates the product form directly; the basis
/// and the expanded polynomial are available through
/// [`InterpolationModel::lagrange_basis`] and [`InterpolationModel::polynomial`].
///
/// # Errors
/// Input errors from [`CommonCfg::validate`].
pub fn interpolate(cfg: &CommonCfg) -> Result<InterpolationModel, InterpolationError> {
    cfg.validate()?;
    let nodes  = cfg.x().to_vec();
    let values = cfg.y().to_vec();

    debug!(algorithm = "lagrange", points = nodes.len(), "model built");
    Ok(InterpolationModel::new(
        Algorithm::Lagrange,
        Form::Lagrange { nodes, values },
        cfg.decimals(),
    ))
}
