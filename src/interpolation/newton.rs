//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients are the diagonal of the divided-difference table and the
//! model is evaluated in nested (Horner-like) form.

use tracing::debug;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::CommonCfg;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::model::{Form, InterpolationModel};


/// Full divided-difference table.
///
/// Column `j` holds the `j`-th order differences `f[xᵢ₋ⱼ, …, xᵢ]` in rows
/// `i >= j`; entries above the diagonal are `None`.
pub fn divided_difference_table(x: &[f64], y: &[f64]) -> Vec<Vec<Option<f64>>> {
    let n = x.len();
    let mut table = vec![vec![None; n]; n];
    for (row, &yi) in table.iter_mut().zip(y) {
        row[0] = Some(yi);
    }

    for j in 1..n {
        for i in j..n {
            if let (Some(hi), Some(lo)) = (table[i][j - 1], table[i - 1][j - 1]) {
                table[i][j] = Some((hi - lo) / (x[i] - x[i - j]));
            }
        }
    }
    table
}


/// Computes Newton divided-difference coefficients.
///
/// Returns a coefficient vector `c` s.t.
/// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`.
#[inline]
fn divided_differences(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut c = y.to_vec();

    for j in 1..n {
        for i in (j..n).rev() {
            c[i] = (c[i] - c[i - 1]) / (x[i] - x[i - j]);
        }
    }

    c
}


/// Performs Newton divided-difference interpolation.
///
/// Nodes are kept in the given order; the coefficients are the diagonal
/// of [`divided_difference_table`].
///
/// # Errors
/// Input errors from [`CommonCfg::validate`].
pub fn interpolate(cfg: &CommonCfg) -> Result<InterpolationModel, InterpolationError> {
    cfg.validate()?;
    let nodes = cfg.x().to_vec();
    let coefficients = divided_differences(&nodes, cfg.y());

    debug!(algorithm = "newton", points = nodes.len(), "model built");
    Ok(InterpolationModel::new(
        Algorithm::Newton,
        Form::Newton { nodes, coefficients },
        cfg.decimals(),
    ))
}
