//! Natural cubic spline
//!
//! Piece `i` is `sᵢ(t) = aᵢ + bᵢt + cᵢt² + dᵢt³` with `t = x - x[i]` on
//! `[x[i], x[i+1]]`. The `4m` unknowns of the `m` pieces come from
//! ├ interpolation at both ends of each piece          : `2m` rows
//! ├ equal `s'` and `s''` at each interior knot        : `2(m - 1)` rows
//! └ `s'' = 0` at the two outer knots (natural ends)   : `2` rows

use nalgebra::{DMatrix, DVector};
use tracing::{debug, warn};

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::CommonCfg;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::model::{Form, InterpolationModel, Segment};
use crate::interpolation::polynomial::Polynomial;
use crate::interpolation::spline::helpers::{sorted_points, spacings};


/// Assembles the `4m × 4m` system, unknowns ordered `[a₀ b₀ c₀ d₀ a₁ …]`.
fn assemble(h: &[f64], y: &[f64]) -> (DMatrix<f64>, DVector<f64>) {
    let m = h.len();
    let size = 4 * m;
    let mut a = DMatrix::zeros(size, size);
    let mut rhs = DVector::zeros(size);
    let mut row = 0;

    // sᵢ(0) = yᵢ, sᵢ(hᵢ) = yᵢ₊₁
    for (i, &hi) in h.iter().enumerate() {
        let k = 4 * i;
        a[(row, k)] = 1.0;
        rhs[row] = y[i];
        row += 1;

        a[(row, k)]     = 1.0;
        a[(row, k + 1)] = hi;
        a[(row, k + 2)] = hi * hi;
        a[(row, k + 3)] = hi * hi * hi;
        rhs[row] = y[i + 1];
        row += 1;
    }

    // s'ᵢ(hᵢ) = s'ᵢ₊₁(0), s''ᵢ(hᵢ) = s''ᵢ₊₁(0)
    for (i, &hi) in h.iter().enumerate().take(m - 1) {
        let k = 4 * i;
        a[(row, k + 1)] = 1.0;
        a[(row, k + 2)] = 2.0 * hi;
        a[(row, k + 3)] = 3.0 * hi * hi;
        a[(row, k + 5)] = -1.0;
        row += 1;

        a[(row, k + 2)] = 2.0;
        a[(row, k + 3)] = 6.0 * hi;
        a[(row, k + 6)] = -2.0;
        row += 1;
    }

    // s''₀(0) = 0, s''ₘ₋₁(hₘ₋₁) = 0
    a[(row, 2)] = 2.0;
    row += 1;
    let k = 4 * (m - 1);
    a[(row, k + 2)] = 2.0;
    a[(row, k + 3)] = 6.0 * h[m - 1];

    (a, rhs)
}


/// Builds the natural cubic spline through the points of `cfg`.
///
/// Points are sorted by `x`; at least 4 are required.
///
/// # Errors
/// - Input errors from [`CommonCfg::validate`]
/// - [`InterpolationError::InsufficientPoints`] for fewer than 4 points
/// - [`InterpolationError::IllConditioned`] if the spline system has no solution
pub fn interpolate(cfg: &CommonCfg) -> Result<InterpolationModel, InterpolationError> {
    cfg.validate()?;
    let need = Algorithm::CubicSpline.min_points();
    if cfg.x().len() < need {
        return Err(InterpolationError::InsufficientPoints { got: cfg.x().len(), need });
    }

    let (x, y) = sorted_points(cfg.x(), cfg.y());
    let h = spacings(&x);
    let (a, rhs) = assemble(&h, &y);

    let sol = match a.lu().solve(&rhs) {
        Some(s) if s.iter().all(|v| v.is_finite()) => s,
        _ => {
            warn!(algorithm = "cubic_spline", points = x.len(), "spline system has no solution");
            return Err(InterpolationError::IllConditioned);
        }
    };

    let segments: Vec<Segment> = (0..h.len())
        .map(|i| Segment {
            x_start : x[i],
            x_end   : x[i + 1],
            local   : Polynomial::new(sol.rows(4 * i, 4).iter().copied().collect()),
        })
        .collect();

    debug!(algorithm = "cubic_spline", segments = segments.len(), "model built");
    Ok(InterpolationModel::new(Algorithm::CubicSpline, Form::Piecewise(segments), cfg.decimals()))
}
