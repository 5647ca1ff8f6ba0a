//! Linear Spline
//!
//! Implements piecewise-[linear interpolation](https://en.wikipedia.org/wiki/Linear_interpolation).
//!
//! Each consecutive pair `(x[i], y[i])`, `(x[i+1], y[i+1])` defines
//! a line segment valid on `[x[i], x[i+1]]`. The spline is continuous but
//! its derivative jumps at interior knots.

use tracing::debug;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::CommonCfg;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::model::{Form, InterpolationModel, Segment};
use crate::interpolation::polynomial::Polynomial;
use crate::interpolation::spline::helpers::sorted_points;


/// Builds the linear spline through the points of `cfg`.
///
/// Points are sorted by `x` first. Segment `i` is stored as
///
/// ```text
/// sᵢ(t) = y[i] + (y[i+1] - y[i]) / (x[i+1] - x[i]) · t,   t = x - x[i]
/// ```
///
/// # Errors
/// Input errors from [`CommonCfg::validate`].
pub fn interpolate(cfg: &CommonCfg) -> Result<InterpolationModel, InterpolationError> {
    cfg.validate()?;
    let (x, y) = sorted_points(cfg.x(), cfg.y());

    let segments: Vec<Segment> = x
        .windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| Segment {
            x_start : xs[0],
            x_end   : xs[1],
            local   : Polynomial::new(vec![ys[0], (ys[1] - ys[0]) / (xs[1] - xs[0])]),
        })
        .collect();

    debug!(algorithm = "linear_spline", segments = segments.len(), "model built");
    Ok(InterpolationModel::new(Algorithm::LinearSpline, Form::Piecewise(segments), cfg.decimals()))
}
