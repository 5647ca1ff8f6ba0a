//! Newton-Raphson method

use super::algorithms::{Algorithm, OpenFamily};
use super::common::{Progress, Tracker};
use super::config::CommonCfg;
use super::errors::RootFailure;
use super::report::ConvergenceResult;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Newton);


/// Newton step `x - f(x) / f'(x)`, failing on a vanishing derivative.
#[inline]
fn newton_step(x: f64, fx: f64, dfx: f64) -> Result<f64, RootFailure> {
    if dfx == 0.0 {
        return Err(RootFailure::DerivativeZero { x });
    }
    Ok(x - fx / dfx)
}


fn newton_loop<F, G>(
    func: &mut F,
    dfunc: &mut G,
    x0: f64,
    tracker: &mut Tracker,
) -> Result<Progress, RootFailure>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    let mut x  = x0;
    let mut fx = func(x);
    if tracker.start(x, fx)? == Progress::Converged {
        return Ok(Progress::Converged);
    }

    while !tracker.exhausted() {
        let prev = x;
        x  = newton_step(x, fx, dfunc(x))?;
        fx = func(x);
        if tracker.record(x, fx, prev)? == Progress::Converged {
            return Ok(Progress::Converged);
        }
    }

    Ok(Progress::Continue)
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : analytic first derivative of `func`
/// - `x0`    : finite initial guess
/// - `cfg`   : [`CommonCfg`] (tolerance, `max_iter`)
///
/// # Returns
/// [`ConvergenceResult`] with row 0 at `x0` and one row per Newton step
/// `xₙ₊₁ = xₙ - f(xₙ) / f'(xₙ)`.
///
/// # Failures
/// - [`RootFailure::InvalidGuess`]        : `x0` non-finite (empty table)
/// - [`RootFailure::DerivativeZero`]      : `f'(x) == 0` at an iterate
/// - [`RootFailure::NonFiniteEvaluation`] : `f(x)` or the step produced NaN/inf
/// - [`RootFailure::IterationLimit`]      : budget exhausted
///
/// # Notes
/// - Convergence is *local only*: poor guesses can diverge or cycle. For
///   guaranteed convergence use a bracketed method (e.g. bisection).
/// - At a multiple root convergence drops to linear; see
///   [`super::multiple_roots::multiple_roots`].
pub fn newton<F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    cfg: CommonCfg,
) -> ConvergenceResult
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return ConvergenceResult::rejected(ALGORITHM, RootFailure::InvalidGuess { x0 });
    }

    let mut tracker = Tracker::new(ALGORITHM, &cfg);
    let outcome = newton_loop(&mut func, &mut dfunc, x0, &mut tracker);
    tracker.finish(outcome)
}
