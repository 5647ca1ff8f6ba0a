//! Secant method

use super::algorithms::{Algorithm, OpenFamily};
use super::common::{Progress, Tracker};
use super::config::CommonCfg;
use super::errors::RootFailure;
use super::report::ConvergenceResult;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Secant);


/// Calculates the secant x-intercept for the line
/// connecting `(x0, f0)` and `(x1, f1)`
///
/// # Returns
/// - `Ok(x_next)` if the denominator `f1 - f0` is resolvable at the scale of `f0, f1`
/// - `Err(DivisionByZero)` if it is zero relative to that scale
#[inline]
pub(crate) fn calculate_secant_x_intercept(
    (x0, f0): (f64, f64),
    (x1, f1): (f64, f64),
) -> Result<f64, RootFailure> {
    let denom = f1 - f0;

    // zero relative to max(|f0|, |f1|)
    if denom.abs() <= f64::EPSILON * f0.abs().max(f1.abs()) {
        return Err(RootFailure::DivisionByZero { x: x1 });
    }

    Ok(x1 - f1 * (x1 - x0) / denom)
}


fn secant_loop<F>(
    func: &mut F,
    x0: f64,
    x1: f64,
    tracker: &mut Tracker,
) -> Result<Progress, RootFailure>
where F: FnMut(f64) -> f64 {
    let mut prev = (x0, func(x0));
    if tracker.start(prev.0, prev.1)? == Progress::Converged {
        return Ok(Progress::Converged);
    }

    let mut curr = (x1, func(x1));
    if tracker.record(curr.0, curr.1, prev.0)? == Progress::Converged {
        return Ok(Progress::Converged);
    }

    while !tracker.exhausted() {
        let x_next = calculate_secant_x_intercept(prev, curr)?;
        let f_next = func(x_next);
        prev = curr;
        curr = (x_next, f_next);
        if tracker.record(curr.0, curr.1, prev.0)? == Progress::Converged {
            return Ok(Progress::Converged);
        }
    }

    Ok(Progress::Continue)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial guess.  Must be finite and not equal to `x1`
/// - `x1`   : Second initial guess. Must be finite and not equal to `x0`
/// - `cfg`  : [`CommonCfg`] (tolerance, `max_iter`)
///
/// # Returns
/// [`ConvergenceResult`] where row 0 is `x0`, row 1 is `x1` (the first
/// iteration, with its error against `x0`) and each later row is
///
/// ```text
/// xₙ₊₁ = xₙ - f(xₙ)·(xₙ - xₙ₋₁) / (f(xₙ) - f(xₙ₋₁))
/// ```
///
/// # Failures
/// - [`RootFailure::InvalidSeeds`]        : seeds non-finite or equal (empty table)
/// - [`RootFailure::DivisionByZero`]      : `f(xₙ) - f(xₙ₋₁)` numerically zero,
///   which also hints at a multiple root
/// - [`RootFailure::NonFiniteEvaluation`] : `func` produced NaN/inf
/// - [`RootFailure::IterationLimit`]      : budget exhausted
///
/// # Notes
/// - Superlinear (order ≈ 1.618) near a simple root, no derivative needed.
/// - The seeds need not bracket the root.
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: CommonCfg,
) -> ConvergenceResult
where F: FnMut(f64) -> f64 {

    if !(x0.is_finite() && x1.is_finite()) || x0 == x1 {
        return ConvergenceResult::rejected(ALGORITHM, RootFailure::InvalidSeeds { x0, x1 });
    }

    let mut tracker = Tracker::new(ALGORITHM, &cfg);
    let outcome = secant_loop(&mut func, x0, x1, &mut tracker);
    tracker.finish(outcome)
}
