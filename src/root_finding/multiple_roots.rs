//! Newton's method modified for roots of multiplicity > 1

use super::algorithms::{Algorithm, OpenFamily};
use super::common::{Progress, Tracker};
use super::config::CommonCfg;
use super::errors::RootFailure;
use super::report::ConvergenceResult;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::MultipleRoots);


/// `x - f·f' / (f'² - f·f'')`, i.e. Newton applied to `u = f / f'`.
#[inline]
fn multiple_roots_step(x: f64, fx: f64, dfx: f64, d2fx: f64) -> Result<f64, RootFailure> {
    if dfx == 0.0 {
        return Err(RootFailure::DerivativeZero { x });
    }
    let denom = dfx * dfx - fx * d2fx;
    if denom == 0.0 {
        return Err(RootFailure::DivisionByZero { x });
    }
    Ok(x - fx * dfx / denom)
}


fn multiple_roots_loop<F, G, H>(
    func: &mut F,
    dfunc: &mut G,
    d2func: &mut H,
    x0: f64,
    tracker: &mut Tracker,
) -> Result<Progress, RootFailure>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
    H: FnMut(f64) -> f64,
{
    let mut x  = x0;
    let mut fx = func(x);
    if tracker.start(x, fx)? == Progress::Converged {
        return Ok(Progress::Converged);
    }

    while !tracker.exhausted() {
        let prev = x;
        x  = multiple_roots_step(x, fx, dfunc(x), d2func(x))?;
        fx = func(x);
        if tracker.record(x, fx, prev)? == Progress::Converged {
            return Ok(Progress::Converged);
        }
    }

    Ok(Progress::Continue)
}


/// Finds a (possibly repeated) root of `func` with the modified Newton
/// iteration
///
/// ```text
/// xₙ₊₁ = xₙ - f(xₙ)·f'(xₙ) / (f'(xₙ)² - f(xₙ)·f''(xₙ))
/// ```
///
/// which restores quadratic convergence at roots where `f'` also vanishes.
///
/// # Failures
/// - [`RootFailure::InvalidGuess`]        : `x0` non-finite (empty table)
/// - [`RootFailure::DerivativeZero`]      : `f'(x) == 0` at an iterate that is not a root
/// - [`RootFailure::DivisionByZero`]      : `f'² - f·f'' == 0`
/// - [`RootFailure::NonFiniteEvaluation`] : NaN/inf iterate or function value
/// - [`RootFailure::IterationLimit`]      : budget exhausted
pub fn multiple_roots<F, G, H>(
    mut func: F,
    mut dfunc: G,
    mut d2func: H,
    x0: f64,
    cfg: CommonCfg,
) -> ConvergenceResult
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
    H: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return ConvergenceResult::rejected(ALGORITHM, RootFailure::InvalidGuess { x0 });
    }

    let mut tracker = Tracker::new(ALGORITHM, &cfg);
    let outcome = multiple_roots_loop(&mut func, &mut dfunc, &mut d2func, x0, &mut tracker);
    tracker.finish(outcome)
}
