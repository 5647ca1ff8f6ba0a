//! Bisection method

use super::algorithms::{Algorithm, BracketFamily};
use super::common::{check_bounds, check_sign_change, sign_change_or_zero, Progress, Tracker};
use super::config::CommonCfg;
use super::errors::RootFailure;
use super::report::ConvergenceResult;

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);


/// Calculates midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}


fn bisection_loop<F>(
    func: &mut F,
    mut a: f64,
    mut b: f64,
    mut fa: f64,
    tracker: &mut Tracker,
) -> Result<Progress, RootFailure>
where F: FnMut(f64) -> f64 {
    let mut midpoint = calculate_bisection(a, b);
    let mut fm       = func(midpoint);
    if tracker.start(midpoint, fm)? == Progress::Converged {
        return Ok(Progress::Converged);
    }

    while !tracker.exhausted() {
        // f(a) * f(m) <= 0 keeps the left half
        if sign_change_or_zero(fa, fm) {
            b = midpoint;
        } else {
            a  = midpoint;
            fa = fm;
        }
        tracker.set_bracket(a, b);

        let prev = midpoint;
        midpoint = calculate_bisection(a, b);
        fm       = func(midpoint);
        if tracker.record(midpoint, fm, prev)? == Progress::Converged {
            return Ok(Progress::Converged);
        }
    }

    Ok(Progress::Continue)
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that `func` is continuous on `[a, b]` and that
/// `func(a)` and `func(b)` have opposite signs, guaranteeing a root exists
/// within the interval.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - Lower bound of the search interval. Must be finite and less than `b`.
/// ├ `b`    - Upper bound of the search interval. Must be finite and greater than `a`.
/// └ `cfg`  - [`CommonCfg`] with the tolerance and iteration budget.
///
/// # Returns
///
/// A [`ConvergenceResult`] whose table holds one row per midpoint:
/// ├ row 0      : midpoint of the initial bracket, no error
/// ├ row k      : midpoint of the k-th bracket, `|bₖ - aₖ| = |b₀ - a₀| / 2ᵏ`
/// └ `bracket`  : final `[a, b]`
///
/// # Failures
///
/// ┌ [`RootFailure::InvalidBounds`]       - `a` or `b` is NaN/inf or `a >= b` (empty table).
/// ├ [`RootFailure::NoSignChange`]        - `f(a) * f(b) > 0` (empty table).
/// ├ [`RootFailure::NonFiniteEvaluation`] - `func` produced NaN/inf.
/// └ [`RootFailure::IterationLimit`]      - budget exhausted before the error fell below tolerance.
///
/// # Notes
/// ├ When `f(a) * f(mid) <= 0` the upper bound moves (`b = mid`).
/// └ An exact root at `a` or `b` is returned immediately with zero iterations.
pub fn bisection<F>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: CommonCfg,
) -> ConvergenceResult
where F: FnMut(f64) -> f64 {

    if let Err(failure) = check_bounds(a, b) {
        return ConvergenceResult::rejected(ALGORITHM, failure);
    }

    let fa = func(a);
    let fb = func(b);
    let endpoint_root = match check_sign_change(a, b, fa, fb) {
        Ok(root)     => root,
        Err(failure) => return ConvergenceResult::rejected(ALGORITHM, failure),
    };

    let mut tracker = Tracker::new(ALGORITHM, &cfg);
    tracker.set_bracket(a, b);

    let outcome = match endpoint_root {
        Some(root) => tracker.start(root, 0.0),
        None       => bisection_loop(&mut func, a, b, fa, &mut tracker),
    };
    tracker.finish(outcome)
}
