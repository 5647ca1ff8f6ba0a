//! False position (regula falsi) method

use super::algorithms::{Algorithm, BracketFamily};
use super::common::{check_bounds, check_sign_change, sign_change_or_zero, Progress, Tracker};
use super::config::CommonCfg;
use super::errors::RootFailure;
use super::report::ConvergenceResult;

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::FalsePosition);


/// x-intercept of the chord through `(a, fa)` and `(b, fb)`.
///
/// `fa` and `fb` have opposite signs, so the denominator is non-zero.
#[inline]
fn calculate_intersection((a, fa): (f64, f64), (b, fb): (f64, f64)) -> f64 {
    (a * fb - b * fa) / (fb - fa)
}


fn false_position_loop<F>(
    func: &mut F,
    (mut a, mut fa): (f64, f64),
    (mut b, mut fb): (f64, f64),
    tracker: &mut Tracker,
) -> Result<Progress, RootFailure>
where F: FnMut(f64) -> f64 {
    let mut x  = calculate_intersection((a, fa), (b, fb));
    let mut fx = func(x);
    if tracker.start(x, fx)? == Progress::Converged {
        return Ok(Progress::Converged);
    }

    while !tracker.exhausted() {
        // replace the endpoint sharing the sign of f(x)
        if sign_change_or_zero(fa, fx) {
            b  = x;
            fb = fx;
        } else {
            a  = x;
            fa = fx;
        }
        tracker.set_bracket(a, b);

        let prev = x;
        x  = calculate_intersection((a, fa), (b, fb));
        fx = func(x);
        if tracker.record(x, fx, prev)? == Progress::Converged {
            return Ok(Progress::Converged);
        }
    }

    Ok(Progress::Continue)
}


/// Finds a root of `func` on `[a, b]` using the
/// [false position method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// Same bracket discipline as [`super::bisection::bisection`], with the
/// midpoint replaced by the chord intersection
///
/// ```text
/// x = (a·f(b) - b·f(a)) / (f(b) - f(a))
/// ```
///
/// # Failures
/// - [`RootFailure::InvalidBounds`]       : `a`/`b` non-finite or `a >= b`
/// - [`RootFailure::NoSignChange`]        : `f(a) * f(b) > 0`
/// - [`RootFailure::NonFiniteEvaluation`] : `func` produced NaN/inf
/// - [`RootFailure::IterationLimit`]      : budget exhausted
///
/// # Notes
/// - One endpoint can stay fixed for many iterations on convex functions, so
///   convergence is often slower than bisection.
pub fn false_position<F>(
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
        None       => false_position_loop(&mut func, (a, fa), (b, fb), &mut tracker),
    };
    tracker.finish(outcome)
}
