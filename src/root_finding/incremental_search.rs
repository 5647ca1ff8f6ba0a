//! Incremental search for a sign change

use super::algorithms::{Algorithm, BracketFamily};
use super::common::{sign_change_or_zero, Progress, Tracker};
use super::config::CommonCfg;
use super::errors::RootFailure;
use super::report::ConvergenceResult;

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::IncrementalSearch);


fn incremental_search_loop<F>(
    func: &mut F,
    x0: f64,
    dx: f64,
    tracker: &mut Tracker,
    left: &mut Option<(f64, f64)>,
) -> Result<Progress, RootFailure>
where F: FnMut(f64) -> f64 {
    let mut x  = x0;
    let mut fx = func(x);
    if tracker.start(x, fx)? == Progress::Converged {
        return Ok(Progress::Converged);
    }

    while !tracker.exhausted() {
        // x0 + k·dx avoids drift from repeated addition
        let x_next = x0 + tracker.next_iteration() as f64 * dx;
        let f_next = func(x_next);

        let crossed = f_next != 0.0 && sign_change_or_zero(fx, f_next);
        if crossed {
            tracker.set_bracket(x.min(x_next), x.max(x_next));
        }
        tracker.record_point(x_next, f_next)?;

        if f_next == 0.0 {
            return Ok(Progress::Converged);
        }
        if crossed {
            *left = Some((x, fx));
            return Ok(Progress::Converged);
        }
        x  = x_next;
        fx = f_next;
    }

    Ok(Progress::Continue)
}


/// Walks `x0, x0 + dx, x0 + 2dx, …` until `func` changes sign.
///
/// Useful to find a starting bracket for [`super::bisection::bisection`] or
/// [`super::false_position::false_position`].
///
/// # Returns
/// [`ConvergenceResult`] with one row per sampled point (no error column).
/// On success either
/// - `f(x) == 0` at a sample: `solution` is that sample, or
/// - the sign changed between `x` and `x + dx`: `solution` is `x` and
///   `bracket` holds the sorted interval.
///
/// # Failures
/// - [`RootFailure::InvalidGuess`]        : `x0` non-finite (empty table)
/// - [`RootFailure::InvalidStep`]         : `dx` zero or non-finite (empty table)
/// - [`RootFailure::NonFiniteEvaluation`] : `func` produced NaN/inf
/// - [`RootFailure::IterationLimit`]      : no sign change within `max_iter` steps
pub fn incremental_search<F>(
    mut func: F,
    x0: f64,
    dx: f64,
    cfg: CommonCfg,
) -> ConvergenceResult
where F: FnMut(f64) -> f64 {

    if !x0.is_finite() {
        return ConvergenceResult::rejected(ALGORITHM, RootFailure::InvalidGuess { x0 });
    }
    if !dx.is_finite() || dx == 0.0 {
        return ConvergenceResult::rejected(ALGORITHM, RootFailure::InvalidStep { dx });
    }

    let mut tracker = Tracker::new(ALGORITHM, &cfg);
    let mut left = None;
    let outcome = incremental_search_loop(&mut func, x0, dx, &mut tracker, &mut left);

    let mut result = tracker.finish(outcome);
    if let Some((x, fx)) = left {
        result.solution   = Some(x);
        result.f_solution = Some(fx);
    }
    result
}
