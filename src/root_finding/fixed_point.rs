//! Fixed-point iteration

use super::algorithms::{Algorithm, OpenFamily};
use super::common::{Progress, Tracker};
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::{RootFailure, RootFindingError};
use super::report::ConvergenceResult;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::FixedPoint);

/// Iterates with `|x|` above this bound are reported as divergence.
pub const DIVERGENCE_BOUND: f64 = 1e6;


/// Fixed-point configuration
///
/// # Fields
/// - `common`   : [`CommonCfg`] with tolerance and `max_iter`
/// - `interval` : optional `[a, b]` the iterates must stay in
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct FixedPointCfg {
    common   : CommonCfg,
    interval : Option<(f64, f64)>,
}

impl FixedPointCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), interval: None }
    }

    #[inline] pub fn interval(&self) -> Option<(f64, f64)> { self.interval }

    /// Restricts iterates to `[a, b]`; requires finite `a < b`.
    pub fn set_interval(mut self, a: f64, b: f64) -> Result<Self, RootFindingError> {
        if !(a.is_finite() && b.is_finite()) || a >= b {
            return Err(RootFindingError::InvalidInterval { a, b });
        }
        self.interval = Some((a, b));
        Ok(self)
    }
}
impl_common_cfg!(FixedPointCfg);

impl From<CommonCfg> for FixedPointCfg {
    fn from(common: CommonCfg) -> Self {
        Self { common, interval: None }
    }
}


#[inline]
fn check_interval(x: f64, interval: Option<(f64, f64)>) -> Result<(), RootFailure> {
    match interval {
        Some((a, b)) if x < a || x > b => Err(RootFailure::OutOfInterval { x, a, b }),
        _ => Ok(()),
    }
}


fn fixed_point_loop<F, G>(
    func: &mut F,
    gfunc: &mut G,
    x0: f64,
    interval: Option<(f64, f64)>,
    tracker: &mut Tracker,
) -> Result<Progress, RootFailure>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    let mut x = x0;
    if tracker.start(x, func(x))? == Progress::Converged {
        return Ok(Progress::Converged);
    }

    while !tracker.exhausted() {
        let prev = x;
        x = gfunc(prev);
        if !x.is_finite() || x.abs() > DIVERGENCE_BOUND {
            return Err(RootFailure::Diverged { iteration: tracker.next_iteration(), x });
        }
        check_interval(x, interval)?;

        if tracker.record(x, func(x), prev)? == Progress::Converged {
            return Ok(Progress::Converged);
        }
    }

    Ok(Progress::Continue)
}


/// Finds a root of `func` by iterating `x ← g(x)`, where `g` is chosen so
/// that `g(r) = r` exactly when `f(r) = 0`.
///
/// # Arguments
/// - `func`  : function whose root is sought; `f(x)` is recorded per row
/// - `gfunc` : iteration function
/// - `x0`    : finite starting point, inside the interval when one is set
/// - `cfg`   : [`FixedPointCfg`]
///
/// # Failures
/// - [`RootFailure::InvalidGuess`]        : `x0` non-finite (empty table)
/// - [`RootFailure::OutOfInterval`]       : `x0` or an iterate left the interval
/// - [`RootFailure::Diverged`]            : iterate NaN/inf or `|x| >` [`DIVERGENCE_BOUND`]
/// - [`RootFailure::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
/// - [`RootFailure::IterationLimit`]      : budget exhausted
///
/// # Notes
/// Converges locally when `|g'(r)| < 1`; the rate is linear with ratio `|g'(r)|`.
pub fn fixed_point<F, G>(
    mut func: F,
    mut gfunc: G,
    x0: f64,
    cfg: FixedPointCfg,
) -> ConvergenceResult
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return ConvergenceResult::rejected(ALGORITHM, RootFailure::InvalidGuess { x0 });
    }
    if let Err(failure) = check_interval(x0, cfg.interval) {
        return ConvergenceResult::rejected(ALGORITHM, failure);
    }

    let mut tracker = Tracker::new(ALGORITHM, &cfg.common);
    if let Some((a, b)) = cfg.interval {
        tracker.set_bracket(a, b);
    }
    let outcome = fixed_point_loop(&mut func, &mut gfunc, x0, cfg.interval, &mut tracker);
    tracker.finish(outcome)
}
