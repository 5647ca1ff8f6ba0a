//! Iteration bookkeeping shared by all scalar root finders.
//!
//! [`Tracker`] owns the [`ConvergenceTable`] of a single run and applies the
//! common conventions:
//! ├ row 0 records the starting point with no error
//! ├ every later row carries the error against the previous iterate
//! ├ `f(x) == 0` or `error < threshold` converges
//! ├ non-finite `x` or `f(x)` is a structural failure
//! └ reaching `max_iter` without converging is [`RootFailure::IterationLimit`]

use tracing::{debug, trace, warn};

use super::algorithms::Algorithm;
use super::config::CommonCfg;
use super::errors::RootFailure;
use super::report::ConvergenceResult;
use crate::metric::compute_error;
use crate::status::Status;
use crate::table::{ConvergenceTable, ScalarRow};
use crate::tolerance::ErrorType;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Progress {
    Continue,
    Converged,
}


pub(crate) struct Tracker {
    algorithm  : Algorithm,
    threshold  : f64,
    error_type : ErrorType,
    max_iter   : usize,
    table      : ConvergenceTable,
    iterations : usize,
    bracket    : Option<(f64, f64)>,
    last       : Option<(f64, f64)>,
}

impl Tracker {
    pub(crate) fn new(algorithm: Algorithm, cfg: &CommonCfg) -> Self {
        debug!(
            algorithm = algorithm.algorithm_name(),
            threshold = cfg.threshold(),
            max_iter = cfg.max_iter(),
            "root finding started"
        );
        Self {
            algorithm,
            threshold  : cfg.threshold(),
            error_type : cfg.error_type(),
            max_iter   : cfg.max_iter(),
            table      : ConvergenceTable::new(),
            iterations : 0,
            bracket    : None,
            last       : None,
        }
    }

    /// Bracket copied into subsequent rows and into the final result.
    pub(crate) fn set_bracket(&mut self, a: f64, b: f64) {
        self.bracket = Some((a, b));
    }

    /// Records row 0.
    pub(crate) fn start(&mut self, x: f64, fx: f64) -> Result<Progress, RootFailure> {
        check_finite(x, fx)?;
        self.push(0, x, fx, None);
        Ok(if fx == 0.0 { Progress::Converged } else { Progress::Continue })
    }

    /// Records the next iterate `x` produced from `x_prev`.
    pub(crate) fn record(&mut self, x: f64, fx: f64, x_prev: f64) -> Result<Progress, RootFailure> {
        check_finite(x, fx)?;
        let iteration = self.iterations + 1;

        let error = match compute_error(x, x_prev, self.error_type) {
            Ok(e) => Some(e),
            // landing exactly on a root at zero is still a root
            Err(_) if fx == 0.0 => None,
            Err(_) => return Err(RootFailure::UndefinedRelativeError { iteration }),
        };

        self.iterations = iteration;
        self.push(iteration, x, fx, error);
        trace!(algorithm = self.algorithm.algorithm_name(), iteration, x, fx, ?error, "iterate");

        let converged = fx == 0.0 || error.is_some_and(|e| e < self.threshold);
        Ok(if converged { Progress::Converged } else { Progress::Continue })
    }

    /// Records a sampled point with no error; used by walks that do not
    /// converge on the step size.
    pub(crate) fn record_point(&mut self, x: f64, fx: f64) -> Result<(), RootFailure> {
        check_finite(x, fx)?;
        self.iterations += 1;
        self.push(self.iterations, x, fx, None);
        trace!(algorithm = self.algorithm.algorithm_name(), iteration = self.iterations, x, fx, "sample");
        Ok(())
    }

    /// Index the next recorded row will get.
    #[inline]
    pub(crate) fn next_iteration(&self) -> usize {
        self.iterations + 1
    }

    #[inline]
    pub(crate) fn exhausted(&self) -> bool {
        self.iterations >= self.max_iter
    }

    /// Builds the final result from the outcome of an iteration loop.
    ///
    /// `Ok(Progress::Continue)` means the loop ran out of budget.
    pub(crate) fn finish(self, outcome: Result<Progress, RootFailure>) -> ConvergenceResult {
        let name = self.algorithm.algorithm_name();
        let status = match outcome {
            Ok(Progress::Converged) => {
                debug!(algorithm = name, iterations = self.iterations, root = ?self.last.map(|l| l.0), "converged");
                Status::Success
            }
            Ok(Progress::Continue) => {
                warn!(algorithm = name, iterations = self.iterations, "iteration budget exhausted");
                Status::Failure(RootFailure::IterationLimit { iterations: self.iterations })
            }
            Err(failure) => {
                warn!(algorithm = name, iterations = self.iterations, %failure, "root finding failed");
                Status::Failure(failure)
            }
        };

        ConvergenceResult {
            algorithm  : self.algorithm,
            status,
            table      : self.table,
            solution   : self.last.map(|(x, _)| x),
            f_solution : self.last.map(|(_, fx)| fx),
            bracket    : self.bracket,
            iterations : self.iterations,
        }
    }

    fn push(&mut self, iteration: usize, x: f64, fx: f64, error: Option<f64>) {
        self.table.add_row(ScalarRow { iteration, x, fx, error, bracket: self.bracket });
        self.last = Some((x, fx));
    }
}


#[inline]
fn check_finite(x: f64, fx: f64) -> Result<(), RootFailure> {
    if !(x.is_finite() && fx.is_finite()) {
        return Err(RootFailure::NonFiniteEvaluation { x, fx });
    }
    Ok(())
}


/// `true` when `u * v <= 0`, evaluated on signs so tiny values cannot underflow
/// the product to zero.
#[inline]
pub(crate) fn sign_change_or_zero(u: f64, v: f64) -> bool {
    u == 0.0 || v == 0.0 || u.is_sign_positive() != v.is_sign_positive()
}


/// Rejects non-finite or inverted bounds before anything is evaluated.
pub(crate) fn check_bounds(a: f64, b: f64) -> Result<(), RootFailure> {
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(RootFailure::InvalidBounds { a, b });
    }
    Ok(())
}


/// Checks the end values of a bracket `[a, b]`.
///
/// Returns `Ok(Some(root))` when an endpoint is an exact root, `Ok(None)` when
/// `f(a) * f(b) < 0`.
pub(crate) fn check_sign_change(a: f64, b: f64, fa: f64, fb: f64) -> Result<Option<f64>, RootFailure> {
    check_finite(a, fa)?;
    check_finite(b, fb)?;
    if fa == 0.0 {
        return Ok(Some(a));
    }
    if fb == 0.0 {
        return Ok(Some(b));
    }
    if !sign_change_or_zero(fa, fb) {
        return Err(RootFailure::NoSignChange { a, b });
    }
    Ok(None)
}
