//! Defines the [`ConvergenceResult`] struct returned by all
//! root-finding algorithms.

use tracing::warn;

use super::algorithms::Algorithm;
use super::errors::RootFailure;
use crate::status::Status;
use crate::table::ConvergenceTable;


/// Final result returned by all root-finding algorithms.
///
/// [`ConvergenceResult`]
/// - `algorithm`  : method that produced it
/// - `status`     : [`Status::Success`] or [`Status::Failure`] with a [`RootFailure`]
/// - `table`      : one row per iterate, row 0 is the starting point
/// - `solution`   : last accepted iterate, `None` if validation failed before row 0
/// - `f_solution` : `f(solution)`
/// - `bracket`    : final `[a, b]` for bracketing methods
/// - `iterations` : completed iterations (rows after row 0)
///
/// The table is kept on failure so the partial run can be inspected.
#[derive(Debug, Clone)]
pub struct ConvergenceResult {
    pub algorithm  : Algorithm,
    pub status     : Status<RootFailure>,
    pub table      : ConvergenceTable,
    pub solution   : Option<f64>,
    pub f_solution : Option<f64>,
    pub bracket    : Option<(f64, f64)>,
    pub iterations : usize,
}

impl ConvergenceResult {
    /// Result of a run rejected before any iteration; the table stays empty.
    pub(crate) fn rejected(algorithm: Algorithm, failure: RootFailure) -> Self {
        warn!(algorithm = algorithm.algorithm_name(), %failure, "input rejected");
        Self {
            algorithm,
            status     : Status::Failure(failure),
            table      : ConvergenceTable::new(),
            solution   : None,
            f_solution : None,
            bracket    : None,
            iterations : 0,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn failure(&self) -> Option<&RootFailure> {
        self.status.failure()
    }

    /// Human-readable failure reason, `None` on success.
    pub fn failure_reason(&self) -> Option<String> {
        self.status.reason()
    }

    /// Error recorded on the last row.
    pub fn last_error(&self) -> Option<f64> {
        self.table.last().and_then(|row| row.error)
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.algorithm_name()
    }
}
