//! Defines the [`LinearSystemResult`] struct returned by the solvers.

use nalgebra::{DMatrix, DVector};

use super::algorithms::Algorithm;
use super::errors::SystemFailure;
use crate::status::Status;
use crate::table::{Table, VectorRow};


/// Final result of a stationary iteration.
///
/// [`LinearSystemResult`]
/// - `algorithm`        : method that produced it
/// - `status`           : [`Status::Success`] or [`Status::Failure`] with a [`SystemFailure`]
/// - `table`            : row 0 holds `x0`, one row per sweep after that
/// - `solution`         : last iterate, `None` when the singular check failed
/// - `iteration_matrix` : `T` of `x ← T·x + C`
/// - `constant_vector`  : `C`
/// - `spectral_radius`  : `ρ(T)`, reported whatever the outcome; `NaN` if the
///   eigenvalue iteration did not converge
/// - `iterations`       : completed sweeps
#[derive(Debug, Clone)]
pub struct LinearSystemResult {
    pub algorithm        : Algorithm,
    pub status           : Status<SystemFailure>,
    pub table            : Table<VectorRow>,
    pub solution         : Option<DVector<f64>>,
    pub iteration_matrix : Option<DMatrix<f64>>,
    pub constant_vector  : Option<DVector<f64>>,
    pub spectral_radius  : Option<f64>,
    pub iterations       : usize,
}

impl LinearSystemResult {
    /// Result of a system rejected before `T` and `C` were built.
    pub(crate) fn singular(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            status           : Status::Failure(SystemFailure::Singular),
            table            : Table::new(),
            solution         : None,
            iteration_matrix : None,
            constant_vector  : None,
            spectral_radius  : None,
            iterations       : 0,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn failure(&self) -> Option<&SystemFailure> {
        self.status.failure()
    }

    pub fn failure_reason(&self) -> Option<String> {
        self.status.reason()
    }

    pub fn last_error(&self) -> Option<f64> {
        self.table.last().and_then(|row| row.error)
    }

    /// `ρ(T) < 1`, the condition for convergence from every starting vector.
    pub fn is_convergent(&self) -> Option<bool> {
        self.spectral_radius.filter(|r| !r.is_nan()).map(|r| r < 1.0)
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.algorithm_name()
    }
}
