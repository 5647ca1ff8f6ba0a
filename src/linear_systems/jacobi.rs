//! Jacobi iteration

use nalgebra::{DMatrix, DVector};

use super::algorithms::Algorithm;
use super::config::LinearCfg;
use super::errors::LinearSystemError;
use super::report::LinearSystemResult;
use super::splitting::{solve, IterationScheme, Splitting};


/// `T = D⁻¹(L + U)`, `C = D⁻¹b`.
pub(crate) struct JacobiScheme {
    t: DMatrix<f64>,
    c: DVector<f64>,
}

impl JacobiScheme {
    /// Requires a non-zero diagonal.
    pub(crate) fn new(split: &Splitting, b: &DVector<f64>) -> Self {
        let d_inv = DMatrix::from_diagonal(&split.d.diagonal().map(|d| 1.0 / d));
        Self {
            t: &d_inv * (&split.l + &split.u),
            c: &d_inv * b,
        }
    }
}

impl IterationScheme for JacobiScheme {
    fn iteration_matrix(&self) -> &DMatrix<f64> { &self.t }
    fn constant_vector(&self)  -> &DVector<f64> { &self.c }
}


/// Solves `A·x = b` with the
/// [Jacobi method](https://en.wikipedia.org/wiki/Jacobi_method).
///
/// Every component of the new sweep is computed from the previous full
/// vector: `x ← T·x + C`.
///
/// # Arguments
/// - `a`   : square coefficient matrix
/// - `b`   : right-hand side
/// - `x0`  : starting vector
/// - `cfg` : [`LinearCfg`] (tolerance, `max_iter`, norm)
///
/// # Errors
/// [`LinearSystemError`] for empty, non-square, mismatched or non-finite input.
/// Singular systems and non-convergence are reported in the result status.
///
/// # Notes
/// Converges for every `x0` iff `ρ(T) < 1`; strict diagonal dominance of `A`
/// is sufficient.
pub fn jacobi(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    x0: &DVector<f64>,
    cfg: &LinearCfg,
) -> Result<LinearSystemResult, LinearSystemError> {
    solve(Algorithm::Jacobi, a, b, x0, cfg, |split| Some(JacobiScheme::new(split, b)))
}
