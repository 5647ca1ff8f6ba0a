//! Successive over-relaxation

use nalgebra::{DMatrix, DVector};

use super::algorithms::Algorithm;
use super::config::SorCfg;
use super::errors::LinearSystemError;
use super::report::LinearSystemResult;
use super::splitting::{solve, IterationScheme, Splitting};


/// `T = (D - ωL)⁻¹((1 - ω)D + ωU)`, `C = ω(D - ωL)⁻¹b`.
pub(crate) struct SorScheme {
    t: DMatrix<f64>,
    c: DVector<f64>,
}

impl SorScheme {
    pub(crate) fn new(split: &Splitting, b: &DVector<f64>, omega: f64) -> Option<Self> {
        let m_inv = (&split.d - &split.l * omega).try_inverse()?;
        let n = &split.d * (1.0 - omega) + &split.u * omega;
        Some(Self {
            t: &m_inv * n,
            c: (&m_inv * b) * omega,
        })
    }
}

impl IterationScheme for SorScheme {
    fn iteration_matrix(&self) -> &DMatrix<f64> { &self.t }
    fn constant_vector(&self)  -> &DVector<f64> { &self.c }
}


/// Solves `A·x = b` with
/// [successive over-relaxation](https://en.wikipedia.org/wiki/Successive_over-relaxation).
///
/// `ω = 1` is Gauss-Seidel; `ω < 1` under-relaxes, `ω > 1` over-relaxes.
///
/// # Errors
/// [`LinearSystemError`] for malformed input; see [`super::jacobi::jacobi`].
pub fn sor(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    x0: &DVector<f64>,
    cfg: &SorCfg,
) -> Result<LinearSystemResult, LinearSystemError> {
    let omega = cfg.omega();
    solve(Algorithm::Sor, a, b, x0, cfg.common(), |split| SorScheme::new(split, b, omega))
}
