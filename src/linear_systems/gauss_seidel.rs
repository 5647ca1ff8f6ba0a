//! Gauss-Seidel iteration

use nalgebra::{DMatrix, DVector};

use super::algorithms::Algorithm;
use super::config::LinearCfg;
use super::errors::LinearSystemError;
use super::report::LinearSystemResult;
use super::splitting::{solve, IterationScheme, Splitting};


/// `T = (D - L)⁻¹U`, `C = (D - L)⁻¹b`.
///
/// Keeps copies of `A` and `b` for the component sweep.
pub(crate) struct GaussSeidelScheme {
    a: DMatrix<f64>,
    b: DVector<f64>,
    t: DMatrix<f64>,
    c: DVector<f64>,
}

impl GaussSeidelScheme {
    pub(crate) fn new(a: &DMatrix<f64>, split: &Splitting, b: &DVector<f64>) -> Option<Self> {
        let dl_inv = (&split.d - &split.l).try_inverse()?;
        Some(Self {
            a: a.clone(),
            b: b.clone(),
            t: &dl_inv * &split.u,
            c: &dl_inv * b,
        })
    }
}

impl IterationScheme for GaussSeidelScheme {
    fn iteration_matrix(&self) -> &DMatrix<f64> { &self.t }
    fn constant_vector(&self)  -> &DVector<f64> { &self.c }

    /// In-place sweep on a copy of `x`: component `j` already sees the
    /// updated components `i < j`.
    fn step(&self, x: &DVector<f64>) -> DVector<f64> {
        let n = x.len();
        let mut next = x.clone();
        for j in 0..n {
            let mut sum = self.b[j];
            for i in (0..n).filter(|&i| i != j) {
                sum -= self.a[(j, i)] * next[i];
            }
            next[j] = sum / self.a[(j, j)];
        }
        next
    }
}


/// Solves `A·x = b` with the
/// [Gauss-Seidel method](https://en.wikipedia.org/wiki/Gauss%E2%80%93Seidel_method).
///
/// ```text
/// xⱼ ← (bⱼ - Σ_{i<j} aⱼᵢ xᵢ(new) - Σ_{i>j} aⱼᵢ xᵢ(old)) / aⱼⱼ
/// ```
///
/// # Errors
/// [`LinearSystemError`] for malformed input; see [`super::jacobi::jacobi`].
///
/// # Notes
/// For strictly diagonally dominant `A`, `ρ(T_GS) <= ρ(T_J)` and Gauss-Seidel
/// needs no more sweeps than Jacobi.
pub fn gauss_seidel(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    x0: &DVector<f64>,
    cfg: &LinearCfg,
) -> Result<LinearSystemResult, LinearSystemError> {
    solve(Algorithm::GaussSeidel, a, b, x0, cfg, |split| GaussSeidelScheme::new(a, split, b))
}
