//! Runs Jacobi, Gauss-Seidel and SOR on one system.

use nalgebra::{DMatrix, DVector};
use tracing::debug;

use super::config::{LinearCfg, SorCfg};
use super::errors::LinearSystemError;
use super::gauss_seidel::gauss_seidel;
use super::jacobi::jacobi;
use super::report::LinearSystemResult;
use super::sor::sor;

/// Relaxation factors tried by [`compare`].
pub const COMPARED_OMEGAS: [f64; 3] = [1.0, 0.5, 1.5];


/// One line of a comparison report.
#[derive(Debug, Clone)]
pub struct ComparisonEntry {
    /// `"jacobi"`, `"gauss_seidel"` or `"sor(w=…)"`.
    pub label  : String,
    pub omega  : Option<f64>,
    pub result : LinearSystemResult,
}

impl ComparisonEntry {
    #[inline] pub fn iterations(&self) -> usize { self.result.iterations }
    #[inline] pub fn final_error(&self) -> Option<f64> { self.result.last_error() }
}


/// Solves with Jacobi, Gauss-Seidel and SOR for each of
/// [`COMPARED_OMEGAS`], in that order, sharing `cfg`.
pub fn compare(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    x0: &DVector<f64>,
    cfg: &LinearCfg,
) -> Result<Vec<ComparisonEntry>, LinearSystemError> {
    let mut entries = Vec::with_capacity(2 + COMPARED_OMEGAS.len());

    entries.push(ComparisonEntry {
        label: "jacobi".to_owned(),
        omega: None,
        result: jacobi(a, b, x0, cfg)?,
    });
    entries.push(ComparisonEntry {
        label: "gauss_seidel".to_owned(),
        omega: None,
        result: gauss_seidel(a, b, x0, cfg)?,
    });
    for omega in COMPARED_OMEGAS {
        let sor_cfg = SorCfg::from(*cfg).set_omega(omega)?;
        entries.push(ComparisonEntry {
            label: format!("sor(w={omega})"),
            omega: Some(omega),
            result: sor(a, b, x0, &sor_cfg)?,
        });
    }

    debug!(
        converged = entries.iter().filter(|e| e.result.is_success()).count(),
        total = entries.len(),
        "linear system comparison finished"
    );
    Ok(entries)
}
