//! Matrix splitting `A = D - L - U` and the stationary iteration shared by
//! Jacobi, Gauss-Seidel and SOR.
//!
//! ┌ [`Splitting`]       : `D` diagonal, `L = -strict_lower(A)`, `U = -strict_upper(A)`
//! ├ [`IterationScheme`] : a method's `(T, C)` pair and its update rule
//! └ [`solve`]           : validation, singular check, `ρ(T)`, iteration loop

use nalgebra::linalg::Schur;
use nalgebra::{DMatrix, DVector};
use tracing::{debug, trace, warn};

use super::algorithms::Algorithm;
use super::config::LinearCfg;
use super::errors::{LinearSystemError, SystemFailure};
use super::report::LinearSystemResult;
use crate::metric::{compute_vector_error, MetricError};
use crate::status::Status;
use crate::table::{Table, VectorRow};

/// Iteration cap of the Schur decomposition behind [`spectral_radius`].
const SCHUR_MAX_ITER: usize = 10_000;

/// Diagonal shifts tried in turn by [`spectral_radius`], in units of `max(1, max|T|)`.
const SCHUR_SHIFTS: [f64; 4] = [1.0, 0.0, 0.5, -0.75];


/// `A = D - L - U` with the sign convention of the classical iteration
/// formulas, so that `D - L` is the lower triangle of `A`.
#[derive(Debug, Clone)]
pub struct Splitting {
    pub d: DMatrix<f64>,
    pub l: DMatrix<f64>,
    pub u: DMatrix<f64>,
}

impl Splitting {
    pub fn new(a: &DMatrix<f64>) -> Self {
        let n = a.nrows();
        Self {
            d: DMatrix::from_diagonal(&a.diagonal()),
            l: DMatrix::from_fn(n, n, |i, j| if i > j { -a[(i, j)] } else { 0.0 }),
            u: DMatrix::from_fn(n, n, |i, j| if i < j { -a[(i, j)] } else { 0.0 }),
        }
    }

    /// `D`, `D - L` and `D - ωL` share the diagonal of `A`, so each is
    /// singular exactly when some `a_ii == 0`.
    pub fn has_zero_diagonal(&self) -> bool {
        self.d.diagonal().iter().any(|&v| v == 0.0)
    }
}


/// `(T, C)` of the update `x ← T·x + C`.
pub(crate) trait IterationScheme {
    fn iteration_matrix(&self) -> &DMatrix<f64>;
    fn constant_vector(&self) -> &DVector<f64>;

    /// One sweep from `x`. Defaults to the matrix form `T·x + C`.
    fn step(&self, x: &DVector<f64>) -> DVector<f64> {
        self.iteration_matrix() * x + self.constant_vector()
    }
}


/// Rejects empty, non-square, mismatched or non-finite input.
pub(crate) fn validate(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    x0: &DVector<f64>,
) -> Result<(), LinearSystemError> {
    let (rows, cols) = a.shape();
    if rows == 0 {
        return Err(LinearSystemError::Empty);
    }
    if rows != cols {
        return Err(LinearSystemError::NotSquare { rows, cols });
    }
    if b.len() != rows {
        return Err(LinearSystemError::DimensionMismatch { what: "b", expected: rows, got: b.len() });
    }
    if x0.len() != rows {
        return Err(LinearSystemError::DimensionMismatch { what: "x0", expected: rows, got: x0.len() });
    }
    if a.iter().any(|v| !v.is_finite()) {
        return Err(LinearSystemError::NonFinite { what: "A" });
    }
    if b.iter().any(|v| !v.is_finite()) {
        return Err(LinearSystemError::NonFinite { what: "b" });
    }
    if x0.iter().any(|v| !v.is_finite()) {
        return Err(LinearSystemError::NonFinite { what: "x0" });
    }
    Ok(())
}


/// Singularity test on the LU pivots of `A`.
///
/// Each row is first scaled to unit max-norm, so a badly scaled but
/// well-conditioned matrix like `diag(1e16, 1)` passes. A pivot at or below
/// `n·ε` then counts as zero, which still catches rank deficiency hidden by
/// rounding (e.g. two identical rows). A zero row is singular outright.
pub fn is_singular(a: &DMatrix<f64>) -> bool {
    let n = a.nrows();
    let mut scaled = a.clone();
    for mut row in scaled.row_iter_mut() {
        let scale = row.amax();
        if scale == 0.0 {
            return true;
        }
        row /= scale;
    }
    let tol = n as f64 * f64::EPSILON;
    let u = scaled.lu().u();
    u.diagonal().iter().any(|p| p.abs() <= tol)
}


/// `ρ(T) = max |λᵢ(T)|` over the complex eigenvalues of `T`.
///
/// The unshifted Schur iteration can stall on a zero diagonal (every Jacobi
/// `T`), so the decomposition runs on `T + σI` and takes `λ = μ - σ`, trying
/// each of [`SCHUR_SHIFTS`] scaled by `max(1, max|T|)`. Returns `NaN` if every
/// shift fails.
pub fn spectral_radius(t: &DMatrix<f64>) -> f64 {
    let n = t.nrows();
    let scale = t.amax().max(1.0);

    for &shift in &SCHUR_SHIFTS {
        let sigma = shift * scale;
        let shifted = t + DMatrix::<f64>::identity(n, n) * sigma;
        if let Some(schur) = Schur::try_new(shifted, f64::EPSILON, SCHUR_MAX_ITER) {
            return schur
                .complex_eigenvalues()
                .iter()
                .map(|&mu| (mu - sigma).norm())
                .fold(0.0, f64::max);
        }
        trace!(n, sigma, "Schur decomposition did not converge, retrying with another shift");
    }

    warn!(n, "Schur decomposition did not converge, spectral radius unknown");
    f64::NAN
}


/// Validates, checks singularity, builds the scheme and iterates.
///
/// `build` returns `None` when the splitting matrix it must invert is singular.
pub(crate) fn solve<S, B>(
    algorithm: Algorithm,
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    x0: &DVector<f64>,
    cfg: &LinearCfg,
    build: B,
) -> Result<LinearSystemResult, LinearSystemError>
where
    S: IterationScheme,
    B: FnOnce(&Splitting) -> Option<S>,
{
    validate(a, b, x0)?;
    let name = algorithm.algorithm_name();
    debug!(
        algorithm = name,
        n = a.nrows(),
        threshold = cfg.threshold(),
        max_iter = cfg.max_iter(),
        norm = ?cfg.norm(),
        "linear solve started"
    );

    let splitting = Splitting::new(a);
    let scheme = if splitting.has_zero_diagonal() || is_singular(a) {
        None
    } else {
        build(&splitting)
    };
    let Some(scheme) = scheme else {
        warn!(algorithm = name, "matrix is singular, no iteration attempted");
        return Ok(LinearSystemResult::singular(algorithm));
    };

    let rho = spectral_radius(scheme.iteration_matrix());
    debug!(algorithm = name, spectral_radius = rho, "iteration matrix built");

    Ok(iterate(algorithm, a, b, x0, cfg, &scheme, rho))
}


fn iterate<S: IterationScheme>(
    algorithm: Algorithm,
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    x0: &DVector<f64>,
    cfg: &LinearCfg,
    scheme: &S,
    rho: f64,
) -> LinearSystemResult {
    let name = algorithm.algorithm_name();
    let threshold = cfg.threshold();

    let mut table = Table::new();
    table.add_row(VectorRow { iteration: 0, x: x0.iter().copied().collect(), error: None });

    let mut x = x0.clone();
    let mut iterations = 0;

    let status = if (a * x0 - b).amax() <= threshold {
        debug!(algorithm = name, "initial guess already satisfies the system");
        Status::Success
    } else {
        let mut outcome = Status::Failure(SystemFailure::DidNotConverge { iterations: cfg.max_iter() });

        for k in 1..=cfg.max_iter() {
            let x_next = scheme.step(&x);
            if x_next.iter().any(|v| !v.is_finite()) {
                outcome = Status::Failure(SystemFailure::NonFinite { iteration: k });
                break;
            }

            let error = match compute_vector_error(
                x_next.as_slice(), x.as_slice(), cfg.norm(), cfg.error_type()
            ) {
                Ok(e) => e,
                Err(MetricError::ZeroIterate | MetricError::LengthMismatch { .. }) => {
                    outcome = Status::Failure(SystemFailure::UndefinedRelativeError { iteration: k });
                    break;
                }
            };

            x = x_next;
            iterations = k;
            table.add_row(VectorRow { iteration: k, x: x.iter().copied().collect(), error: Some(error) });
            trace!(algorithm = name, iteration = k, error, "sweep");

            if error < threshold {
                outcome = Status::Success;
                break;
            }
        }
        outcome
    };

    match &status {
        Status::Success => debug!(algorithm = name, iterations, "converged"),
        Status::Failure(failure) => warn!(
            algorithm = name, iterations, spectral_radius = rho, %failure, "linear solve failed"
        ),
    }

    LinearSystemResult {
        algorithm,
        status,
        table,
        solution         : Some(x),
        iteration_matrix : Some(scheme.iteration_matrix().clone()),
        constant_vector  : Some(scheme.constant_vector().clone()),
        spectral_radius  : Some(rho),
        iterations,
    }
}
