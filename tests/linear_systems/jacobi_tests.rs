//! tests for the Jacobi iteration
use approx::assert_abs_diff_eq;
use nalgebra::{DMatrix, DVector};
use numethods::linear_systems::jacobi::jacobi;
use numethods::linear_systems::{is_singular, spectral_radius, LinearCfg, LinearSystemError, SystemFailure};
use numethods::metric::Norm;

type TestResult = Result<(), LinearSystemError>;

// strictly diagonally dominant, solution [1, 2, 3]
fn system() -> (DMatrix<f64>, DVector<f64>) {
    let a = DMatrix::from_row_slice(3, 3, &[
         4.0, -1.0,  0.0,
        -1.0,  4.0, -1.0,
         0.0, -1.0,  4.0,
    ]);
    let b = DVector::from_column_slice(&[2.0, 4.0, 10.0]);
    (a, b)
}

#[test]
fn matches_direct_solve() -> TestResult {
    let (a, b) = system();
    let x0  = DVector::zeros(3);
    let res = jacobi(&a, &b, &x0, &LinearCfg::new())?;

    assert!(res.is_success());
    let direct = a.clone().lu().solve(&b).unwrap();
    let x = res.solution.as_ref().unwrap();
    for i in 0..3 {
        assert_abs_diff_eq!(x[i], direct[i], epsilon = 1e-5);
    }
    assert!(res.last_error().unwrap() < 0.5e-6);
    Ok(())
}

#[test]
fn iteration_matrix_and_spectral_radius() -> TestResult {
    let (a, b) = system();
    let res = jacobi(&a, &b, &DVector::zeros(3), &LinearCfg::new())?;

    let t = res.iteration_matrix.as_ref().unwrap();
    assert_abs_diff_eq!(t[(0, 1)], 0.25, epsilon = 1e-15);
    assert_abs_diff_eq!(t[(0, 0)], 0.0);
    let c = res.constant_vector.as_ref().unwrap();
    assert_abs_diff_eq!(c[2], 2.5, epsilon = 1e-15);

    // eigenvalues of T are cos(kπ/4)/2
    let rho = res.spectral_radius.unwrap();
    assert_abs_diff_eq!(rho, 0.5 * std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-10);
    assert_eq!(res.is_convergent(), Some(true));
    Ok(())
}

#[test]
fn rows_start_at_x0() -> TestResult {
    let (a, b) = system();
    let x0  = DVector::from_column_slice(&[1.0, 1.0, 1.0]);
    let res = jacobi(&a, &b, &x0, &LinearCfg::new())?;

    let rows = res.table.rows();
    assert_eq!(rows[0].x, vec![1.0, 1.0, 1.0]);
    assert!(rows[0].error.is_none());
    // first sweep uses only x0: x1 = (2 + 1) / 4
    assert_abs_diff_eq!(rows[1].x[0], 0.75, epsilon = 1e-15);
    assert_eq!(res.table.len(), res.iterations + 1);
    Ok(())
}

#[test]
fn exact_start_needs_no_iteration() -> TestResult {
    let (a, b) = system();
    let x0  = DVector::from_column_slice(&[1.0, 2.0, 3.0]);
    let res = jacobi(&a, &b, &x0, &LinearCfg::new())?;

    assert!(res.is_success());
    assert_eq!(res.iterations, 0);
    assert_eq!(res.table.len(), 1);
    assert!(res.spectral_radius.is_some());
    Ok(())
}

#[test]
fn identical_rows_are_singular() -> TestResult {
    let a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 1.0, 2.0]);
    let b = DVector::from_column_slice(&[1.0, 1.0]);
    let res = jacobi(&a, &b, &DVector::zeros(2), &LinearCfg::new())?;

    assert_eq!(res.failure(), Some(&SystemFailure::Singular));
    assert_eq!(res.failure_reason().as_deref(), Some("matrix is singular"));
    assert!(res.table.is_empty());
    assert!(res.solution.is_none());
    assert!(res.spectral_radius.is_none());
    Ok(())
}

#[test]
fn zero_diagonal_is_singular_splitting() -> TestResult {
    let a = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
    let b = DVector::from_column_slice(&[1.0, 1.0]);
    let res = jacobi(&a, &b, &DVector::zeros(2), &LinearCfg::new())?;

    assert_eq!(res.failure(), Some(&SystemFailure::Singular));
    Ok(())
}

#[test]
fn zero_diagonal_tridiagonal_radius_is_finite() {
    let t = DMatrix::from_row_slice(3, 3, &[
        0.0,  0.25, 0.0,
        0.25, 0.0,  0.25,
        0.0,  0.25, 0.0,
    ]);
    assert_abs_diff_eq!(spectral_radius(&t), 0.25 * std::f64::consts::SQRT_2, epsilon = 1e-10);

    // Jacobi matrix of the 1-D Poisson stencil, eigenvalues cos(kπ/6)
    let n = 5;
    let poisson = DMatrix::from_fn(n, n, |i, j| if i.abs_diff(j) == 1 { 0.5 } else { 0.0 });
    let rho = spectral_radius(&poisson);
    assert!(rho.is_finite());
    assert_abs_diff_eq!(rho, (std::f64::consts::PI / 6.0).cos(), epsilon = 1e-10);
}

#[test]
fn badly_scaled_diagonal_is_not_singular() -> TestResult {
    let a = DMatrix::from_row_slice(2, 2, &[1e16, 0.0, 0.0, 1.0]);
    let b = DVector::from_column_slice(&[1e16, 1.0]);
    assert!(!is_singular(&a));

    let res = jacobi(&a, &b, &DVector::zeros(2), &LinearCfg::new())?;
    assert!(res.is_success(), "{:?}", res.failure());
    let x = res.solution.as_ref().unwrap();
    assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(x[1], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(res.spectral_radius.unwrap(), 0.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn singularity_is_judged_per_row_scale() {
    // rows are parallel once each is scaled to unit max-norm
    let parallel = DMatrix::from_row_slice(2, 2, &[1e8, 1.0, 1.0, 1e-8]);
    assert!(is_singular(&parallel));

    let mixed = DMatrix::from_row_slice(2, 2, &[1e10, 1.0, 1.0, 1.0]);
    assert!(!is_singular(&mixed));

    let zero_row = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 0.0, 0.0]);
    assert!(is_singular(&zero_row));
}

#[test]
fn divergent_system_reports_radius() -> TestResult {
    let a   = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 1.0]);
    let b   = DVector::from_column_slice(&[1.0, 1.0]);
    let cfg = LinearCfg::new().set_max_iter(50)?;
    let res = jacobi(&a, &b, &DVector::zeros(2), &cfg)?;

    assert_eq!(res.failure(), Some(&SystemFailure::DidNotConverge { iterations: 50 }));
    assert_eq!(res.failure_reason().as_deref(), Some("did not converge after 50 iterations"));
    assert_abs_diff_eq!(res.spectral_radius.unwrap(), 6f64.sqrt(), epsilon = 1e-10);
    assert_eq!(res.is_convergent(), Some(false));
    assert_eq!(res.table.len(), 51);
    Ok(())
}

#[test]
fn norms_and_relative_error() -> TestResult {
    let (a, b) = system();
    for norm in [Norm::L1, Norm::L2, Norm::LInf] {
        let cfg = LinearCfg::new().set_norm(norm).set_significant_figures(6)?;
        let res = jacobi(&a, &b, &DVector::zeros(3), &cfg)?;

        assert!(res.is_success(), "{norm:?}");
        let x = res.solution.unwrap();
        assert_abs_diff_eq!(x[2], 3.0, epsilon = 1e-4);
    }
    Ok(())
}

#[test]
fn malformed_input() {
    let (a, b) = system();
    let cfg = LinearCfg::new();

    let short = DVector::zeros(2);
    assert_eq!(
        jacobi(&a, &short, &DVector::zeros(3), &cfg).unwrap_err(),
        LinearSystemError::DimensionMismatch { what: "b", expected: 3, got: 2 }
    );
    assert_eq!(
        jacobi(&a, &b, &short, &cfg).unwrap_err(),
        LinearSystemError::DimensionMismatch { what: "x0", expected: 3, got: 2 }
    );

    let wide = DMatrix::zeros(2, 3);
    assert_eq!(
        jacobi(&wide, &short, &short, &cfg).unwrap_err(),
        LinearSystemError::NotSquare { rows: 2, cols: 3 }
    );

    let mut bad = a.clone();
    bad[(1, 1)] = f64::NAN;
    assert_eq!(
        jacobi(&bad, &b, &DVector::zeros(3), &cfg).unwrap_err(),
        LinearSystemError::NonFinite { what: "A" }
    );

    assert_eq!(cfg.set_max_iter(0).unwrap_err(), LinearSystemError::InvalidMaxIter { got: 0 });
}
