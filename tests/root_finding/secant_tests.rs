//! tests for the secant root finding algorithm
use numethods::root_finding::secant::secant;
use numethods::root_finding::{CommonCfg, RootFailure, RootFindingError};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_2() -> TestResult {
    let res = secant(|x: f64| x * x - 4.0, 1.0, 3.0, CommonCfg::new());

    assert!(res.is_success());
    assert!((res.solution.unwrap() - 2.0).abs() < 1e-6);
    Ok(())
}

#[test]
fn seeds_are_first_two_rows() -> TestResult {
    let res  = secant(|x: f64| x * x - 4.0, 1.0, 3.0, CommonCfg::new());
    let rows = res.table.rows();

    assert_eq!(rows[0].x, 1.0);
    assert!(rows[0].error.is_none());
    assert_eq!(rows[1].x, 3.0);
    assert_eq!(rows[1].error, Some(2.0));
    // x2 = 3 - 5·(3 - 1)/(5 - (-3))
    assert_eq!(rows[2].x, 1.75);
    Ok(())
}

#[test]
fn flat_secant_is_division_by_zero() -> TestResult {
    // f(-1) == f(1)
    let res = secant(|x: f64| x * x - 4.0, -1.0, 1.0, CommonCfg::new());

    assert_eq!(res.failure(), Some(&RootFailure::DivisionByZero { x: 1.0 }));
    assert!(res.failure_reason().unwrap().contains("division by zero"));
    assert_eq!(res.table.len(), 2);
    Ok(())
}

#[test]
fn tiny_magnitude_function_still_steps() -> TestResult {
    // f0 = -3e-20, f1 = 5e-20, far below f64::EPSILON in absolute terms
    let res = secant(|x: f64| 1e-20 * (x * x - 4.0), 1.0, 3.0, CommonCfg::new());

    assert!(res.is_success(), "{:?}", res.failure());
    assert!((res.solution.unwrap() - 2.0).abs() < 1e-6);
    assert!((res.table.rows()[2].x - 1.75).abs() < 1e-12);
    Ok(())
}

#[test]
fn invalid_seeds() -> TestResult {
    let res = secant(|x: f64| x, 1.0, 1.0, CommonCfg::new());
    assert_eq!(res.failure(), Some(&RootFailure::InvalidSeeds { x0: 1.0, x1: 1.0 }));

    let res = secant(|x: f64| x, 1.0, f64::INFINITY, CommonCfg::new());
    assert!(matches!(res.failure(), Some(RootFailure::InvalidSeeds { .. })));
    assert!(res.table.is_empty());
    Ok(())
}

#[test]
fn iteration_limit() -> TestResult {
    let cfg = CommonCfg::new().set_max_iter(2)?;
    let res = secant(|x: f64| x.exp() - 10.0, 0.0, 1.0, cfg);

    assert_eq!(res.failure(), Some(&RootFailure::IterationLimit { iterations: 2 }));
    assert_eq!(res.table.len(), 3);
    Ok(())
}
