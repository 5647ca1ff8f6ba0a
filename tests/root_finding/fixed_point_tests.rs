//! tests for fixed-point iteration
use numethods::root_finding::fixed_point::{fixed_point, FixedPointCfg};
use numethods::root_finding::{RootFailure, RootFindingError};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_dottie_number() -> TestResult {
    let cfg = FixedPointCfg::new().set_interval(0.0, 1.0)?;
    let res = fixed_point(|x: f64| x - x.cos(), f64::cos, 0.5, cfg);

    assert!(res.is_success());
    let root = res.solution.unwrap();
    assert!((root - 0.739_085_133_215_160_6).abs() < 1e-5);
    assert!((root - root.cos()).abs() < 1e-5);
    assert_eq!(res.bracket, Some((0.0, 1.0)));
    Ok(())
}

#[test]
fn rows_record_f_of_iterate() -> TestResult {
    let res = fixed_point(|x: f64| x - x.cos(), f64::cos, 0.5, FixedPointCfg::new());

    for row in &res.table {
        assert_eq!(row.fx, row.x - row.x.cos());
    }
    Ok(())
}

#[test]
fn divergence_reported_before_budget() -> TestResult {
    let cfg = FixedPointCfg::new().set_max_iter(500)?;
    let res = fixed_point(|x: f64| x + 1.0, |x: f64| 2.0 * x + 1.0, 1.0, cfg);

    assert!(matches!(res.failure(), Some(RootFailure::Diverged { x, .. }) if *x > 1e6));
    assert!(res.iterations < 500);
    assert!(res.failure_reason().unwrap().contains("diverged"));
    Ok(())
}

#[test]
fn leaving_interval_fails() -> TestResult {
    let cfg = FixedPointCfg::new().set_interval(-1.0, 1.0)?;
    let res = fixed_point(|x: f64| x, |x: f64| 2.0 * x, 0.3, cfg);

    assert_eq!(res.failure(), Some(&RootFailure::OutOfInterval { x: 1.2, a: -1.0, b: 1.0 }));
    // 0.3 and 0.6 were accepted
    assert_eq!(res.table.len(), 2);
    Ok(())
}

#[test]
fn start_outside_interval_rejected() -> TestResult {
    let cfg = FixedPointCfg::new().set_interval(0.0, 1.0)?;
    let res = fixed_point(|x: f64| x, |x: f64| x * 0.5, 3.0, cfg);

    assert!(matches!(res.failure(), Some(RootFailure::OutOfInterval { .. })));
    assert!(res.table.is_empty());
    Ok(())
}

#[test]
fn invalid_interval() {
    assert_eq!(
        FixedPointCfg::new().set_interval(2.0, 1.0),
        Err(RootFindingError::InvalidInterval { a: 2.0, b: 1.0 })
    );
}
