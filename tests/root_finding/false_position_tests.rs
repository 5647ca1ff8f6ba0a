//! tests for the false position root finding algorithm
use numethods::root_finding::false_position::false_position;
use numethods::root_finding::{CommonCfg, RootFailure, RootFindingError};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let res = false_position(|x: f64| x * x - 2.0, 0.0, 2.0, CommonCfg::new());

    assert!(res.is_success());
    assert!((res.solution.unwrap() - 2.0_f64.sqrt()).abs() < 1e-6);
    // chord through (0, -2) and (2, 2)
    assert_eq!(res.table.rows()[0].x, 1.0);
    Ok(())
}

#[test]
fn bracket_always_contains_root() -> TestResult {
    let res  = false_position(|x: f64| x * x - 2.0, 0.0, 2.0, CommonCfg::new());
    let root = 2.0_f64.sqrt();

    for row in &res.table {
        let (a, b) = row.bracket.unwrap();
        assert!(a <= root && root <= b, "bracket [{a}, {b}] lost the root");
        assert!(a <= row.x && row.x <= b);
    }
    Ok(())
}

#[test]
fn linear_function_hits_root_on_first_chord() -> TestResult {
    let res = false_position(|x: f64| 2.0 * x - 6.0, 0.0, 10.0, CommonCfg::new());

    assert!(res.is_success());
    assert_eq!(res.solution, Some(3.0));
    assert_eq!(res.f_solution, Some(0.0));
    assert_eq!(res.iterations, 0);
    Ok(())
}

#[test]
fn no_sign_change() -> TestResult {
    let res = false_position(|x: f64| x * x + 1.0, -1.0, 1.0, CommonCfg::new());

    assert_eq!(res.failure(), Some(&RootFailure::NoSignChange { a: -1.0, b: 1.0 }));
    assert!(res.table.is_empty());
    Ok(())
}

#[test]
fn iteration_limit() -> TestResult {
    let cfg = CommonCfg::new().set_max_iter(3)?;
    let res = false_position(|x: f64| x.powi(3) - 2.0 * x - 5.0, 2.0, 3.0, cfg);

    assert_eq!(res.failure(), Some(&RootFailure::IterationLimit { iterations: 3 }));
    assert_eq!(res.table.len(), 4);
    Ok(())
}
