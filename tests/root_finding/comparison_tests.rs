//! tests for running every root finder on one problem
use numethods::root_finding::comparison::{compare, run, RootProblem};
use numethods::root_finding::{Algorithm, BracketFamily, CommonCfg, OpenFamily, RootFailure};

fn f(x: f64) -> f64 { x * x - 4.0 }
fn df(x: f64) -> f64 { 2.0 * x }
fn d2f(_: f64) -> f64 { 2.0 }
fn g(x: f64) -> f64 { 0.5 * (x + 4.0 / x) }

#[test]
fn every_method_finds_2() {
    let problem = RootProblem::new(&f, 0.0, 3.0, 3.0)
        .with_derivative(&df)
        .with_second_derivative(&d2f)
        .with_iteration_function(&g);
    let report = compare(&problem, CommonCfg::new());

    assert_eq!(report.entries.len(), Algorithm::COMPARED.len());
    for (entry, algorithm) in report.iter().zip(Algorithm::COMPARED) {
        assert_eq!(entry.algorithm, algorithm);
        assert!(entry.is_success(), "{} failed: {:?}", entry.algorithm, entry.failure_reason());
        assert!((entry.solution.unwrap() - 2.0).abs() < 1e-6);
    }
}

#[test]
fn best_has_fewest_iterations() {
    let problem = RootProblem::new(&f, 0.0, 3.0, 3.0)
        .with_derivative(&df)
        .with_second_derivative(&d2f)
        .with_iteration_function(&g);
    let report = compare(&problem, CommonCfg::new());

    let best = report.best().unwrap();
    let min  = report.iter().filter(|r| r.is_success()).map(|r| r.iterations).min().unwrap();
    assert_eq!(best.iterations, min);

    let bisection = report.get(Algorithm::Bracket(BracketFamily::Bisection)).unwrap();
    assert!(best.iterations < bisection.iterations);
}

#[test]
fn missing_callables_fail_only_their_methods() {
    let problem = RootProblem::new(&f, 0.0, 3.0, 3.0);
    let report  = compare(&problem, CommonCfg::new());

    let newton = report.get(Algorithm::Open(OpenFamily::Newton)).unwrap();
    assert_eq!(newton.failure(), Some(&RootFailure::MissingInput { input: "df" }));

    let fixed = report.get(Algorithm::Open(OpenFamily::FixedPoint)).unwrap();
    assert_eq!(fixed.failure(), Some(&RootFailure::MissingInput { input: "g" }));

    assert!(report.get(Algorithm::Bracket(BracketFamily::Bisection)).unwrap().is_success());
    assert!(report.get(Algorithm::Open(OpenFamily::Secant)).unwrap().is_success());
}

#[test]
fn run_dispatches_incremental_search() {
    let problem = RootProblem::new(&f, 0.0, 3.0, 3.0).with_step(0.5);
    let res = run(Algorithm::Bracket(BracketFamily::IncrementalSearch), &problem, CommonCfg::new());

    assert!(res.is_success());
    assert_eq!(res.solution, Some(2.0));

    let res = run(
        Algorithm::Bracket(BracketFamily::IncrementalSearch),
        &RootProblem::new(&f, 0.0, 3.0, 3.0),
        CommonCfg::new(),
    );
    assert_eq!(res.failure(), Some(&RootFailure::MissingInput { input: "step" }));
}
