use numethods::interpolation::newton::{divided_difference_table, interpolate};
use numethods::interpolation::{
    Algorithm, CommonCfg, Form, InterpolationError, InterpolationModel, Interpolator,
};

type TestResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;

#[test]
fn coefficients_are_table_diagonal() -> TestResult {
    let x = [1.0, 2.0, 3.0];
    let y = [1.0, 4.0, 9.0];
    let model = interpolate(&CommonCfg::new().set_x(&x)?.set_y(&y)?)?;

    assert_eq!(model.newton_coefficients().unwrap(), &[1.0, 3.0, 1.0]);

    let table = divided_difference_table(&x, &y);
    assert_eq!(table[1][1], Some(3.0));
    assert_eq!(table[2][1], Some(5.0));
    assert_eq!(table[2][2], Some(1.0));
    assert_eq!(table[0][1], None);
    Ok(())
}

#[test]
fn expands_to_power_form() -> TestResult {
    let x = [1.0, 2.0, 3.0];
    let y = [1.0, 4.0, 9.0];
    let model = interpolate(&CommonCfg::new().set_x(&x)?.set_y(&y)?)?;
    let p = model.polynomial().unwrap();

    for (c, e) in p.coefficients().iter().zip([0.0, 0.0, 1.0]) {
        assert!((c - e).abs() <= ATOL);
    }
    assert_eq!(model.to_string(), "x^2");
    Ok(())
}

#[test]
fn exact_hits_and_extrapolation() -> TestResult {
    let x = [0.0, 0.5, 1.0, 2.0, 3.5];
    let y: Vec<f64> = x.iter().map(|v| v * v * v - 2.0 * v).collect();
    let model = interpolate(&CommonCfg::new().set_x(&x)?.set_y(&y)?)?;

    for (&xi, &yi) in x.iter().zip(&y) {
        assert!((model.eval(xi)? - yi).abs() <= ATOL);
    }
    // the cubic is reproduced exactly outside the nodes too
    assert!((model.eval(-1.0)? - 1.0).abs() <= 1e-10);
    Ok(())
}

#[test]
fn duplicate_x_rejected() -> TestResult {
    let x = [0.0, 1.0, 1.0];
    let y = [1.0, 2.0, 3.0];
    assert!(matches!(
        interpolate(&CommonCfg::new().set_x(&x)?.set_y(&y)?),
        Err(InterpolationError::DuplicateX { .. })
    ));
    Ok(())
}

#[test]
fn small_scale_nodes_are_distinct() -> TestResult {
    let x = [1e-13, 3e-13, 5e-13];
    let y = [1.0, 2.0, 3.0];
    let model = interpolate(&CommonCfg::new().set_x(&x)?.set_y(&y)?)?;

    assert!((model.eval(3e-13)? - 2.0).abs() < 1e-9);
    assert!((model.eval(4e-13)? - 2.5).abs() < 1e-9);
    Ok(())
}

#[test]
fn near_duplicates_rejected_relative_to_scale() -> TestResult {
    let x = [1.0, 1.0 + 1e-13, 2.0];
    let y = [1.0, 2.0, 3.0];
    assert!(matches!(
        interpolate(&CommonCfg::new().set_x(&x)?.set_y(&y)?),
        Err(InterpolationError::DuplicateX { .. })
    ));

    // a looser x_tol merges more
    let x = [1.0, 1.001, 2.0];
    let cfg = CommonCfg::new().set_x(&x)?.set_y(&y)?;
    assert!(interpolate(&cfg).is_ok());
    assert!(matches!(
        interpolate(&cfg.set_x_tol(1e-2)?),
        Err(InterpolationError::DuplicateX { .. })
    ));
    Ok(())
}

#[test]
fn malformed_newton_form_is_an_error() {
    let empty = InterpolationModel {
        algorithm : Algorithm::Newton,
        form      : Form::Newton { nodes: vec![], coefficients: vec![] },
        decimals  : None,
    };
    assert_eq!(empty.eval(1.0), Err(InterpolationError::EmptyInput));
    assert!(empty.polynomial().is_none());
    assert!(empty.coefficients().is_empty());

    let short = InterpolationModel {
        algorithm : Algorithm::Newton,
        form      : Form::Newton { nodes: vec![0.0], coefficients: vec![1.0, 2.0, 3.0] },
        decimals  : None,
    };
    assert_eq!(short.eval(1.0), Err(InterpolationError::UnequalLength { x_len: 1, y_len: 3 }));
    assert_eq!(short.to_string(), "");
}
