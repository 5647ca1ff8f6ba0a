use numethods::interpolation::vandermonde::{interpolate, vandermonde_matrix};
use numethods::interpolation::{CommonCfg, Form, InterpolationError, Interpolator};

type TestResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!((ai - bi).abs() <= ATOL, "mismatch at {i}: left={ai}, right={bi}");
    }
}

#[test]
fn recovers_quadratic() -> TestResult {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, 3.0, 7.0];
    let model = interpolate(&CommonCfg::new().set_x(&x)?.set_y(&y)?)?;

    assert!(matches!(model.form, Form::Power(_)));
    assert_vec_close(model.polynomial().unwrap().coefficients(), &[1.0, 1.0, 1.0]);
    assert_vec_close(&model.eval_many(&x)?, &y);
    assert!((model.eval(3.0)? - 13.0).abs() <= 1e-10);
    Ok(())
}

#[test]
fn unsorted_points() -> TestResult {
    let x = [2.0, -1.0, 0.5, 4.0];
    let y = [3.0, 0.0, -2.0, 1.0];
    let model = interpolate(&CommonCfg::new().set_x(&x)?.set_y(&y)?)?;

    for (&xi, &yi) in x.iter().zip(&y) {
        assert!((model.eval(xi)? - yi).abs() <= 1e-10);
    }
    Ok(())
}

#[test]
fn matrix_rows_are_powers() {
    let v = vandermonde_matrix(&[2.0, 3.0]);
    assert_eq!(v[(0, 0)], 1.0);
    assert_eq!(v[(0, 1)], 2.0);
    assert_eq!(v[(1, 1)], 3.0);
}

#[test]
fn rounding_is_display_only() -> TestResult {
    let x = [0.0, 3.0];
    let y = [0.0, 1.0];
    let model = interpolate(&CommonCfg::new().set_x(&x)?.set_y(&y)?.set_decimals(2)?)?;

    assert_eq!(model.coefficients(), vec![vec![0.0, 0.33]]);
    assert!((model.eval(3.0)? - 1.0).abs() <= ATOL);
    assert_eq!(model.to_string(), "0.33x");
    Ok(())
}

#[test]
fn duplicate_x_rejected() -> TestResult {
    let x = [0.0, 1.0, 0.0];
    let y = [1.0, 2.0, 3.0];
    let err = interpolate(&CommonCfg::new().set_x(&x)?.set_y(&y)?).unwrap_err();

    assert_eq!(err, InterpolationError::DuplicateX { x1: 0.0, x2: 0.0 });
    Ok(())
}

#[test]
fn input_checks() {
    let x = [0.0, 1.0];
    assert_eq!(
        CommonCfg::new().set_x(&[]).unwrap_err(),
        InterpolationError::EmptyInput
    );
    assert_eq!(
        CommonCfg::new().set_x(&[0.0, f64::NAN]).unwrap_err(),
        InterpolationError::NonFiniteVec { idx: 1 }
    );
    assert!(matches!(
        CommonCfg::new().set_x(&x).and_then(|c| c.set_y(&[1.0])),
        Err(InterpolationError::UnequalLength { x_len: 2, y_len: 1 })
    ));
    assert_eq!(
        interpolate(&CommonCfg::new().set_x(&[1.0]).and_then(|c| c.set_y(&[1.0])).unwrap()).unwrap_err(),
        InterpolationError::InsufficientPoints { got: 1, need: 2 }
    );
    assert!(CommonCfg::new().set_decimals(16).is_err());
    assert!(CommonCfg::new().set_x_tol(0.0).is_err());
}
