use numethods::interpolation::spline::natural::interpolate;
use numethods::interpolation::{CommonCfg, InterpolationError, Interpolator};

type TestResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-10;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

#[test]
fn exact_hits() -> TestResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.5];
    let y = [0.0, 1.0, 4.0, 9.0, 3.0];
    let model = interpolate(&CommonCfg::new().set_x(&x)?.set_y(&y)?)?;

    for (&xi, &yi) in x.iter().zip(&y) {
        assert!(approx_eq(model.eval(xi)?, yi), "s({xi}) != {yi}");
    }
    Ok(())
}

#[test]
fn natural_boundary() -> TestResult {
    let x = [0.0, 0.7, 1.5, 2.0, 3.2];
    let y = [1.0, -1.0, 2.0, 0.5, 0.0];
    let model = interpolate(&CommonCfg::new().set_x(&x)?.set_y(&y)?)?;
    let segs = model.segments().unwrap();

    assert!(approx_eq(segs[0].eval_derivative(0.0, 2), 0.0));
    assert!(approx_eq(segs[segs.len() - 1].eval_derivative(3.2, 2), 0.0));
    Ok(())
}

#[test]
fn c2_at_interior_knots() -> TestResult {
    let x = [0.0, 0.7, 1.5, 2.0, 3.2];
    let y = [1.0, -1.0, 2.0, 0.5, 0.0];
    let model = interpolate(&CommonCfg::new().set_x(&x)?.set_y(&y)?)?;
    let segs = model.segments().unwrap();

    for w in segs.windows(2) {
        let knot = w[0].x_end;
        assert_eq!(knot, w[1].x_start);
        for order in 0..=2 {
            let left  = w[0].eval_derivative(knot, order);
            let right = w[1].eval_derivative(knot, order);
            assert!(approx_eq(left, right), "order {order} jump at {knot}: {left} vs {right}");
        }
    }
    Ok(())
}

#[test]
fn reproduces_straight_line() -> TestResult {
    let x = [3.0, 0.0, 1.0, 2.0];
    let y = [7.0, 1.0, 3.0, 5.0];
    let model = interpolate(&CommonCfg::new().set_x(&x)?.set_y(&y)?)?;

    assert!(approx_eq(model.eval(0.5)?, 2.0));
    assert!(approx_eq(model.eval(2.25)?, 5.5));
    Ok(())
}

#[test]
fn needs_four_points() -> TestResult {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0, 0.0];
    assert_eq!(
        interpolate(&CommonCfg::new().set_x(&x)?.set_y(&y)?).unwrap_err(),
        InterpolationError::InsufficientPoints { got: 3, need: 4 }
    );
    Ok(())
}

#[test]
fn out_of_bounds() -> TestResult {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 0.0, 1.0];
    let model = interpolate(&CommonCfg::new().set_x(&x)?.set_y(&y)?)?;

    assert!(matches!(model.eval(3.5), Err(InterpolationError::OutOfBounds { .. })));
    assert!(model.polynomial().is_none());
    Ok(())
}
