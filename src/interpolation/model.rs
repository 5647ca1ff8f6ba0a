//! Interpolation models returned by every engine.
//!
//! ┌ [`Form::Power`]     : `Σ cₖ xᵏ`
//! ├ [`Form::Lagrange`]  : `Σ yᵢ Lᵢ(x)`, evaluated from the nodes directly
//! ├ [`Form::Newton`]    : `Σ cᵢ Π_{j<i} (x - xⱼ)`
//! └ [`Form::Piecewise`] : one [`Segment`] per knot interval
//!
//! Models always hold the unrounded coefficients; `decimals` only affects
//! [`InterpolationModel::coefficients`] and `Display`.

use std::fmt;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::polynomial::{round_to, Polynomial};
use crate::interpolation::spline::helpers::find_interval;
use crate::interpolation::traits::Interpolator;


/// One spline piece on `[x_start, x_end]`, stored in `t = x - x_start`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub x_start : f64,
    pub x_end   : f64,
    pub local   : Polynomial,
}

impl Segment {
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.local.eval(x - self.x_start)
    }

    /// `order`-th derivative at `x`.
    pub fn eval_derivative(&self, x: f64, order: usize) -> f64 {
        let mut p = self.local.clone();
        for _ in 0..order {
            p = p.derivative();
        }
        p.eval(x - self.x_start)
    }

    /// The piece expanded in powers of `x`.
    pub fn global(&self) -> Polynomial {
        self.local.shifted(self.x_start)
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum Form {
    Power(Polynomial),
    Lagrange { nodes: Vec<f64>, values: Vec<f64> },
    Newton { nodes: Vec<f64>, coefficients: Vec<f64> },
    Piecewise(Vec<Segment>),
}


#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationModel {
    pub algorithm : Algorithm,
    pub form      : Form,
    pub decimals  : Option<u32>,
}

impl InterpolationModel {
    pub(crate) fn new(algorithm: Algorithm, form: Form, decimals: Option<u32>) -> Self {
        Self { algorithm, form, decimals }
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.algorithm_name()
    }

    /// Single polynomial in powers of `x`; `None` for piecewise models and
    /// for a Newton form whose coefficients do not fit its nodes.
    pub fn polynomial(&self) -> Option<Polynomial> {
        match &self.form {
            Form::Power(p) => Some(p.clone()),
            Form::Lagrange { nodes, values } => {
                let mut p = Polynomial::zero();
                for (basis, &y) in lagrange_basis(nodes).iter().zip(values) {
                    p.add_scaled(basis, y);
                }
                Some(p)
            }
            Form::Newton { nodes, coefficients } => {
                check_newton(nodes, coefficients).ok()?;
                Some(expand_newton(nodes, coefficients))
            }
            Form::Piecewise(_) => None,
        }
    }

    /// Lagrange basis polynomials `Lᵢ(x)`; `None` for other forms.
    pub fn lagrange_basis(&self) -> Option<Vec<Polynomial>> {
        match &self.form {
            Form::Lagrange { nodes, .. } => Some(lagrange_basis(nodes)),
            _ => None,
        }
    }

    /// Divided-difference diagonal; `None` for other forms.
    pub fn newton_coefficients(&self) -> Option<&[f64]> {
        match &self.form {
            Form::Newton { coefficients, .. } => Some(coefficients),
            _ => None,
        }
    }

    pub fn segments(&self) -> Option<&[Segment]> {
        match &self.form {
            Form::Piecewise(segments) => Some(segments),
            _ => None,
        }
    }

    /// Ascending power-form coefficients, one vector per piece (a single
    /// vector for global methods), rounded to `decimals` when set.
    pub fn coefficients(&self) -> Vec<Vec<f64>> {
        let pieces = match (&self.form, self.polynomial()) {
            (Form::Piecewise(segments), _) => segments.iter().map(Segment::global).collect(),
            (_, Some(p)) => vec![p],
            (_, None)    => Vec::new(),
        };
        pieces
            .iter()
            .map(|p| match self.decimals {
                Some(d) => p.rounded(d),
                None    => p.coefficients().to_vec(),
            })
            .collect()
    }

    /// `[x_min, x_max]` a piecewise model is defined on.
    pub fn domain(&self) -> Option<(f64, f64)> {
        let segments = self.segments()?;
        Some((segments.first()?.x_start, segments.last()?.x_end))
    }

    fn segment_at(&self, segments: &[Segment], x: f64) -> Result<usize, InterpolationError> {
        let (x_min, x_max) = match (segments.first(), segments.last()) {
            (Some(first), Some(last)) => (first.x_start, last.x_end),
            _ => return Err(InterpolationError::EmptyInput),
        };
        if !(x_min..=x_max).contains(&x) {
            return Err(InterpolationError::OutOfBounds { got: x, x_min, x_max });
        }
        let knots: Vec<f64> = segments
            .iter()
            .map(|s| s.x_start)
            .chain(std::iter::once(x_max))
            .collect();
        Ok(find_interval(&knots, x).min(segments.len() - 1))
    }
}

impl Interpolator for InterpolationModel {
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        match &self.form {
            Form::Power(p) => Ok(p.eval(x)),
            Form::Lagrange { nodes, values } => Ok(eval_lagrange(nodes, values, x)),
            Form::Newton { nodes, coefficients } => {
                check_newton(nodes, coefficients)?;
                Ok(eval_newton(nodes, coefficients, x))
            }
            Form::Piecewise(segments) => {
                let i = self.segment_at(segments, x)?;
                Ok(segments[i].eval(x))
            }
        }
    }
}

impl fmt::Display for InterpolationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let round = |p: &Polynomial| match self.decimals {
            Some(d) => Polynomial::new(p.rounded(d)),
            None    => p.clone(),
        };
        match (&self.form, self.polynomial()) {
            (Form::Piecewise(segments), _) => {
                for (i, s) in segments.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    let (a, b) = match self.decimals {
                        Some(d) => (round_to(s.x_start, d), round_to(s.x_end, d)),
                        None    => (s.x_start, s.x_end),
                    };
                    write!(f, "[{a}, {b}]: {}", round(&s.global()))?;
                }
                Ok(())
            }
            (_, Some(p)) => write!(f, "{}", round(&p)),
            (_, None)    => Ok(()),
        }
    }
}


/// `Lᵢ(x) = Π_{j≠i} (x - xⱼ) / (xᵢ - xⱼ)` expanded in powers of `x`.
fn lagrange_basis(nodes: &[f64]) -> Vec<Polynomial> {
    nodes
        .iter()
        .enumerate()
        .map(|(i, &xi)| {
            let mut p = Polynomial::constant(1.0);
            let mut denom = 1.0;
            for (j, &xj) in nodes.iter().enumerate() {
                if j != i {
                    p = p.mul_linear(xj);
                    denom *= xi - xj;
                }
            }
            let mut scaled = Polynomial::zero();
            scaled.add_scaled(&p, 1.0 / denom);
            scaled
        })
        .collect()
}

fn eval_lagrange(nodes: &[f64], values: &[f64], x: f64) -> f64 {
    nodes
        .iter()
        .zip(values)
        .enumerate()
        .map(|(i, (&xi, &yi))| {
            let li: f64 = nodes
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &xj)| (x - xj) / (xi - xj))
                .product();
            yi * li
        })
        .sum()
}

/// `n` coefficients need at least `n - 1` nodes.
fn check_newton(nodes: &[f64], coeffs: &[f64]) -> Result<(), InterpolationError> {
    if coeffs.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if nodes.len() + 1 < coeffs.len() {
        return Err(InterpolationError::UnequalLength { x_len: nodes.len(), y_len: coeffs.len() });
    }
    Ok(())
}

/// Nested evaluation
///
/// ```text
/// P(x) = c[0] + (x - x[0]) * [ c[1] + (x - x[1]) * [ ... c[n-1] ... ] ]
/// ```
fn eval_newton(nodes: &[f64], coeffs: &[f64], x: f64) -> f64 {
    let n = coeffs.len();
    let mut p = coeffs[n - 1];
    for j in (0..n - 1).rev() {
        p = coeffs[j] + (x - nodes[j]) * p;
    }
    p
}

fn expand_newton(nodes: &[f64], coeffs: &[f64]) -> Polynomial {
    let n = coeffs.len();
    let mut p = Polynomial::constant(coeffs[n - 1]);
    for j in (0..n - 1).rev() {
        p = p.mul_linear(nodes[j]);
        p.add_scaled(&Polynomial::constant(coeffs[j]), 1.0);
    }
    p
}
