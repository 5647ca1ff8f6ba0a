//! Dense polynomials in ascending-power form.

use std::fmt;


/// `p(x) = c[0] + c[1]·x + … + c[n]·xⁿ`.
///
/// An empty coefficient vector is the zero polynomial.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self { coeffs }
    }

    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    pub fn constant(c: f64) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Ascending coefficients.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Index of the highest stored coefficient; `0` for constants and zero.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Horner evaluation.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    #[must_use]
    pub fn derivative(&self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, &c)| k as f64 * c)
            .collect();
        Self { coeffs }
    }

    /// `p(x)·(x - root)`.
    #[must_use]
    pub fn mul_linear(&self, root: f64) -> Self {
        if self.coeffs.is_empty() {
            return Self::zero();
        }
        let mut out = vec![0.0; self.coeffs.len() + 1];
        for (k, &c) in self.coeffs.iter().enumerate() {
            out[k + 1] += c;
            out[k]     -= c * root;
        }
        Self { coeffs: out }
    }

    /// `self += s·other`.
    pub fn add_scaled(&mut self, other: &Polynomial, s: f64) {
        if other.coeffs.len() > self.coeffs.len() {
            self.coeffs.resize(other.coeffs.len(), 0.0);
        }
        for (dst, &c) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *dst += s * c;
        }
    }

    /// Expands `p(x - x0)` into ascending powers of `x`.
    ///
    /// Spline pieces are stored in the local variable `t = x - xᵢ`; this gives
    /// their global form.
    #[must_use]
    pub fn shifted(&self, x0: f64) -> Self {
        let mut out = Self::zero();
        for &c in self.coeffs.iter().rev() {
            out = out.mul_linear(x0);
            out.add_scaled(&Self::constant(c), 1.0);
        }
        out
    }

    /// Coefficients rounded to `decimals` places, for display only.
    pub fn rounded(&self, decimals: u32) -> Vec<f64> {
        self.coeffs.iter().map(|&c| round_to(c, decimals)).collect()
    }
}


/// Rounds half away from zero to `decimals` places.
pub fn round_to(v: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let r = (v * scale).round() / scale;
    // keep -0.0 out of printed coefficients
    if r == 0.0 { 0.0 } else { r }
}


/// Descending powers, e.g. `2x^2 - 3x + 1`; honours `{:.N}`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<(usize, f64)> = self
            .coeffs
            .iter()
            .enumerate()
            .rev()
            .filter(|&(_, &c)| c != 0.0)
            .map(|(k, &c)| (k, c))
            .collect();

        if terms.is_empty() {
            return write!(f, "0");
        }

        for (i, &(k, c)) in terms.iter().enumerate() {
            let sign = if c < 0.0 { '-' } else { '+' };
            match (i, sign) {
                (0, '-') => write!(f, "-")?,
                (0, _)   => {}
                _        => write!(f, " {sign} ")?,
            }
            let mag = c.abs();
            let show_mag = k == 0 || mag != 1.0;
            if show_mag {
                match f.precision() {
                    Some(p) => write!(f, "{mag:.p$}")?,
                    None    => write!(f, "{mag}")?,
                }
            }
            match k {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{k}")?,
            }
        }
        Ok(())
    }
}
