//! Shared configuration for interpolation algorithms.
//!
//! [`CommonCfg`] — universal fields
//! - `x`        : x values provided, pairwise distinct, any order
//! - `y`        : y values provided
//! - `x_tol`    : relative gap below which two x values count as duplicates
//! - `decimals` : optional rounding of displayed coefficients
//!
//! Setters check each slice on its own; [`CommonCfg::validate`] checks the
//! pair and runs at the start of every `interpolate`.

use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;

/// Largest accepted `decimals`; beyond this `f64` has no digits left.
pub const MAX_DECIMALS: u32 = 15;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg<'a> {
    pub(crate) x        : &'a [f64],
    pub(crate) y        : &'a [f64],
    pub(crate) x_tol    : f64,
    pub(crate) decimals : Option<u32>,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x        : &[],
            y        : &[],
            x_tol    : DEFAULT_X_TOL,
            decimals : None,
        }
    }

    /// Checks lengths and point count, then that no two x values satisfy
    /// `|x₁ - x₂| <= x_tol · max(|x₁|, |x₂|)`. Equal values always collide.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x = self.x;
        let y = self.y;

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if x.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: x.len(), need: 2 });
        }

        // adjacent after sorting covers every pair
        let mut sorted = x.to_vec();
        sorted.sort_by(f64::total_cmp);
        for w in sorted.windows(2) {
            if (w[1] - w[0]).abs() <= self.x_tol * w[0].abs().max(w[1].abs()) {
                return Err(InterpolationError::DuplicateX { x1: w[0], x2: w[1] });
            }
        }
        Ok(())
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_tol(&self) -> f64 { self.x_tol }
    pub fn decimals(&self) -> Option<u32> { self.decimals }

    // setters
    pub fn set_x(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        check_slice(v)?;
        let y_len = self.y.len();
        if y_len != 0 && y_len != v.len() {
            return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
        }
        self.x = v;
        Ok(self)
    }

    pub fn set_y(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        check_slice(v)?;
        let x_len = self.x.len();
        if x_len != 0 && x_len != v.len() {
            return Err(InterpolationError::UnequalLength { x_len, y_len: v.len() });
        }
        self.y = v;
        Ok(self)
    }

    pub fn set_x_tol(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(InterpolationError::InvalidXTol { got: v });
        }
        self.x_tol = v;
        Ok(self)
    }

    pub fn set_decimals(mut self, v: u32) -> Result<Self, InterpolationError> {
        if v > MAX_DECIMALS {
            return Err(InterpolationError::InvalidDecimals { got: v, max: MAX_DECIMALS });
        }
        self.decimals = Some(v);
        Ok(self)
    }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}


fn check_slice(v: &[f64]) -> Result<(), InterpolationError> {
    if v.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if let Some(idx) = non_finite_idx(v) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    Ok(())
}

pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}
