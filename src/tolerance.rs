//! Tolerance specification shared by every iterative method.
//!
//! A [`Tolerance`] is a pair `(magnitude, kind)`:
//! ├ [`ToleranceKind::SignificantFigures`] : threshold `5 × 10⁻ⁿ`, relative error
//! └ [`ToleranceKind::CorrectDecimals`]    : threshold `0.5 × 10⁻ⁿ`, absolute error

use thiserror::Error;

/// Largest accepted magnitude; keeps `10⁻ⁿ` a normal, strictly positive `f64`.
pub const MAX_MAGNITUDE: u32 = 300;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceError {
    #[error("invalid tolerance magnitude: must be in 1..={max}. got {got}")]
    InvalidMagnitude { got: u32, max: u32 },
}

/// How the tolerance magnitude is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceKind {
    SignificantFigures,
    CorrectDecimals,
}

/// Error measure derived from a [`ToleranceKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// `|current - previous|`
    Absolute,
    /// `|current - previous| / |current|`
    Relative,
}

impl From<ToleranceKind> for ErrorType {
    fn from(kind: ToleranceKind) -> Self {
        match kind {
            ToleranceKind::SignificantFigures => ErrorType::Relative,
            ToleranceKind::CorrectDecimals    => ErrorType::Absolute,
        }
    }
}

/// Target precision of an iterative method.
///
/// Construct with [`Tolerance::new`], [`Tolerance::significant_figures`] or
/// [`Tolerance::correct_decimals`]; the magnitude is validated once, so
/// [`Tolerance::threshold`] is always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerance {
    magnitude: u32,
    kind: ToleranceKind,
}

impl Tolerance {
    pub fn new(magnitude: u32, kind: ToleranceKind) -> Result<Self, ToleranceError> {
        if magnitude == 0 || magnitude > MAX_MAGNITUDE {
            return Err(ToleranceError::InvalidMagnitude { got: magnitude, max: MAX_MAGNITUDE });
        }
        Ok(Self { magnitude, kind })
    }

    pub fn significant_figures(n: u32) -> Result<Self, ToleranceError> {
        Self::new(n, ToleranceKind::SignificantFigures)
    }

    pub fn correct_decimals(n: u32) -> Result<Self, ToleranceError> {
        Self::new(n, ToleranceKind::CorrectDecimals)
    }

    #[inline] #[must_use] pub fn magnitude(&self) -> u32 { self.magnitude }
    #[inline] #[must_use] pub fn kind(&self) -> ToleranceKind { self.kind }

    /// Numeric stopping threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        let scale = 10f64.powi(-(self.magnitude as i32));
        match self.kind {
            ToleranceKind::SignificantFigures => 5.0 * scale,
            ToleranceKind::CorrectDecimals    => 0.5 * scale,
        }
    }

    #[inline]
    #[must_use]
    pub fn error_type(&self) -> ErrorType {
        self.kind.into()
    }
}

impl Default for Tolerance {
    /// Six correct decimals.
    fn default() -> Self {
        Self { magnitude: 6, kind: ToleranceKind::CorrectDecimals }
    }
}
