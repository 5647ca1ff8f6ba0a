//! Linear-system error types.
//!
//! ┌ [`LinearSystemError`] : malformed input or configuration, returned as `Err`
//! └ [`SystemFailure`]     : domain failures carried inside
//!     [`super::report::LinearSystemResult::status`]

use thiserror::Error;
use crate::tolerance::ToleranceError;


#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LinearSystemError {
    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid relaxation factor: omega must lie in (0, 2). got omega={omega}")]
    InvalidOmega { omega: f64 },

    #[error("empty system: A has no rows")]
    Empty,

    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("dimension mismatch: {what} has length {got}, expected {expected}")]
    DimensionMismatch { what: &'static str, expected: usize, got: usize },

    #[error("non-finite entry in {what}")]
    NonFinite { what: &'static str },
}


/// Reasons a solve ends in [`crate::Status::Failure`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SystemFailure {
    #[error("matrix is singular")]
    Singular,

    #[error("did not converge after {iterations} iterations")]
    DidNotConverge { iterations: usize },

    #[error("relative error undefined at iteration {iteration}: iterate is the zero vector")]
    UndefinedRelativeError { iteration: usize },

    #[error("iterate became non-finite at iteration {iteration}")]
    NonFinite { iteration: usize },
}
