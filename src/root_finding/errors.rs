//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : configuration errors, returned as `Err` from setters
//! │   ├ invalid tolerance magnitude
//! │   ├ `max_iter` < 1
//! │   └ invalid fixed-point interval
//! │
//! └ [`RootFailure`]      : expected domain failures, carried inside
//!     [`super::report::ConvergenceResult::status`]
//!     ├ invalid input    : bad bracket, no sign change, bad step
//!     ├ structural       : zero derivative, zero denominator, divergence
//!     └ budget exhaustion


use thiserror::Error;
use crate::tolerance::ToleranceError;


/// Root-finding configuration errors.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RootFindingError {
    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid interval: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidInterval { a: f64, b: f64 },
}


/// Reasons a root-finding run ends in [`crate::Status::Failure`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RootFailure {
    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) > 0")]
    NoSignChange { a: f64, b: f64 },

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("invalid initial guesses: x0={x0}, x1={x1} must be finite and distinct")]
    InvalidSeeds { x0: f64, x1: f64 },

    #[error("invalid step: dx={dx} must be finite and non-zero")]
    InvalidStep { dx: f64 },

    #[error("out of interval: iterate x={x} left [{a}, {b}]")]
    OutOfInterval { x: f64, a: f64, b: f64 },

    #[error("diverged at iteration {iteration}: x={x}")]
    Diverged { iteration: usize, x: f64 },

    #[error("derivative is zero at x={x}")]
    DerivativeZero { x: f64 },

    #[error("division by zero at x={x}: possible multiple root")]
    DivisionByZero { x: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("relative error undefined at iteration {iteration}: iterate is zero")]
    UndefinedRelativeError { iteration: usize },

    #[error("missing input: {input} is required by this method")]
    MissingInput { input: &'static str },

    #[error("too many iterations: tolerance not reached after {iterations} iterations")]
    IterationLimit { iterations: usize },
}
