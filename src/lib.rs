//! Classical numerical methods with iteration tables.
//!
//! ┌ [`root_finding`]   : bisection, false position, fixed point, Newton–Raphson,
//! │                      secant, multiple roots, incremental search
//! ├ [`linear_systems`] : Jacobi, Gauss–Seidel, SOR
//! └ [`interpolation`]  : Vandermonde, Lagrange, Newton divided differences,
//!                        linear spline, natural cubic spline
//!
//! Shared conventions live in [`tolerance`], [`metric`], [`table`] and [`status`].
//! Every engine takes already-evaluable callables and plain numeric data; nothing
//! here parses expressions.

pub mod metric;
pub mod status;
pub mod table;
pub mod tolerance;

pub mod interpolation;
pub mod linear_systems;
pub mod root_finding;

pub use status::Status;
pub use table::{ConvergenceTable, ScalarRow, Table, VectorRow};
pub use tolerance::{ErrorType, Tolerance, ToleranceKind};
