// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub(crate) mod common;

// algorithms
pub mod bisection;
pub mod false_position;
pub mod fixed_point;
pub mod incremental_search;
pub mod multiple_roots;
pub mod newton;
pub mod secant;

pub mod comparison;

pub use algorithms::{Algorithm, BracketFamily, OpenFamily};
pub use config::{CommonCfg, DEFAULT_MAX_ITER};
pub use errors::{RootFailure, RootFindingError};
pub use report::ConvergenceResult;
