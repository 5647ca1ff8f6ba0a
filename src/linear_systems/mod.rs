// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod splitting;

// algorithms
pub mod gauss_seidel;
pub mod jacobi;
pub mod sor;

pub mod comparison;

pub use algorithms::Algorithm;
pub use config::{LinearCfg, SorCfg};
pub use errors::{LinearSystemError, SystemFailure};
pub use report::LinearSystemResult;
pub use splitting::{is_singular, spectral_radius, Splitting};
