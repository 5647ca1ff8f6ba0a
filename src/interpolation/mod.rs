pub mod algorithms;
pub mod config;
pub mod errors;
pub mod model;
pub mod polynomial;
pub mod traits;
pub use traits::Interpolator;

pub mod lagrange;
pub mod linear;
pub mod newton;
pub mod spline;
pub mod vandermonde;

pub mod comparison;

pub use algorithms::Algorithm;
pub use config::CommonCfg;
pub use errors::InterpolationError;
pub use model::{Form, InterpolationModel, Segment};
pub use polynomial::Polynomial;
