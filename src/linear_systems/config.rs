//! Configuration for the linear-system solvers.
//!
//! [`LinearCfg`] — shared fields
//! ├ `tolerance` : [`Tolerance`], threshold + error type of the step norm
//! ├ `max_iter`  : iteration budget, >= 1
//! └ `norm`      : [`Norm`] measuring the step between sweeps
//!
//! [`SorCfg`] wraps it with the relaxation factor `omega` and gets the same
//! setters through `impl_linear_cfg!`.

use super::errors::LinearSystemError;
use crate::metric::Norm;
use crate::root_finding::config::DEFAULT_MAX_ITER;
use crate::tolerance::{ErrorType, Tolerance};

/// Relaxation factor of plain Gauss-Seidel.
pub const DEFAULT_OMEGA: f64 = 1.0;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearCfg {
    tolerance : Tolerance,
    max_iter  : usize,
    norm      : Norm,
}

impl LinearCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tolerance : Tolerance::default(),
            max_iter  : DEFAULT_MAX_ITER,
            norm      : Norm::default(),
        }
    }

    // getters
    #[inline] pub fn tolerance(&self)  -> Tolerance { self.tolerance }
    #[inline] pub fn max_iter(&self)   -> usize { self.max_iter }
    #[inline] pub fn norm(&self)       -> Norm { self.norm }
    #[inline] pub fn threshold(&self)  -> f64 { self.tolerance.threshold() }
    #[inline] pub fn error_type(&self) -> ErrorType { self.tolerance.error_type() }

    // setters
    #[must_use]
    pub fn set_tolerance(mut self, v: Tolerance) -> Self {
        self.tolerance = v;
        self
    }
    #[must_use]
    pub fn set_norm(mut self, v: Norm) -> Self {
        self.norm = v;
        self
    }
    pub fn set_significant_figures(self, n: u32) -> Result<Self, LinearSystemError> {
        Ok(self.set_tolerance(Tolerance::significant_figures(n)?))
    }
    pub fn set_correct_decimals(self, n: u32) -> Result<Self, LinearSystemError> {
        Ok(self.set_tolerance(Tolerance::correct_decimals(n)?))
    }
    pub fn set_max_iter(mut self, v: usize) -> Result<Self, LinearSystemError> {
        if v == 0 {
            return Err(LinearSystemError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }
}

impl Default for LinearCfg {
    fn default() -> Self {
        Self::new()
    }
}


macro_rules! impl_linear_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn common(&self) -> &$crate::linear_systems::config::LinearCfg {
                &self.common
            }
            #[must_use]
            pub fn set_tolerance(mut self, v: $crate::tolerance::Tolerance) -> Self {
                self.common = self.common.set_tolerance(v);
                self
            }
            #[must_use]
            pub fn set_norm(mut self, v: $crate::metric::Norm) -> Self {
                self.common = self.common.set_norm(v);
                self
            }
            pub fn set_significant_figures(
                mut self, n: u32
            ) -> Result<Self, $crate::linear_systems::errors::LinearSystemError> {
                self.common = self.common.set_significant_figures(n)?;
                Ok(self)
            }
            pub fn set_correct_decimals(
                mut self, n: u32
            ) -> Result<Self, $crate::linear_systems::errors::LinearSystemError> {
                self.common = self.common.set_correct_decimals(n)?;
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::linear_systems::errors::LinearSystemError> {
                self.common = self.common.set_max_iter(v)?;
                Ok(self)
            }
        }
    };
}


/// SOR configuration: [`LinearCfg`] plus the relaxation factor `omega ∈ (0, 2)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SorCfg {
    common : LinearCfg,
    omega  : f64,
}

impl SorCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: LinearCfg::new(), omega: DEFAULT_OMEGA }
    }

    #[inline] pub fn omega(&self) -> f64 { self.omega }

    pub fn set_omega(mut self, v: f64) -> Result<Self, LinearSystemError> {
        if !(v > 0.0 && v < 2.0) {
            return Err(LinearSystemError::InvalidOmega { omega: v });
        }
        self.omega = v;
        Ok(self)
    }
}
impl_linear_cfg!(SorCfg);

impl Default for SorCfg {
    fn default() -> Self {
        Self::new()
    }
}

impl From<LinearCfg> for SorCfg {
    fn from(common: LinearCfg) -> Self {
        Self { common, omega: DEFAULT_OMEGA }
    }
}
