//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with the default tolerance and iteration budget,
//! accepted directly by every method and wrapped by method-specific configs.
//!
//! [`CommonCfg`] — universal fields
//! ├ `tolerance` : [`Tolerance`] (threshold + absolute/relative error type)
//! └ `max_iter`  : iteration budget, >= 1
//!
//! Method-specific configs (e.g. [`super::fixed_point::FixedPointCfg`]) embed a
//! `common` field and get the same setters through `impl_common_cfg!`.


use crate::tolerance::{ErrorType, Tolerance};
use super::errors::RootFindingError;

pub const DEFAULT_MAX_ITER: usize = 1000;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    tolerance: Tolerance,
    max_iter: usize,
}

impl CommonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tolerance : Tolerance::default(),
            max_iter  : DEFAULT_MAX_ITER,
        }
    }

    // getters
    #[inline] pub fn tolerance(&self)  -> Tolerance { self.tolerance }
    #[inline] pub fn max_iter(&self)   -> usize { self.max_iter }
    #[inline] pub fn threshold(&self)  -> f64 { self.tolerance.threshold() }
    #[inline] pub fn error_type(&self) -> ErrorType { self.tolerance.error_type() }

    // setters
    #[must_use]
    pub fn set_tolerance(mut self, v: Tolerance) -> Self {
        self.tolerance = v;
        self
    }
    pub fn set_significant_figures(self, n: u32) -> Result<Self, RootFindingError> {
        Ok(self.set_tolerance(Tolerance::significant_figures(n)?))
    }
    pub fn set_correct_decimals(self, n: u32) -> Result<Self, RootFindingError> {
        Ok(self.set_tolerance(Tolerance::correct_decimals(n)?))
    }
    pub fn set_max_iter(mut self, v: usize) -> Result<Self, RootFindingError> {
        if v == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }
}

impl Default for CommonCfg {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn common(&self) -> &$crate::root_finding::config::CommonCfg {
                &self.common
            }
            #[must_use]
            pub fn set_tolerance(mut self, v: $crate::tolerance::Tolerance) -> Self {
                self.common = self.common.set_tolerance(v);
                self
            }
            pub fn set_significant_figures(
                mut self, n: u32
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                self.common = self.common.set_significant_figures(n)?;
                Ok(self)
            }
            pub fn set_correct_decimals(
                mut self, n: u32
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                self.common = self.common.set_correct_decimals(n)?;
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                self.common = self.common.set_max_iter(v)?;
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
