//! Trait for time series decomposition

use crate::error::Result;
use crate::model::{DecompositionResult, TimeSeries};

/// Trait for multiplicative seasonal decomposition
pub trait Decomposer: Send + Sync {
    /// Decompose a series into seasonal, trend and error components
    fn decompose(&self, series: &TimeSeries) -> Result<DecompositionResult>;
}
