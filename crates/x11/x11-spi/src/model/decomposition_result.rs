//! Decomposition result model

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::model::TimeSeries;

/// Result of a multiplicative decomposition.
///
/// Every component shares the index of `original`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionResult {
    /// Input series
    pub original: TimeSeries,
    /// Final seasonally adjusted series
    pub adjusted: TimeSeries,
    /// Seasonal factors
    pub seasonal: TimeSeries,
    /// Trend-cycle
    pub trend: TimeSeries,
    /// Irregular component
    pub error: TimeSeries,
}

impl DecompositionResult {
    /// From the first to one past the last position where both seasonal and
    /// trend are defined.
    ///
    /// Gaps inside the input widen through the filters and stay undefined
    /// inside this range.
    pub fn defined_range(&self) -> Option<Range<usize>> {
        let start = self
            .seasonal
            .values()
            .iter()
            .zip(self.trend.values())
            .position(|(s, t)| s.is_some() && t.is_some())?;
        let len = self.seasonal.len();
        let end = len
            - self
                .seasonal
                .values()
                .iter()
                .zip(self.trend.values())
                .rev()
                .position(|(s, t)| s.is_some() && t.is_some())?;
        Some(start..end)
    }

    /// `Seasonal * Trend`, undefined wherever either factor is.
    pub fn reconstruct(&self) -> Vec<Option<f64>> {
        self.seasonal
            .values()
            .iter()
            .zip(self.trend.values())
            .map(|(s, t)| Some((*s)? * (*t)?))
            .collect()
    }
}
