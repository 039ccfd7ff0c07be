//! 13-term Henderson trend filter.
//!
//! A fixed-weight centered average that follows local cubic trends closely
//! while suppressing irregular noise. Edge handling matches
//! [`CenteredMovingAverage`](crate::CenteredMovingAverage).

use tracing::trace;
use x11_spi::{FilterWeights, Result, Smoother, TimeSeries, X11Error};

use crate::centered::centered;

/// Henderson filter with the published 13-term weights.
#[derive(Debug, Clone)]
pub struct HendersonFilter {
    weights: FilterWeights,
}

impl HendersonFilter {
    pub const WIDTH: usize = 13;

    pub fn new() -> Self {
        Self {
            weights: FilterWeights::henderson(),
        }
    }

    pub fn weights(&self) -> &FilterWeights {
        &self.weights
    }

    /// Apply the filter. Needs at least 13 points.
    pub fn calculate(&self, series: &TimeSeries) -> Result<TimeSeries> {
        if series.len() < Self::WIDTH {
            return Err(X11Error::InsufficientData {
                required: Self::WIDTH,
                actual: series.len(),
            });
        }

        let smoothed = centered(series, Self::WIDTH, |window| self.weights.apply(window))?;
        trace!(defined = smoothed.defined_count(), "henderson filter applied");
        Ok(smoothed)
    }
}

impl Default for HendersonFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Smoother for HendersonFilter {
    fn name(&self) -> &str {
        "HSA(13)"
    }

    fn width(&self) -> usize {
        Self::WIDTH
    }

    fn smooth(&self, series: &TimeSeries) -> Result<TimeSeries> {
        self.calculate(series)
    }
}

/// Henderson-smoothed copy of `series`
pub fn henderson(series: &TimeSeries) -> Result<TimeSeries> {
    HendersonFilter::new().calculate(series)
}
