//! Centered simple moving average.

use tracing::trace;
use x11_spi::{FilterWeights, Result, Smoother, TimeSeries, X11Error};

use crate::centered::centered;

/// Unweighted centered moving average over `window` points.
///
/// Odd windows are symmetric about the output position. Even windows have
/// no single center and lean one point to the left; the X-11 chain follows
/// every even average with a 2-term average to re-center it.
#[derive(Debug, Clone)]
pub struct CenteredMovingAverage {
    window: usize,
    name: String,
}

impl CenteredMovingAverage {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            name: format!("MA({})", window),
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Calculate the moving average.
    ///
    /// Fails with [`X11Error::InvalidWindow`] unless `2 <= window <= len`.
    pub fn calculate(&self, series: &TimeSeries) -> Result<TimeSeries> {
        let n = self.window;
        if n < 2 || n > series.len() {
            return Err(X11Error::InvalidWindow {
                window: n,
                len: series.len(),
            });
        }

        let smoothed = if n % 2 == 0 {
            let weights = FilterWeights::uniform(n);
            centered(series, n, |window| weights.apply(window))?
        } else {
            centered(series, n, |window| {
                window
                    .iter()
                    .try_fold(0.0, |acc, v| v.map(|v| acc + v))
                    .map(|sum| sum / n as f64)
            })?
        };

        trace!(
            filter = %self.name,
            defined = smoothed.defined_count(),
            "moving average applied"
        );
        Ok(smoothed)
    }
}

impl Smoother for CenteredMovingAverage {
    fn name(&self) -> &str {
        &self.name
    }

    fn width(&self) -> usize {
        self.window
    }

    fn smooth(&self, series: &TimeSeries) -> Result<TimeSeries> {
        self.calculate(series)
    }
}

/// Centered moving average of `series` over `window` points
pub fn moving_average(series: &TimeSeries, window: usize) -> Result<TimeSeries> {
    CenteredMovingAverage::new(window).calculate(series)
}
