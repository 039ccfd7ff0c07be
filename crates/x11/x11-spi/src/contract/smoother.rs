//! Trait for centered smoothing filters

use crate::error::Result;
use crate::model::TimeSeries;

/// A centered filter producing a series of the same length as its input.
///
/// Positions the filter cannot center on are left undefined.
pub trait Smoother: Send + Sync {
    /// Name of this filter, e.g. `MA(12)`
    fn name(&self) -> &str;

    /// Number of input points that contribute to one output point
    fn width(&self) -> usize;

    /// Apply the filter
    fn smooth(&self, series: &TimeSeries) -> Result<TimeSeries>;
}
