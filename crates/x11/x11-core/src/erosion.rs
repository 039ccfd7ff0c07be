//! Edge erosion bookkeeping for chained centered filters.
//!
//! Every centered filter leaves undefined values at both ends of its
//! output, and every filter applied to an already eroded series eats
//! further inward. [`EdgeErosion`] follows the undefined run lengths through
//! a chain without touching the data. It only sees the edge runs, so it is
//! exact for gap-free input. Interior gaps spread through each filter and can
//! join an edge run; [`Coverage`] follows every position and catches that.

use x11_spi::{Result, TimeSeries};

use crate::{arithmetic, henderson, moving_average, HendersonFilter};

/// Lengths of the undefined runs at each end of a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeErosion {
    pub leading: usize,
    pub trailing: usize,
}

impl EdgeErosion {
    pub fn new(leading: usize, trailing: usize) -> Self {
        Self { leading, trailing }
    }

    /// Erosion already present in `series`
    pub fn of(series: &TimeSeries) -> Self {
        Self {
            leading: series.leading_undefined(),
            trailing: series.trailing_undefined(),
        }
    }

    /// Erosion after a centered filter of `width` points.
    ///
    /// The leading run skipped by the filter also widens the trailing edge.
    pub fn after_filter(self, width: usize) -> Self {
        let center = width / 2 + self.leading;
        Self {
            leading: center,
            trailing: center.max(self.trailing + (width - 1) / 2),
        }
    }

    /// Erosion of an elementwise combination of two series
    pub fn combine(self, other: Self) -> Self {
        Self {
            leading: self.leading.max(other.leading),
            trailing: self.trailing.max(other.trailing),
        }
    }

    /// Shortest series that keeps at least one defined value
    pub fn required_len(&self) -> usize {
        self.leading + self.trailing + 1
    }

    /// Number of defined positions left in a series of `len` points
    pub fn defined_len(&self, len: usize) -> usize {
        len.saturating_sub(self.leading + self.trailing)
    }
}

/// Which positions of a series are defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Coverage(Vec<bool>);

impl Coverage {
    pub(crate) fn of(series: &TimeSeries) -> Self {
        Self(series.values().iter().map(Option::is_some).collect())
    }

    /// Same window placement as the numeric filters: a position is defined
    /// when it lies inside the centered range and its whole window is.
    fn after_filter(&self, width: usize) -> Self {
        let len = self.0.len();
        let center = width / 2 + self.0.iter().take_while(|d| !**d).count();
        let last = len.saturating_sub(center);
        Self(
            (0..len)
                .map(|i| {
                    if i < center || i >= last {
                        return false;
                    }
                    let start = i - width / 2;
                    self.0[start..start + width].iter().all(|&d| d)
                })
                .collect(),
        )
    }

    pub(crate) fn combine(&self, other: &Self) -> Self {
        Self(self.0.iter().zip(&other.0).map(|(a, b)| *a && *b).collect())
    }

    /// Undefined runs at each end. Both equal the length when nothing is defined.
    pub(crate) fn erosion(&self) -> EdgeErosion {
        EdgeErosion {
            leading: self.0.iter().take_while(|d| !**d).count(),
            trailing: self.0.iter().rev().take_while(|d| !**d).count(),
        }
    }
}

/// Operations the X-11 step chain is written against.
///
/// Implemented for [`TimeSeries`] to compute the decomposition, and for
/// [`EdgeErosion`] and [`Coverage`] to predict its undefined positions up
/// front.
pub(crate) trait Chain: Sized {
    fn moving_average(&self, window: usize) -> Result<Self>;
    fn henderson(&self) -> Result<Self>;
    fn divide(&self, rhs: &Self) -> Result<Self>;
    fn multiply(&self, rhs: &Self) -> Result<Self>;
    fn subtract(&self, rhs: &Self) -> Result<Self>;
}

impl Chain for TimeSeries {
    fn moving_average(&self, window: usize) -> Result<Self> {
        moving_average(self, window)
    }

    fn henderson(&self) -> Result<Self> {
        henderson(self)
    }

    fn divide(&self, rhs: &Self) -> Result<Self> {
        arithmetic::divide(self, rhs)
    }

    fn multiply(&self, rhs: &Self) -> Result<Self> {
        arithmetic::multiply(self, rhs)
    }

    fn subtract(&self, rhs: &Self) -> Result<Self> {
        arithmetic::subtract(self, rhs)
    }
}

impl Chain for EdgeErosion {
    fn moving_average(&self, window: usize) -> Result<Self> {
        Ok(self.after_filter(window))
    }

    fn henderson(&self) -> Result<Self> {
        Ok(self.after_filter(HendersonFilter::WIDTH))
    }

    fn divide(&self, rhs: &Self) -> Result<Self> {
        Ok(self.combine(*rhs))
    }

    fn multiply(&self, rhs: &Self) -> Result<Self> {
        Ok(self.combine(*rhs))
    }

    fn subtract(&self, rhs: &Self) -> Result<Self> {
        Ok(self.combine(*rhs))
    }
}

impl Chain for Coverage {
    fn moving_average(&self, window: usize) -> Result<Self> {
        Ok(self.after_filter(window))
    }

    fn henderson(&self) -> Result<Self> {
        Ok(self.after_filter(HendersonFilter::WIDTH))
    }

    fn divide(&self, rhs: &Self) -> Result<Self> {
        Ok(self.combine(rhs))
    }

    fn multiply(&self, rhs: &Self) -> Result<Self> {
        Ok(self.combine(rhs))
    }

    fn subtract(&self, rhs: &Self) -> Result<Self> {
        Ok(self.combine(rhs))
    }
}
