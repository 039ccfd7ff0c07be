//! Shared edge handling for centered filters

use x11_spi::{Result, TimeSeries};

/// Slide a window of `width` points across `series`, reducing each window
/// to the output value at its center.
///
/// The leading run of undefined input is skipped. With
/// `center = width / 2 + leading_undefined`, positions `[0, center)` and
/// `[len - center, len)` stay undefined. For even widths the window for
/// position `i` is `[i - width/2, i + width/2)`.
///
/// A window that overflows to a non-finite value is undefined.
pub(crate) fn centered<F>(series: &TimeSeries, width: usize, reduce: F) -> Result<TimeSeries>
where
    F: Fn(&[Option<f64>]) -> Option<f64>,
{
    let len = series.len();
    let center = width / 2 + series.leading_undefined();
    let last = len.saturating_sub(center);
    let values = series.values();

    let smoothed = (0..len)
        .map(|i| {
            if i < center || i >= last {
                return None;
            }
            let start = i - width / 2;
            reduce(&values[start..start + width]).filter(|v| v.is_finite())
        })
        .collect();

    series.with_values(smoothed)
}
