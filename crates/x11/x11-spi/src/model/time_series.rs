//! Labelled series with explicit missing values

use serde::{Deserialize, Serialize};

use crate::error::{Result, X11Error};

/// Ordered sequence of `(label, value)` pairs.
///
/// Labels are strictly increasing `i64` values (unix seconds, period
/// numbers, ...). A value is either a finite `f64` or `None` when it is
/// undefined, e.g. at the edges of a centered filter.
///
/// Positional access ([`TimeSeries::get`]) and label access
/// ([`TimeSeries::value_at`]) are deliberately separate methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    index: Vec<i64>,
    values: Vec<Option<f64>>,
}

impl TimeSeries {
    /// Create a series from an index and its values.
    ///
    /// Fails when the lengths differ, the index is not strictly increasing
    /// or a defined value is not finite.
    pub fn new(index: Vec<i64>, values: Vec<Option<f64>>) -> Result<Self> {
        if index.len() != values.len() {
            return Err(X11Error::LengthMismatch {
                expected: index.len(),
                actual: values.len(),
            });
        }
        if let Some(position) = index.windows(2).position(|w| w[1] <= w[0]) {
            return Err(X11Error::UnorderedIndex {
                position: position + 1,
            });
        }
        if let Some(position) = values
            .iter()
            .position(|v| v.is_some_and(|v| !v.is_finite()))
        {
            return Err(X11Error::NonFiniteValue { position });
        }
        Ok(Self { index, values })
    }

    /// Create a series from `(label, value)` pairs in temporal order.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i64, Option<f64>)>,
    {
        let (index, values) = pairs.into_iter().unzip();
        Self::new(index, values)
    }

    /// Create a series labelled `0..n` from raw observations.
    ///
    /// `NaN` is read as an undefined value; infinities are rejected.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let index = (0..values.len() as i64).collect();
        let values = values
            .iter()
            .map(|&v| if v.is_nan() { None } else { Some(v) })
            .collect();
        Self::new(index, values)
    }

    /// New series on the same index with different values.
    pub fn with_values(&self, values: Vec<Option<f64>>) -> Result<Self> {
        Self::new(self.index.clone(), values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Index labels
    pub fn index(&self) -> &[i64] {
        &self.index
    }

    /// Values in positional order
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Value at a position. `None` when out of range or undefined.
    pub fn get(&self, position: usize) -> Option<f64> {
        self.values.get(position).copied().flatten()
    }

    /// Value at an index label. `None` when the label is absent or undefined.
    pub fn value_at(&self, label: i64) -> Option<f64> {
        self.position_of(label).and_then(|p| self.get(p))
    }

    /// Position of an index label
    pub fn position_of(&self, label: i64) -> Option<usize> {
        self.index.binary_search(&label).ok()
    }

    /// Iterate over `(label, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (i64, Option<f64>)> + '_ {
        self.index.iter().copied().zip(self.values.iter().copied())
    }

    /// Length of the run of undefined values at the start
    pub fn leading_undefined(&self) -> usize {
        self.values.iter().take_while(|v| v.is_none()).count()
    }

    /// Length of the run of undefined values at the end
    pub fn trailing_undefined(&self) -> usize {
        self.values.iter().rev().take_while(|v| v.is_none()).count()
    }

    /// Number of defined values
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Defined values together with their positions
    pub fn defined(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monthly() -> TimeSeries {
        TimeSeries::from_pairs(vec![
            (1_704_067_200, Some(10.0)),
            (1_706_745_600, None),
            (1_709_251_200, Some(12.0)),
            (1_711_929_600, Some(13.0)),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = TimeSeries::new(vec![1, 2, 3], vec![Some(1.0), Some(2.0)]).unwrap_err();
        assert_eq!(
            err,
            X11Error::LengthMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_new_rejects_unordered_index() {
        let err = TimeSeries::new(vec![1, 3, 3], vec![Some(1.0); 3]).unwrap_err();
        assert_eq!(err, X11Error::UnorderedIndex { position: 2 });
    }

    #[test]
    fn test_new_rejects_non_finite() {
        let err = TimeSeries::new(vec![1, 2], vec![Some(1.0), Some(f64::INFINITY)]).unwrap_err();
        assert_eq!(err, X11Error::NonFiniteValue { position: 1 });
    }

    #[test]
    fn test_from_values_maps_nan_to_undefined() {
        let ts = TimeSeries::from_values(&[f64::NAN, 2.0, 3.0]).unwrap();
        assert_eq!(ts.values(), &[None, Some(2.0), Some(3.0)]);
        assert_eq!(ts.index(), &[0, 1, 2]);
    }

    #[test]
    fn test_positional_and_label_access_are_distinct() {
        let ts = monthly();
        assert_eq!(ts.get(2), Some(12.0));
        assert_eq!(ts.value_at(1_709_251_200), Some(12.0));
        // a label that happens to equal a valid position is not a position
        assert_eq!(ts.value_at(2), None);
        assert_eq!(ts.get(1), None);
        assert_eq!(ts.get(99), None);
    }

    #[test]
    fn test_iter_pairs() {
        let ts = monthly();
        let pairs: Vec<_> = ts.iter().collect();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[1], (1_706_745_600, None));
        assert_eq!(pairs[3], (1_711_929_600, Some(13.0)));
    }

    #[test]
    fn test_position_of() {
        let ts = monthly();
        assert_eq!(ts.position_of(1_711_929_600), Some(3));
        assert_eq!(ts.position_of(0), None);
    }

    #[test]
    fn test_undefined_runs() {
        let ts = TimeSeries::from_values(&[f64::NAN, f64::NAN, 1.0, f64::NAN, 2.0, f64::NAN]).unwrap();
        assert_eq!(ts.leading_undefined(), 2);
        assert_eq!(ts.trailing_undefined(), 1);
        assert_eq!(ts.defined_count(), 2);
        assert_eq!(ts.defined().collect::<Vec<_>>(), vec![(2, 1.0), (4, 2.0)]);
    }

    #[test]
    fn test_all_undefined_runs_cover_whole_series() {
        let ts = TimeSeries::from_values(&[f64::NAN; 4]).unwrap();
        assert_eq!(ts.leading_undefined(), 4);
        assert_eq!(ts.trailing_undefined(), 4);
    }

    #[test]
    fn test_with_values_keeps_index() {
        let ts = monthly();
        let other = ts.with_values(vec![None; 4]).unwrap();
        assert_eq!(other.index(), ts.index());
        assert_eq!(other.defined_count(), 0);
        assert!(ts.with_values(vec![None; 3]).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let ts = monthly();
        let json = serde_json::to_string(&ts).unwrap();
        let back: TimeSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}
