//! Elementwise operations between aligned series.
//!
//! Results are undefined wherever either operand is undefined. Division by
//! zero is undefined as well, as is any result that overflows.

use tracing::trace;
use x11_spi::{Result, TimeSeries, X11Error};

fn zip_with<F>(name: &str, lhs: &TimeSeries, rhs: &TimeSeries, op: F) -> Result<TimeSeries>
where
    F: Fn(f64, f64) -> Option<f64>,
{
    if lhs.len() != rhs.len() {
        return Err(X11Error::LengthMismatch {
            expected: lhs.len(),
            actual: rhs.len(),
        });
    }
    if let Some(position) = lhs
        .index()
        .iter()
        .zip(rhs.index())
        .position(|(a, b)| a != b)
    {
        return Err(X11Error::IndexMismatch { position });
    }

    let values = lhs
        .values()
        .iter()
        .zip(rhs.values())
        .map(|(a, b)| op((*a)?, (*b)?).filter(|v| v.is_finite()))
        .collect();
    let combined = lhs.with_values(values)?;

    trace!(
        op = name,
        defined = combined.defined_count(),
        "elementwise step applied"
    );
    Ok(combined)
}

/// `lhs / rhs`
pub fn divide(lhs: &TimeSeries, rhs: &TimeSeries) -> Result<TimeSeries> {
    zip_with("divide", lhs, rhs, |a, b| if b == 0.0 { None } else { Some(a / b) })
}

/// `lhs * rhs`
pub fn multiply(lhs: &TimeSeries, rhs: &TimeSeries) -> Result<TimeSeries> {
    zip_with("multiply", lhs, rhs, |a, b| Some(a * b))
}

/// `lhs - rhs`
pub fn subtract(lhs: &TimeSeries, rhs: &TimeSeries) -> Result<TimeSeries> {
    zip_with("subtract", lhs, rhs, |a, b| Some(a - b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> TimeSeries {
        TimeSeries::from_values(values).unwrap()
    }

    #[test]
    fn test_divide() {
        let out = divide(&series(&[10.0, 9.0, f64::NAN]), &series(&[2.0, 3.0, 1.0])).unwrap();
        assert_eq!(out.values(), &[Some(5.0), Some(3.0), None]);
    }

    #[test]
    fn test_divide_by_zero_is_undefined() {
        let out = divide(&series(&[1.0, 0.0]), &series(&[0.0, 0.0])).unwrap();
        assert_eq!(out.values(), &[None, None]);
    }

    #[test]
    fn test_multiply_and_subtract() {
        let a = series(&[2.0, f64::NAN, 4.0]);
        let b = series(&[3.0, 1.0, 0.5]);
        assert_eq!(multiply(&a, &b).unwrap().values(), &[Some(6.0), None, Some(2.0)]);
        assert_eq!(subtract(&a, &b).unwrap().values(), &[Some(-1.0), None, Some(3.5)]);
    }

    #[test]
    fn test_overflow_is_undefined() {
        let a = series(&[1e200, 2.0]);
        let b = series(&[1e200, 1e-320]);
        assert_eq!(multiply(&a, &b).unwrap().values(), &[None, Some(2.0 * 1e-320)]);
        assert_eq!(divide(&a, &b).unwrap().get(1), None);
        assert_eq!(subtract(&series(&[-f64::MAX]), &series(&[f64::MAX])).unwrap().get(0), None);
    }

    #[test]
    fn test_length_mismatch() {
        let err = subtract(&series(&[1.0, 2.0]), &series(&[1.0])).unwrap_err();
        assert_eq!(
            err,
            X11Error::LengthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_index_mismatch() {
        let a = series(&[1.0, 2.0, 3.0]);
        let b = TimeSeries::from_pairs(vec![(0, Some(1.0)), (1, Some(1.0)), (5, Some(1.0))]).unwrap();
        assert_eq!(
            divide(&a, &b).unwrap_err(),
            X11Error::IndexMismatch { position: 2 }
        );
    }

    #[test]
    fn test_result_keeps_left_index() {
        let a = TimeSeries::from_pairs(vec![(100, Some(4.0)), (200, Some(8.0))]).unwrap();
        let out = divide(&a, &a).unwrap();
        assert_eq!(out.index(), &[100, 200]);
        assert_eq!(out.value_at(200), Some(1.0));
    }
}
