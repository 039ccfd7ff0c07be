//! X-11 error types

use thiserror::Error;

/// Errors that can occur while filtering or decomposing a series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum X11Error {
    /// Moving-average window outside `2..=len`
    #[error("Invalid window {window} for series of length {len}: must be between 2 and the series length")]
    InvalidWindow { window: usize, len: usize },

    /// Series too short for the filter or for the chained pipeline
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Multiplicative decomposition requires strictly positive observations
    #[error("Non-positive value {value} at position {position}")]
    NonPositiveValue { position: usize, value: f64 },

    /// Defined values must be finite
    #[error("Non-finite value at position {position}")]
    NonFiniteValue { position: usize },

    /// Index labels must be strictly increasing
    #[error("Index is not strictly increasing at position {position}")]
    UnorderedIndex { position: usize },

    /// Two sequences that must align do not
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Two series of equal length carry different labels
    #[error("Index labels differ at position {position}")]
    IndexMismatch { position: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_window_error_message() {
        let error = X11Error::InvalidWindow { window: 1, len: 24 };
        assert_eq!(
            error.to_string(),
            "Invalid window 1 for series of length 24: must be between 2 and the series length"
        );
    }

    #[test]
    fn test_insufficient_data_error_message() {
        let error = X11Error::InsufficientData {
            required: 13,
            actual: 12,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 13 points, got 12"
        );
    }

    #[test]
    fn test_insufficient_data_error_fields() {
        let error = X11Error::InsufficientData {
            required: 65,
            actual: 36,
        };
        if let X11Error::InsufficientData { required, actual } = error {
            assert_eq!(required, 65);
            assert_eq!(actual, 36);
        } else {
            panic!("Expected InsufficientData variant");
        }
    }

    #[test]
    fn test_non_positive_value_error_message() {
        let error = X11Error::NonPositiveValue {
            position: 4,
            value: -2.5,
        };
        assert_eq!(error.to_string(), "Non-positive value -2.5 at position 4");
    }

    #[test]
    fn test_non_finite_value_error_message() {
        let error = X11Error::NonFiniteValue { position: 7 };
        assert_eq!(error.to_string(), "Non-finite value at position 7");
    }

    #[test]
    fn test_unordered_index_error_message() {
        let error = X11Error::UnorderedIndex { position: 3 };
        assert_eq!(
            error.to_string(),
            "Index is not strictly increasing at position 3"
        );
    }

    #[test]
    fn test_length_mismatch_error_message() {
        let error = X11Error::LengthMismatch {
            expected: 10,
            actual: 9,
        };
        assert_eq!(error.to_string(), "Length mismatch: expected 10, got 9");
    }

    #[test]
    fn test_index_mismatch_error_message() {
        let error = X11Error::IndexMismatch { position: 2 };
        assert_eq!(error.to_string(), "Index labels differ at position 2");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn Error> = Box::new(X11Error::NonFiniteValue { position: 0 });
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<X11Error>();
    }

    #[test]
    fn test_error_downcast() {
        let error: Box<dyn Error + Send + Sync> =
            Box::new(X11Error::InvalidWindow { window: 0, len: 5 });
        let downcasted = error.downcast_ref::<X11Error>();
        assert!(matches!(
            downcasted,
            Some(X11Error::InvalidWindow { window: 0, len: 5 })
        ));
    }
}
