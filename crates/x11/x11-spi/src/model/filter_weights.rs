//! Convolution weights for centered filters

use serde::{Deserialize, Serialize};

/// 13-term Henderson trend filter weights. The center weight is index 6.
pub const HENDERSON_13: [f64; 13] = [
    -0.019, -0.028, 0.0, 0.066, 0.147, 0.214, 0.240, 0.214, 0.147, 0.066, 0.0, -0.028, -0.019,
];

/// Ordered weights applied across a filter window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterWeights(Vec<f64>);

impl FilterWeights {
    /// Arbitrary weight vector
    pub fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    /// `n` equal weights of `1/n`
    pub fn uniform(n: usize) -> Self {
        Self(vec![1.0 / n as f64; n])
    }

    /// The fixed 13-term Henderson weights
    pub fn henderson() -> Self {
        Self(HENDERSON_13.to_vec())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Weighted sum over a window, accumulated left to right.
    ///
    /// Undefined as soon as any value in the window is undefined.
    pub fn apply(&self, window: &[Option<f64>]) -> Option<f64> {
        window
            .iter()
            .zip(&self.0)
            .try_fold(0.0, |acc, (value, weight)| value.map(|v| acc + v * weight))
    }
}
