//! Irregular component variants

use serde::{Deserialize, Serialize};

/// How the error (irregular) component is derived from the final passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMode {
    /// `X - Seasonal`. Mixes units with the multiplicative factors but is
    /// kept as the default for reproducibility.
    #[default]
    Difference,
    /// `X / (Seasonal * Trend)`, a multiplicative irregular near 1.0 so that
    /// the three components multiply back to `X`.
    Ratio,
    /// `X - SeasonallyAdjusted`.
    AdjustedDifference,
}
