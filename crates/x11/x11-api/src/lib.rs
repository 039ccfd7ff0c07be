//! X-11 Consumer API
//!
//! Configuration and builder APIs for X-11 decomposition.
//!
//! This crate provides:
//! - Serializable configuration for the decomposer
//! - A builder for assembling that configuration
//! - Re-exports from SPI and core for convenience

// Re-export from core
pub use x11_core::{
    arithmetic, erosion, henderson, moving_average, x11, CenteredMovingAverage, EdgeErosion,
    HendersonFilter, X11Decomposer,
};

// Re-export traits and models from SPI
pub use x11_spi::{
    Decomposer, DecompositionResult, ErrorMode, FilterWeights, Result, Smoother, TimeSeries,
    X11Error, HENDERSON_13,
};

use serde::{Deserialize, Serialize};

/// Configuration for X-11 decomposition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct X11Config {
    /// How the error component is derived
    pub error_mode: ErrorMode,
    /// Reject zero or negative observations before decomposing
    pub require_positive: bool,
}

impl Default for X11Config {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Difference,
            require_positive: true,
        }
    }
}

impl X11Config {
    /// Start building a configuration.
    pub fn builder() -> X11ConfigBuilder {
        X11ConfigBuilder::new()
    }

    /// Decomposer configured from these settings.
    pub fn decomposer(&self) -> X11Decomposer {
        X11Decomposer::new()
            .with_error_mode(self.error_mode)
            .with_require_positive(self.require_positive)
    }
}

/// Builder for X11Config.
#[derive(Debug, Default)]
pub struct X11ConfigBuilder {
    error_mode: Option<ErrorMode>,
    require_positive: Option<bool>,
}

impl X11ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error mode.
    pub fn error_mode(mut self, error_mode: ErrorMode) -> Self {
        self.error_mode = Some(error_mode);
        self
    }

    /// Set whether non-positive observations are rejected.
    pub fn require_positive(mut self, require_positive: bool) -> Self {
        self.require_positive = Some(require_positive);
        self
    }

    /// Build the configuration, filling unset fields with defaults.
    pub fn build(self) -> X11Config {
        let defaults = X11Config::default();
        X11Config {
            error_mode: self.error_mode.unwrap_or(defaults.error_mode),
            require_positive: self.require_positive.unwrap_or(defaults.require_positive),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{X11Config, X11ConfigBuilder};
    pub use x11_core::{
        henderson, moving_average, x11, CenteredMovingAverage, EdgeErosion, HendersonFilter,
        X11Decomposer,
    };
    pub use x11_spi::{
        Decomposer, DecompositionResult, ErrorMode, FilterWeights, Result, Smoother, TimeSeries,
        X11Error,
    };
}
