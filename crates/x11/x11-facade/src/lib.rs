//! X-11 Facade
//!
//! High-level API for X-11 multiplicative seasonal decomposition.
//! Re-exports all public types from the x11 stack for convenient usage.
//!
//! ```
//! use x11_facade::{x11, TimeSeries};
//!
//! let values: Vec<f64> = (0..96)
//!     .map(|t| 100.0 + t as f64 + 8.0 * (t as f64 * std::f64::consts::PI / 6.0).sin())
//!     .collect();
//! let series = TimeSeries::from_values(&values)?;
//! let result = x11(&series)?;
//! assert_eq!(result.trend.len(), 96);
//! # Ok::<(), x11_facade::X11Error>(())
//! ```

// Re-export everything from API (which includes SPI and core)
pub use x11_api::*;

// Explicit re-exports for documentation
pub use x11_api::prelude;

// Re-export core modules for direct access
pub use x11_core::{arithmetic, erosion};

// Re-export SPI traits
pub use x11_spi::{Decomposer, Smoother};
