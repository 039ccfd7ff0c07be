//! X-11 Service Provider Interface
//!
//! Defines the series model, filter weights, decomposition result,
//! error types and the traits implemented by smoothers and decomposers.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Decomposer, Smoother};
pub use error::{Result, X11Error};
pub use model::{DecompositionResult, ErrorMode, FilterWeights, TimeSeries, HENDERSON_13};
