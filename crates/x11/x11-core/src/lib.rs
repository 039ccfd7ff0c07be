//! X-11 Core
//!
//! Centered moving averages, the 13-term Henderson filter and the
//! multiplicative X-11 decomposition that chains them.

pub mod arithmetic;
mod centered;
pub mod erosion;
pub mod henderson;
pub mod moving_average;
pub mod x11;

// Re-export SPI types for implementations
pub use x11_spi::{
    Decomposer, DecompositionResult, ErrorMode, FilterWeights, Result, Smoother, TimeSeries,
    X11Error, HENDERSON_13,
};

// Re-export main types
pub use erosion::EdgeErosion;
pub use henderson::{henderson, HendersonFilter};
pub use moving_average::{moving_average, CenteredMovingAverage};
pub use x11::{x11, X11Decomposer};
