//! Model module containing data structures

mod decomposition_result;
mod error_mode;
mod filter_weights;
mod time_series;

pub use decomposition_result::DecompositionResult;
pub use error_mode::ErrorMode;
pub use filter_weights::{FilterWeights, HENDERSON_13};
pub use time_series::TimeSeries;
