//! Error module containing error types and result aliases

mod x11_error;

pub use x11_error::X11Error;

/// Result type for decomposition operations
pub type Result<T> = std::result::Result<T, X11Error>;
