//! Contract module containing trait definitions for filtering and decomposition

mod decomposer;
mod smoother;

pub use decomposer::Decomposer;
pub use smoother::Smoother;
