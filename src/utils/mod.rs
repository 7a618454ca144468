// Utility functions
pub mod error;
pub mod password;

pub use error::*;
pub use password::*;
