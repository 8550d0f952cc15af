// Common types shared across the application

pub mod errors;
pub mod types;

pub use errors::AppError;
pub use types::*;
