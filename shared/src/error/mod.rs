//! Unified error model
//!
//! Numeric error codes plus a structured application error type that
//! carries a human-readable message and optional details.

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
