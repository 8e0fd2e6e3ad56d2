//! Utilities: logging setup, validation helpers, time parsing

pub mod logger;
pub mod time;
pub mod validation;

pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
