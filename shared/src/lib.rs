//! Shared types for the hotel demand tracker
//!
//! Domain models, request/response DTOs and the unified error system used by
//! the server and by anything that talks to it.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
