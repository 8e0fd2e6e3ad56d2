//! Hotel demand tracker server
//!
//! Staff log guest demands (food, cleaning, maintenance, billing, room
//! service), assign them to staff members and move them through
//! Pending -> In Progress -> Completed.
//!
//! ```text
//! demandflow-server/src/
//! ├── core/      # config, state, server
//! ├── auth/      # JWT, password hashing, middleware
//! ├── db/        # pool, migrations, repositories
//! ├── intake/    # demand validation rules
//! ├── reports/   # elapsed time, xlsx export
//! ├── api/       # HTTP handlers
//! └── utils/     # logger, validation, time
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod intake;
pub mod reports;
pub mod routes;
pub mod seed;
pub mod utils;

pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
