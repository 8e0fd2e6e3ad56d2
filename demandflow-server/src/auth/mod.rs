//! Authentication and staff gating
//!
//! - [`JwtService`] - token issue/validation
//! - [`CurrentUser`] - authenticated actor
//! - [`require_auth`] - login-required middleware
//! - [`require_staff`] - staff-only middleware factory

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{StaffGate, require_auth, require_staff};
