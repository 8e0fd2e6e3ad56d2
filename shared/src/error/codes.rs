//! Unified error codes for the demand tracker
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Demand errors
//! - 8xxx: Staff errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a plain `u16` so clients can switch on the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is disabled
    AccountDisabled = 1007,

    // ==================== 2xxx: Permission ====================
    /// Staff privilege required
    StaffRequired = 2002,
    /// Endpoint disabled outside debug mode
    DebugDisabled = 2003,

    // ==================== 4xxx: Demand ====================
    /// Demand not found
    DemandNotFound = 4001,
    /// Demand is already completed
    DemandAlreadyCompleted = 4002,
    /// Assignee is already working an open demand
    AssigneeUnavailable = 4004,

    // ==================== 8xxx: Staff ====================
    /// Staff role not found
    StaffRoleNotFound = 8001,
    /// Staff member not found
    StaffMemberNotFound = 8002,
    /// User not found
    UserNotFound = 8003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
    /// Spreadsheet export failed
    ExportFailed = 9004,
}

impl ErrorCode {
    /// Numeric value of the code
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",

            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid username or password",
            Self::TokenExpired => "Token expired",
            Self::TokenInvalid => "Invalid token",
            Self::AccountDisabled => "Account has been disabled",

            Self::StaffRequired => "Only staff can perform this action",
            Self::DebugDisabled => "Disabled",

            Self::DemandNotFound => "Demand not found",
            Self::DemandAlreadyCompleted => "Demand is already completed",
            Self::AssigneeUnavailable => "Assignee is already assigned to an open demand",

            Self::StaffRoleNotFound => "Staff role not found",
            Self::StaffMemberNotFound => "Staff member not found",
            Self::UserNotFound => "User not found",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::ConfigError => "Configuration error",
            Self::ExportFailed => "Export failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Returned when a number does not name any [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::TokenExpired,
            1004 => Self::TokenInvalid,
            1007 => Self::AccountDisabled,
            2002 => Self::StaffRequired,
            2003 => Self::DebugDisabled,
            4001 => Self::DemandNotFound,
            4002 => Self::DemandAlreadyCompleted,
            4004 => Self::AssigneeUnavailable,
            8001 => Self::StaffRoleNotFound,
            8002 => Self::StaffMemberNotFound,
            8003 => Self::UserNotFound,
            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::ConfigError,
            9004 => Self::ExportFailed,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}
