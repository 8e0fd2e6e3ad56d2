//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::NotFound
            | Self::DemandNotFound
            | Self::StaffRoleNotFound
            | Self::StaffMemberNotFound
            | Self::UserNotFound => StatusCode::NOT_FOUND,

            Self::AlreadyExists | Self::DemandAlreadyCompleted | Self::AssigneeUnavailable => {
                StatusCode::CONFLICT
            }

            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,

            Self::AccountDisabled | Self::StaffRequired | Self::DebugDisabled => {
                StatusCode::FORBIDDEN
            }

            Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError
            | Self::ExportFailed
            | Self::Unknown => StatusCode::INTERNAL_SERVER_ERROR,

            Self::ValidationFailed => StatusCode::BAD_REQUEST,
        }
    }
}
