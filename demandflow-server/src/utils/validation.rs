//! Input validation helpers
//!
//! Text limits match the column sizes the tracker has always used.

use crate::utils::AppError;

/// Demand descriptions
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Staff role names
pub const MAX_ROLE_NAME_LEN: usize = 64;

/// Staff member names
pub const MAX_STAFF_NAME_LEN: usize = 64;

/// Upper bound for table and room counts
pub const MAX_LOCATION_COUNT: i64 = 1000;

/// Trimmed value, or `None` when absent or blank
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Validate that a trimmed string is within the length limit (in characters)
pub fn validate_max_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate an optional table/room count
pub fn validate_count(value: Option<i64>, field: &str) -> Result<(), AppError> {
    if let Some(v) = value
        && !(0..=MAX_LOCATION_COUNT).contains(&v)
    {
        return Err(AppError::validation(format!(
            "{field} must be between 0 and {MAX_LOCATION_COUNT}"
        ))
        .with_detail("field", field));
    }
    Ok(())
}
