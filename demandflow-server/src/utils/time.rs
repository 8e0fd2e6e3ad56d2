//! Time helpers

use chrono::{DateTime, NaiveDateTime};
use shared::util::millis_to_datetime;

/// Parse a client timestamp into epoch millis (UTC)
///
/// Accepts RFC 3339 and the `datetime-local` forms `YYYY-MM-DDTHH:MM` and
/// `YYYY-MM-DDTHH:MM:SS`. Values without an offset are taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc().timestamp_millis())
}

/// Format epoch millis as `YYYY-MM-DD HH:MM` (UTC)
pub fn format_minute(millis: i64) -> String {
    millis_to_datetime(millis).format("%Y-%m-%d %H:%M").to_string()
}
