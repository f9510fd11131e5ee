//! Date/time utilities for MOREDENT.
//!
//! Posts and reservations store their timestamps as plain UTC strings so
//! the JSON stores stay human-readable and sort lexicographically.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Storage format for post timestamps (UTC, second precision).
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Storage format for reservation timestamps (UTC, minute precision).
pub const MINUTE_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Current UTC time as a second-precision storage stamp.
pub fn now_stamp() -> String {
    Utc::now().format(STAMP_FORMAT).to_string()
}

/// Current UTC time as a minute-precision storage stamp.
pub fn now_minute_stamp() -> String {
    Utc::now().format(MINUTE_STAMP_FORMAT).to_string()
}

/// Format a stored stamp for display in the given timezone.
///
/// Accepts the storage format or RFC3339. Returns the input unchanged when
/// the stamp or the timezone cannot be parsed.
pub fn format_display(stamp: &str, timezone: &str, format: &str) -> String {
    let tz: Tz = match timezone.parse() {
        Ok(tz) => tz,
        Err(_) => return stamp.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(stamp) {
        return dt.with_timezone(&tz).format(format).to_string();
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT) {
        return naive.and_utc().with_timezone(&tz).format(format).to_string();
    }

    stamp.to_string()
}

/// Convert a stored stamp to RFC3339 for JSON API responses.
///
/// Stored stamps are UTC, so this just reshapes the string and appends
/// `Z`.
pub fn to_rfc3339(stamp: &str) -> String {
    format!("{}Z", stamp.replace(' ', "T"))
}
