//! Text rendering shared by every exported table.

use chrono::NaiveDateTime;

/// Timestamp layout of exported tables.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a floating-point number with the shortest exact representation.
///
/// Negative zero renders as `0`.
///
/// # Examples
///
/// ```
/// use comfort_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(100.0), "100");
/// assert_eq!(format_numeric(-0.0), "0");
/// ```
pub fn format_numeric(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(DATETIME_FORMAT).to_string()
}
