//! Simulation timestamp labels to absolute date-times.
//!
//! Labels look like ` 07/21  13:00:00`: month/day and a time of day, with
//! no year. The hour `24` marks the end of the day and rolls over to
//! midnight of the next day.

use chrono::{NaiveDate, NaiveDateTime};

const END_OF_DAY_HOUR: u32 = 24;

/// Attaches a calendar year to month/day timestamp labels.
#[derive(Debug, Clone, Copy)]
pub struct TimeNormalizer {
    year: i32,
}

impl TimeNormalizer {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn parse(&self, label: &str) -> Option<NaiveDateTime> {
        parse_timestamp(label, self.year)
    }

    /// Parses every label; malformed labels map to `None`.
    pub fn normalize<S: AsRef<str>>(&self, labels: &[S]) -> Vec<Option<NaiveDateTime>> {
        labels.iter().map(|label| self.parse(label.as_ref())).collect()
    }
}

/// Parses `MM/DD HH:MM[:SS]` in `year`.
///
/// Surrounding and repeated whitespace is ignored. `24:00:00` becomes
/// `00:00:00` of the following day; the year is attached first, so
/// `12/31 24:00:00` lands on January 1 of `year + 1`.
///
/// ```
/// use chrono::NaiveDate;
/// use comfort_normalization::parse_timestamp;
///
/// let parsed = parse_timestamp(" 12/31  24:00:00", 2020).unwrap();
/// assert_eq!(parsed, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap());
/// assert!(parse_timestamp("not a date", 2020).is_none());
/// ```
pub fn parse_timestamp(label: &str, year: i32) -> Option<NaiveDateTime> {
    let mut parts = label.split_whitespace();
    let date_part = parts.next()?;
    let time_part = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let (month, day) = date_part.split_once('/')?;
    let date = NaiveDate::from_ymd_opt(year, parse_field(month)?, parse_field(day)?)?;

    let mut fields = time_part.split(':');
    let hour = parse_field(fields.next()?)?;
    let minute = parse_field(fields.next()?)?;
    let second = match fields.next() {
        Some(field) => parse_field(field)?,
        None => 0,
    };
    if fields.next().is_some() {
        return None;
    }

    if hour == END_OF_DAY_HOUR {
        if minute != 0 || second != 0 {
            return None;
        }
        return date.succ_opt()?.and_hms_opt(0, 0, 0);
    }
    date.and_hms_opt(hour, minute, second)
}

fn parse_field(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
