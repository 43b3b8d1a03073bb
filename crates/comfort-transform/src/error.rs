use thiserror::Error;

/// Errors raised while interpreting a date range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("invalid date '{value}': expected MM/DD or YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("date '{value}' does not exist in {year}")]
    NonexistentDate { value: String, year: i32 },

    #[error("start date {start} is after end date {end}")]
    Inverted { start: String, end: String },
}

pub type Result<T> = std::result::Result<T, RangeError>;
