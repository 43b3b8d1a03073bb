//! Normalization of raw simulation rows into per-zone records.

pub mod records;
pub mod time;

pub use records::{normalize_dataset, operative_temperature};
pub use time::{TimeNormalizer, parse_timestamp};
