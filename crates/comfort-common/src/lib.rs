//! Shared utilities for the comfort crates.
//!
//! Polars `AnyValue` conversion used when loading tables, plus the numeric
//! and timestamp formatting every exported table shares.

pub mod format;
pub mod polars;

pub use self::format::{DATETIME_FORMAT, format_numeric, format_timestamp};
pub use self::polars::{any_to_f64, any_to_string, parse_f64};
