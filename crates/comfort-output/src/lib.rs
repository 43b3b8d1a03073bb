//! Export of computed indicators.
//!
//! - **Wide**: one table per indicator and simulation, `<INDICATOR>_<simulation>.csv`
//! - **Ultra-long**: every indicator of every simulation in one five-column table
//! - **Thermal summary**: the normalized per-zone inputs, semicolon separated
//!
//! Only CSV is written; requesting `xlsx` fails with a remediation message.

mod common;
pub mod error;
pub mod format;
pub mod thermal;
pub mod ultra;
pub mod wide;

pub use error::{OutputError, Result};
pub use format::ExportFormat;
pub use thermal::{
    ColumnCoverage, THERMAL_COLUMNS, THERMAL_DELIMITER, ThermalColumn, render_thermal_table,
    thermal_coverage, write_thermal_summary, write_thermal_table,
};
pub use ultra::{ULTRA_LONG_HEADER, render_ultra_long, write_ultra_long, write_ultra_long_table};
pub use wide::{
    DATETIME_HEADER, ZONE_HEADER, wide_file_name, write_wide_outputs, write_wide_table,
};
