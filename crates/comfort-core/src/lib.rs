//! End-to-end computation of thermal comfort indicators from a raw dataset.

pub mod error;
pub mod pipeline;

pub use error::{PipelineError, Result};
pub use pipeline::{ThermalData, compute_indicators, resolve_columns, thermal_data};
