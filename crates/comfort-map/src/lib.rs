//! Column resolution for simulation output.
//!
//! Maps the variable roles the indicators need onto the raw column names of
//! a dataset, and offers header-level discovery of zones and variables.

pub mod catalog;
pub mod error;
pub mod patterns;
pub mod resolver;
pub mod zones;

pub use catalog::{ColumnCatalog, ColumnQuery, VariableGroup};
pub use error::{ResolveError, Result};
pub use patterns::{OUTDOOR_DEWPOINT_COLUMN, OUTDOOR_DRY_BULB_COLUMN, energyplus_variable_spec};
pub use resolver::ColumnResolver;
pub use zones::{discover_zones, zone_key};
