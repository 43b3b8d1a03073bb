pub mod dataset;
pub mod error;
pub mod grid;
pub mod indicator;
pub mod mapping;
pub mod options;
pub mod record;
pub mod role;
pub mod rows;
pub mod variables;

pub use dataset::{RawColumn, RawDataset, RawValue, TIME_COLUMN};
pub use error::{ModelError, Result};
pub use grid::{GridValue, IndicatorOutput, IndicatorSet, Observation, WideGrid, ZoneTotals};
pub use indicator::{ENVIRONMENT_COLUMN, GLOBAL_ZONE, Indicator, IndicatorKind, MergeRule};
pub use mapping::{ZoneColumns, ZoneVariableMap};
pub use options::{ComfortOptions, DateRange, IndicatorRequest};
pub use record::{EnvironmentRecord, NormalizedDataset, NormalizedRecord, ZoneSeries};
pub use role::VariableRole;
pub use rows::{LongRow, UltraLongRow};
pub use variables::{VariableEntry, VariableSpec, ZONE_PLACEHOLDER};
