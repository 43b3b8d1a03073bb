//! Configuration threaded through every computation.

use serde::{Deserialize, Serialize};

use crate::indicator::Indicator;

/// Numeric parameters of the indicator algorithms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComfortOptions {
    /// Operative temperature above which occupied hours count as overheated.
    pub comfort_temp: f64,
    /// Outdoor temperature above which ambient warmness accumulates.
    pub base_temp: f64,
    /// Calendar year attached to month/day timestamps.
    pub year: i32,
    /// Relative humidity used when a zone has no humidity column.
    pub default_relative_humidity: f64,
    /// Occupant count used when a zone has no occupancy column.
    pub default_occupancy: f64,
    /// Number of trailing hourly samples in the outdoor running mean.
    pub running_mean_window: usize,
}

impl Default for ComfortOptions {
    fn default() -> Self {
        Self {
            comfort_temp: 26.5,
            base_temp: 18.0,
            year: 2020,
            default_relative_humidity: 50.0,
            default_occupancy: 0.0,
            running_mean_window: 7 * 24,
        }
    }
}

impl ComfortOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_comfort_temp(mut self, value: f64) -> Self {
        self.comfort_temp = value;
        self
    }

    #[must_use]
    pub fn with_base_temp(mut self, value: f64) -> Self {
        self.base_temp = value;
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    #[must_use]
    pub fn with_default_relative_humidity(mut self, value: f64) -> Self {
        self.default_relative_humidity = value;
        self
    }

    #[must_use]
    pub fn with_default_occupancy(mut self, value: f64) -> Self {
        self.default_occupancy = value;
        self
    }
}

/// Inclusive calendar window given as `MM/DD` or `YYYY-MM-DD` bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
    /// Year for `MM/DD` bounds; defaults to the first timestamp's year.
    #[serde(default)]
    pub year: Option<i32>,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            year: None,
        }
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

/// Everything a single indicator computation needs besides the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRequest {
    pub simulation: String,
    /// Zones to analyze; empty means every zone found in the columns.
    #[serde(default)]
    pub zones: Vec<String>,
    pub indicators: Vec<Indicator>,
    #[serde(default)]
    pub range: Option<DateRange>,
    #[serde(default)]
    pub options: ComfortOptions,
}

impl IndicatorRequest {
    /// Request for every indicator over every zone.
    pub fn new(simulation: impl Into<String>) -> Self {
        Self {
            simulation: simulation.into(),
            zones: Vec::new(),
            indicators: Indicator::ALL.to_vec(),
            range: None,
            options: ComfortOptions::default(),
        }
    }

    #[must_use]
    pub fn with_zones(mut self, zones: Vec<String>) -> Self {
        self.zones = zones;
        self
    }

    #[must_use]
    pub fn with_indicators(mut self, indicators: Vec<Indicator>) -> Self {
        self.indicators = indicators;
        self
    }

    #[must_use]
    pub fn with_range(mut self, range: Option<DateRange>) -> Self {
        self.range = range;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ComfortOptions) -> Self {
        self.options = options;
        self
    }

    pub fn wants(&self, indicator: Indicator) -> bool {
        self.indicators.contains(&indicator)
    }
}
