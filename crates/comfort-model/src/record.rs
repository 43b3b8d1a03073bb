use chrono::NaiveDateTime;

/// Per-zone, per-timestamp view of the resolved variables.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub timestamp: NaiveDateTime,
    pub air_temperature: Option<f64>,
    pub relative_humidity: Option<f64>,
    pub mean_radiant_temperature: Option<f64>,
    pub operative_temperature: Option<f64>,
    pub occupancy_count: Option<f64>,
    pub outdoor_dry_bulb: Option<f64>,
    pub outdoor_dewpoint: Option<f64>,
}

impl NormalizedRecord {
    /// Record with every variable missing.
    pub fn empty(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            air_temperature: None,
            relative_humidity: None,
            mean_radiant_temperature: None,
            operative_temperature: None,
            occupancy_count: None,
            outdoor_dry_bulb: None,
            outdoor_dewpoint: None,
        }
    }

    /// True when at least one occupant is present.
    pub fn is_occupied(&self) -> bool {
        self.occupancy_count.is_some_and(|count| count > 0.0)
    }
}

/// Time-ordered records of one zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneSeries {
    pub zone: String,
    pub records: Vec<NormalizedRecord>,
}

/// Outdoor conditions at one timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentRecord {
    pub timestamp: NaiveDateTime,
    pub outdoor_dry_bulb: Option<f64>,
    pub outdoor_dewpoint: Option<f64>,
}

/// Everything the indicator engine reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedDataset {
    pub zones: Vec<ZoneSeries>,
    pub environment: Vec<EnvironmentRecord>,
}

impl NormalizedDataset {
    pub fn zone_names(&self) -> Vec<&str> {
        self.zones.iter().map(|series| series.zone.as_str()).collect()
    }
}
