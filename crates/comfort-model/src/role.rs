use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Semantic role a raw column plays in the indicator calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableRole {
    AirTemperature,
    RelativeHumidity,
    MeanRadiantTemperature,
    OperativeTemperature,
    Occupancy,
    OutdoorDryBulb,
    OutdoorDewpoint,
}

impl VariableRole {
    pub const ZONE: [VariableRole; 5] = [
        VariableRole::AirTemperature,
        VariableRole::RelativeHumidity,
        VariableRole::MeanRadiantTemperature,
        VariableRole::OperativeTemperature,
        VariableRole::Occupancy,
    ];

    pub const ENVIRONMENTAL: [VariableRole; 2] =
        [VariableRole::OutdoorDryBulb, VariableRole::OutdoorDewpoint];

    /// Environmental roles are resolved once for the whole dataset.
    pub fn is_environmental(self) -> bool {
        matches!(
            self,
            VariableRole::OutdoorDryBulb | VariableRole::OutdoorDewpoint
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VariableRole::AirTemperature => "air_temperature",
            VariableRole::RelativeHumidity => "relative_humidity",
            VariableRole::MeanRadiantTemperature => "mean_radiant_temperature",
            VariableRole::OperativeTemperature => "operative_temperature",
            VariableRole::Occupancy => "occupancy",
            VariableRole::OutdoorDryBulb => "outdoor_dry_bulb",
            VariableRole::OutdoorDewpoint => "outdoor_dewpoint",
        }
    }
}

impl fmt::Display for VariableRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariableRole {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        VariableRole::ZONE
            .into_iter()
            .chain(VariableRole::ENVIRONMENTAL)
            .find(|role| role.as_str() == key)
            .ok_or_else(|| ModelError::UnknownRole(s.to_string()))
    }
}
