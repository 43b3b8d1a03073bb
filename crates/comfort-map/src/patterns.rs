//! Default column templates for EnergyPlus CSV output.

use comfort_model::{VariableEntry, VariableRole, VariableSpec};

pub const OUTDOOR_DRY_BULB_COLUMN: &str =
    "Environment:Site Outdoor Air Drybulb Temperature [C](Hourly)";
pub const OUTDOOR_DEWPOINT_COLUMN: &str =
    "Environment:Site Outdoor Air Dewpoint Temperature [C](Hourly)";

/// Watts of sensible heat per occupant, inverted.
pub const PEOPLE_PER_WATT: f64 = 0.01;

/// Variable spec matching the EnergyPlus hourly report variables.
pub fn energyplus_variable_spec() -> VariableSpec {
    VariableSpec::new(vec![
        VariableEntry::new(
            VariableRole::AirTemperature,
            "{zone}:Zone Mean Air Temperature [C](Hourly:ON)",
        )
        .with_fallback("{zone}:Zone Mean Air Temperature [C](Hourly)")
        .with_fallback("{zone}:Zone Mean Air Temperature [C](RunPeriod:ON)")
        .required(),
        VariableEntry::new(
            VariableRole::RelativeHumidity,
            "{zone}:Zone Air Relative Humidity [%](Hourly)",
        )
        .with_fallback("{zone}:Zone Air Relative Humidity [%](Hourly:ON)"),
        VariableEntry::new(
            VariableRole::MeanRadiantTemperature,
            "{zone}:Zone Mean Radiant Temperature [C](Hourly)",
        )
        .with_fallback("{zone}:Zone Mean Radiant Temperature [C](Hourly:ON)"),
        VariableEntry::new(
            VariableRole::OperativeTemperature,
            "{zone}:Zone Operative Temperature [C](Hourly)",
        )
        .with_fallback("{zone}:Zone Operative Temperature [C](Hourly:ON)"),
        VariableEntry::new(
            VariableRole::Occupancy,
            "{zone}:Zone People Sensible Heating Rate [W](Hourly)",
        )
        .with_fallback("{zone}:Zone People Sensible Heating Rate [W](Hourly:ON)")
        .with_scale(PEOPLE_PER_WATT),
        VariableEntry::new(VariableRole::OutdoorDryBulb, OUTDOOR_DRY_BULB_COLUMN).required(),
        VariableEntry::new(VariableRole::OutdoorDewpoint, OUTDOOR_DEWPOINT_COLUMN),
    ])
}
