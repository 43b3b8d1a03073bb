//! Heat index (Rothfusz regression, Celsius coefficients).

use std::fmt;

/// Below this temperature (°C) the heat index equals the temperature.
pub const HI_THRESHOLD_TEMP: f64 = 26.7;
/// Below this relative humidity (%) the heat index equals the temperature.
pub const HI_THRESHOLD_RH: f64 = 40.0;

const C1: f64 = -8.784694;
const C2: f64 = 1.611394;
const C3: f64 = 2.338548;
const C4: f64 = -0.146116;
const C5: f64 = -0.012308;
const C6: f64 = -0.016424;
const C7: f64 = 0.002211;
const C8: f64 = 0.000725;
const C9: f64 = -0.000003;

/// Heat index in °C from operative temperature and relative humidity.
///
/// Humidity is clipped to 0–100 first. Missing temperature gives `None`;
/// missing humidity gives `None` only when the regression would apply.
pub fn heat_index(temperature: Option<f64>, relative_humidity: Option<f64>) -> Option<f64> {
    let t = temperature?;
    if t <= HI_THRESHOLD_TEMP {
        return Some(t);
    }
    let rh = relative_humidity?.clamp(0.0, 100.0);
    if rh < HI_THRESHOLD_RH {
        return Some(t);
    }
    Some(
        C1 + C2 * t
            + C3 * rh
            + C4 * t * rh
            + C5 * t * t
            + C6 * rh * rh
            + C7 * t * t * rh
            + C8 * t * rh * rh
            + C9 * t * t * rh * rh,
    )
}

/// Risk band of a heat index value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeatIndexLevel {
    SafeCondition,
    Caution,
    ExtremeCaution,
    Danger,
    ExtremeDanger,
    InvalidData,
}

impl HeatIndexLevel {
    pub fn classify(value: Option<f64>) -> Self {
        match value {
            Some(hi) if !hi.is_finite() => HeatIndexLevel::InvalidData,
            Some(hi) if hi < 27.0 => HeatIndexLevel::SafeCondition,
            Some(hi) if hi < 32.0 => HeatIndexLevel::Caution,
            Some(hi) if hi < 41.0 => HeatIndexLevel::ExtremeCaution,
            Some(hi) if hi < 54.0 => HeatIndexLevel::Danger,
            Some(_) => HeatIndexLevel::ExtremeDanger,
            None => HeatIndexLevel::InvalidData,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HeatIndexLevel::SafeCondition => "SAFE CONDITION",
            HeatIndexLevel::Caution => "CAUTION",
            HeatIndexLevel::ExtremeCaution => "EXTREME CAUTION",
            HeatIndexLevel::Danger => "DANGER",
            HeatIndexLevel::ExtremeDanger => "EXTREME DANGER",
            HeatIndexLevel::InvalidData => "INVALID DATA",
        }
    }
}

impl fmt::Display for HeatIndexLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_below_thresholds() {
        assert_eq!(heat_index(Some(26.7), Some(90.0)), Some(26.7));
        assert_eq!(heat_index(Some(35.0), Some(39.9)), Some(35.0));
        assert_eq!(heat_index(Some(20.0), None), Some(20.0));
    }

    #[test]
    fn test_regression_applies_when_hot_and_humid() {
        let hi = heat_index(Some(32.0), Some(70.0)).unwrap();
        assert!((hi - 43.209).abs() < 1e-3, "{hi}");
    }

    #[test]
    fn test_missing_inputs() {
        assert_eq!(heat_index(None, Some(50.0)), None);
        assert_eq!(heat_index(Some(30.0), None), None);
    }

    #[test]
    fn test_humidity_is_clipped() {
        assert_eq!(heat_index(Some(30.0), Some(150.0)), heat_index(Some(30.0), Some(100.0)));
    }

    #[test]
    fn test_classify_bands() {
        assert_eq!(HeatIndexLevel::classify(Some(26.99)), HeatIndexLevel::SafeCondition);
        assert_eq!(HeatIndexLevel::classify(Some(27.0)), HeatIndexLevel::Caution);
        assert_eq!(HeatIndexLevel::classify(Some(32.0)), HeatIndexLevel::ExtremeCaution);
        assert_eq!(HeatIndexLevel::classify(Some(41.0)), HeatIndexLevel::Danger);
        assert_eq!(HeatIndexLevel::classify(Some(54.0)), HeatIndexLevel::ExtremeDanger);
        assert_eq!(HeatIndexLevel::classify(None).label(), "INVALID DATA");
    }
}
