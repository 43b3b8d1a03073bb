//! Thom's discomfort index from dry-bulb and wet-bulb temperature.

use std::fmt;

use crate::psychrometrics::wet_bulb_stull;

/// `0.5 · (Ta + Tw)` with the wet bulb from Stull's fit.
pub fn discomfort_index(dry_bulb: Option<f64>, relative_humidity: Option<f64>) -> Option<f64> {
    let ta = dry_bulb?;
    let rh = relative_humidity?.clamp(0.0, 100.0);
    Some(0.5 * (ta + wet_bulb_stull(ta, rh)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscomfortLevel {
    Comfortable,
    SlightlyUncomfortable,
    Uncomfortable,
    VeryUncomfortable,
    Dangerous,
    InvalidData,
}

impl DiscomfortLevel {
    pub fn classify(value: Option<f64>) -> Self {
        match value {
            Some(di) if !di.is_finite() => DiscomfortLevel::InvalidData,
            Some(di) if di < 21.0 => DiscomfortLevel::Comfortable,
            Some(di) if di < 24.0 => DiscomfortLevel::SlightlyUncomfortable,
            Some(di) if di < 27.0 => DiscomfortLevel::Uncomfortable,
            Some(di) if di < 29.0 => DiscomfortLevel::VeryUncomfortable,
            Some(_) => DiscomfortLevel::Dangerous,
            None => DiscomfortLevel::InvalidData,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DiscomfortLevel::Comfortable => "COMFORTABLE",
            DiscomfortLevel::SlightlyUncomfortable => "SLIGHTLY UNCOMFORTABLE",
            DiscomfortLevel::Uncomfortable => "UNCOMFORTABLE",
            DiscomfortLevel::VeryUncomfortable => "VERY UNCOMFORTABLE",
            DiscomfortLevel::Dangerous => "DANGEROUS",
            DiscomfortLevel::InvalidData => "INVALID DATA",
        }
    }
}

impl fmt::Display for DiscomfortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
