//! Occupied-hour overheating relative to outdoor warmth.

/// Indoor overheating degree: excess of operative temperature over the
/// comfort temperature, only while occupied.
pub fn indoor_overheating_degree(
    operative: Option<f64>,
    occupancy: Option<f64>,
    comfort_temp: f64,
) -> Option<f64> {
    if !occupancy.is_some_and(|count| count > 0.0) {
        return None;
    }
    operative.map(|top| (top - comfort_temp).max(0.0))
}

/// Ambient warmness degree: excess of outdoor dry bulb over the base
/// temperature.
pub fn ambient_warmness_degree(dry_bulb: Option<f64>, base_temp: f64) -> Option<f64> {
    dry_bulb.map(|tdb| (tdb - base_temp).max(0.0))
}

/// Ratio of indoor overheating to outdoor warmness; `None` on a zero or
/// missing denominator.
pub fn alpha(iod: Option<f64>, awd: Option<f64>) -> Option<f64> {
    match (iod, awd) {
        (Some(iod), Some(awd)) if awd != 0.0 => Some(iod / awd),
        _ => None,
    }
}
