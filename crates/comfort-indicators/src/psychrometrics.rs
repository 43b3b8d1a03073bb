//! Moist-air relations used by the discomfort index.

/// Wet-bulb temperature in °C from dry-bulb °C and relative humidity %.
///
/// Empirical fit by Stull (2011), valid for RH 5–99 % and -20–50 °C.
pub fn wet_bulb_stull(dry_bulb: f64, relative_humidity: f64) -> f64 {
    let rh = relative_humidity;
    dry_bulb * (0.151977 * (rh + 8.313659).sqrt()).atan() + (dry_bulb + rh).atan()
        - (rh - 1.676331).atan()
        + 0.00391838 * rh.powf(1.5) * (0.023101 * rh).atan()
        - 4.686035
}
