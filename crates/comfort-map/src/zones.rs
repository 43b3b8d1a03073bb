//! Zone discovery from raw column names.

use std::collections::BTreeSet;

const ENVIRONMENT_PREFIX: &str = "Environment:";

/// Zone key of a raw column: its first two colon-delimited segments.
///
/// Returns `None` for environmental columns and for names with fewer than
/// three segments.
///
/// ```
/// use comfort_map::zone_key;
///
/// assert_eq!(
///     zone_key("0XPLANTABAJA:ZONA4:Zone Mean Air Temperature [C](Hourly:ON)"),
///     Some("0XPLANTABAJA:ZONA4")
/// );
/// assert_eq!(zone_key("Environment:Site Outdoor Air Drybulb Temperature [C](Hourly)"), None);
/// ```
pub fn zone_key(column: &str) -> Option<&str> {
    if column.starts_with(ENVIRONMENT_PREFIX) {
        return None;
    }
    let first = column.find(':')?;
    let second = first + 1 + column[first + 1..].find(':')?;
    if second == first + 1 || first == 0 {
        return None;
    }
    Some(&column[..second])
}

/// Sorted, unique zone keys across `columns`.
pub fn discover_zones<S: AsRef<str>>(columns: &[S]) -> Vec<String> {
    columns
        .iter()
        .filter_map(|column| zone_key(column.as_ref()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
