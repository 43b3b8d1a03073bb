//! Resolution of variable roles to raw column names.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use comfort_model::{VariableEntry, VariableSpec, ZoneColumns, ZoneVariableMap};

use crate::error::{ResolveError, Result};

/// Matches [`VariableSpec`] templates against the columns of a dataset.
pub struct ColumnResolver<'a> {
    spec: &'a VariableSpec,
}

impl<'a> ColumnResolver<'a> {
    pub fn new(spec: &'a VariableSpec) -> Self {
        Self { spec }
    }

    /// Builds the zone → role → column map.
    ///
    /// For every role the primary template is tried first, then each
    /// fallback in order. Zones without any resolved role are dropped.
    /// Fails when a required environmental variable is absent or when no
    /// zone survives.
    pub fn resolve<S: AsRef<str>>(&self, zones: &[String], columns: &[S]) -> Result<ZoneVariableMap> {
        let available: HashSet<&str> = columns.iter().map(AsRef::as_ref).collect();
        let mut map = ZoneVariableMap::default();

        for entry in self.spec.environmental_entries() {
            let candidates = entry.candidates(None);
            match first_match(&candidates, &available) {
                Some(column) => {
                    debug!(role = %entry.role, column = %column, "resolved environmental variable");
                    map.environment.entry(entry.role).or_insert(column);
                }
                None if entry.required => {
                    return Err(ResolveError::MissingEnvironmental {
                        role: entry.role,
                        tried: candidates,
                    });
                }
                None => debug!(role = %entry.role, "optional environmental variable not found"),
            }
        }

        let mut seen = HashSet::new();
        for zone in zones {
            if !seen.insert(zone.as_str()) {
                continue;
            }
            let resolved = self.resolve_zone(zone, &available);
            if resolved.columns.is_empty() {
                warn!(zone = %zone, "zone not found in simulation output");
                continue;
            }
            info!(
                zone = %zone,
                variables = resolved.columns.len(),
                "resolved zone variables"
            );
            map.zones.push(resolved);
        }

        if map.is_empty() {
            return Err(ResolveError::NoZonesResolved {
                zones: zones.to_vec(),
            });
        }
        Ok(map)
    }

    fn resolve_zone(&self, zone: &str, available: &HashSet<&str>) -> ZoneColumns {
        let mut resolved = ZoneColumns::new(zone);
        for entry in self.spec.zone_entries() {
            if resolved.columns.contains_key(&entry.role) {
                continue;
            }
            match resolve_entry(entry, zone, available) {
                Some(column) => {
                    resolved.columns.insert(entry.role, column);
                }
                None if entry.required => {
                    warn!(zone, role = %entry.role, "required variable not found for zone");
                }
                None => debug!(zone, role = %entry.role, "optional variable not found for zone"),
            }
        }
        resolved
    }
}

fn resolve_entry(entry: &VariableEntry, zone: &str, available: &HashSet<&str>) -> Option<String> {
    let candidates = entry.candidates(Some(zone));
    let found = first_match(&candidates, available)?;
    if found != candidates[0] {
        debug!(zone, role = %entry.role, column = %found, "resolved through fallback");
    }
    Some(found)
}

fn first_match(candidates: &[String], available: &HashSet<&str>) -> Option<String> {
    candidates
        .iter()
        .find(|candidate| available.contains(candidate.as_str()))
        .cloned()
}
