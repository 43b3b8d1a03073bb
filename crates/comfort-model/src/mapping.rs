use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::role::VariableRole;

/// Columns resolved for a single zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneColumns {
    pub zone: String,
    pub columns: BTreeMap<VariableRole, String>,
}

impl ZoneColumns {
    pub fn new(zone: impl Into<String>) -> Self {
        Self {
            zone: zone.into(),
            columns: BTreeMap::new(),
        }
    }

    pub fn column(&self, role: VariableRole) -> Option<&str> {
        self.columns.get(&role).map(String::as_str)
    }
}

/// Result of column resolution: zone roles plus global environmental roles.
///
/// Zones keep the order in which they were requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneVariableMap {
    pub zones: Vec<ZoneColumns>,
    pub environment: BTreeMap<VariableRole, String>,
}

impl ZoneVariableMap {
    pub fn zone(&self, name: &str) -> Option<&ZoneColumns> {
        self.zones.iter().find(|zone| zone.zone == name)
    }

    pub fn zone_names(&self) -> Vec<&str> {
        self.zones.iter().map(|zone| zone.zone.as_str()).collect()
    }

    pub fn environment_column(&self, role: VariableRole) -> Option<&str> {
        self.environment.get(&role).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
