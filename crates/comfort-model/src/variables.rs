//! Declarative description of which raw columns feed each variable role.

use serde::{Deserialize, Serialize};

use crate::role::VariableRole;

/// Placeholder substituted with the zone name in zone-level templates.
pub const ZONE_PLACEHOLDER: &str = "{zone}";

fn default_scale() -> f64 {
    1.0
}

/// One role and the ordered column-name templates that may satisfy it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableEntry {
    pub role: VariableRole,
    pub primary: String,
    #[serde(default)]
    pub fallbacks: Vec<String>,
    #[serde(default)]
    pub required: bool,
    /// Multiplier applied to every raw value read through this entry.
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl VariableEntry {
    pub fn new(role: VariableRole, primary: impl Into<String>) -> Self {
        Self {
            role,
            primary: primary.into(),
            fallbacks: Vec::new(),
            required: false,
            scale: default_scale(),
        }
    }

    #[must_use]
    pub fn with_fallback(mut self, template: impl Into<String>) -> Self {
        self.fallbacks.push(template.into());
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Candidate column names in priority order, primary first.
    ///
    /// Zone templates get `zone` substituted for [`ZONE_PLACEHOLDER`];
    /// environmental templates are returned unchanged.
    pub fn candidates(&self, zone: Option<&str>) -> Vec<String> {
        std::iter::once(&self.primary)
            .chain(self.fallbacks.iter())
            .map(|template| match zone {
                Some(zone) => template.replace(ZONE_PLACEHOLDER, zone),
                None => template.clone(),
            })
            .collect()
    }
}

/// Ordered list of variable entries.
///
/// Lookup iterates the list; the first entry for a role wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableSpec {
    pub entries: Vec<VariableEntry>,
}

impl VariableSpec {
    pub fn new(entries: Vec<VariableEntry>) -> Self {
        Self { entries }
    }

    pub fn entry(&self, role: VariableRole) -> Option<&VariableEntry> {
        self.entries.iter().find(|entry| entry.role == role)
    }

    pub fn zone_entries(&self) -> impl Iterator<Item = &VariableEntry> {
        self.entries
            .iter()
            .filter(|entry| !entry.role.is_environmental())
    }

    pub fn environmental_entries(&self) -> impl Iterator<Item = &VariableEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.role.is_environmental())
    }

    /// Scale factor for `role`, 1.0 when the role has no entry.
    pub fn scale(&self, role: VariableRole) -> f64 {
        self.entry(role).map_or(1.0, |entry| entry.scale)
    }
}
