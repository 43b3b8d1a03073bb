//! Browsing raw column headers.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::zones::discover_zones;

/// Coarse grouping of raw columns by the quantity they report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum VariableGroup {
    Temperature,
    Humidity,
    Occupancy,
    Energy,
    Solar,
    AirFlow,
    Other,
}

impl VariableGroup {
    /// Classifies a column by keywords in its name, first match wins.
    pub fn classify(column: &str) -> Self {
        let lower = column.to_lowercase();
        if lower.contains("temperature") {
            VariableGroup::Temperature
        } else if lower.contains("humidity") {
            VariableGroup::Humidity
        } else if lower.contains("occupant") || lower.contains("people") {
            VariableGroup::Occupancy
        } else if lower.contains("energy") || lower.contains("power") {
            VariableGroup::Energy
        } else if lower.contains("solar") || lower.contains("radiation") {
            VariableGroup::Solar
        } else if lower.contains("air") && lower.contains("flow") {
            VariableGroup::AirFlow
        } else {
            VariableGroup::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VariableGroup::Temperature => "Temperature",
            VariableGroup::Humidity => "Humidity",
            VariableGroup::Occupancy => "Occupancy",
            VariableGroup::Energy => "Energy",
            VariableGroup::Solar => "Solar",
            VariableGroup::AirFlow => "Air Flow",
            VariableGroup::Other => "Other",
        }
    }
}

impl fmt::Display for VariableGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Filters for [`ColumnCatalog::select`].
#[derive(Debug, Clone, Default)]
pub struct ColumnQuery {
    /// Substring that must appear in the column name.
    pub zone: Option<String>,
    /// Case-insensitive substring.
    pub pattern: Option<String>,
    /// Maximum number of columns; zero means unlimited.
    pub limit: Option<usize>,
}

/// Header-only view of a simulation output table.
#[derive(Debug, Clone)]
pub struct ColumnCatalog {
    columns: Vec<String>,
}

impl ColumnCatalog {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn zones(&self) -> Vec<String> {
        discover_zones(&self.columns)
    }

    /// Columns matching every filter of `query`, in header order.
    pub fn select(&self, query: &ColumnQuery) -> Vec<&str> {
        let pattern = query.pattern.as_deref().map(str::to_lowercase);
        let mut selected: Vec<&str> = self
            .columns
            .iter()
            .map(String::as_str)
            .filter(|column| query.zone.as_deref().is_none_or(|zone| column.contains(zone)))
            .filter(|column| {
                pattern
                    .as_deref()
                    .is_none_or(|pattern| column.to_lowercase().contains(pattern))
            })
            .collect();
        if let Some(limit) = query.limit.filter(|&limit| limit > 0) {
            selected.truncate(limit);
        }
        debug!(
            total = self.columns.len(),
            selected = selected.len(),
            "filtered columns"
        );
        selected
    }

    /// Columns grouped by [`VariableGroup`]; empty groups are omitted.
    pub fn variable_groups(&self) -> BTreeMap<VariableGroup, Vec<&str>> {
        let mut groups: BTreeMap<VariableGroup, Vec<&str>> = BTreeMap::new();
        for column in &self.columns {
            groups
                .entry(VariableGroup::classify(column))
                .or_default()
                .push(column);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ColumnCatalog {
        ColumnCatalog::new(
            [
                "Date/Time",
                "Environment:Site Outdoor Air Drybulb Temperature [C](Hourly)",
                "P:Z1:Zone Mean Air Temperature [C](Hourly:ON)",
                "P:Z1:Zone Air Relative Humidity [%](Hourly)",
                "P:Z1:Zone People Sensible Heating Rate [W](Hourly)",
                "P:Z2:Zone Mean Air Temperature [C](Hourly:ON)",
                "P:Z2:Zone Mechanical Ventilation Air Flow Rate [m3/s](Hourly)",
            ]
            .map(String::from)
            .to_vec(),
        )
    }

    #[test]
    fn test_select_by_zone_and_pattern() {
        let catalog = catalog();
        let query = ColumnQuery {
            zone: Some("P:Z1".to_string()),
            pattern: Some("TEMPERATURE".to_string()),
            limit: None,
        };
        assert_eq!(
            catalog.select(&query),
            vec!["P:Z1:Zone Mean Air Temperature [C](Hourly:ON)"]
        );
    }

    #[test]
    fn test_select_limit() {
        let query = ColumnQuery {
            limit: Some(2),
            ..ColumnQuery::default()
        };
        assert_eq!(catalog().select(&query).len(), 2);
        let unlimited = ColumnQuery {
            limit: Some(0),
            ..ColumnQuery::default()
        };
        assert_eq!(catalog().select(&unlimited).len(), 7);
    }

    #[test]
    fn test_variable_groups() {
        let catalog = catalog();
        let groups = catalog.variable_groups();
        assert_eq!(groups[&VariableGroup::Temperature].len(), 3);
        assert_eq!(groups[&VariableGroup::Humidity].len(), 1);
        assert_eq!(groups[&VariableGroup::Occupancy].len(), 1);
        assert_eq!(groups[&VariableGroup::AirFlow].len(), 1);
        assert_eq!(groups[&VariableGroup::Other], vec!["Date/Time"]);
        assert!(!groups.contains_key(&VariableGroup::Solar));
    }
}
