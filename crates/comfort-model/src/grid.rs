//! Result containers for computed indicators.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::indicator::Indicator;

/// A non-null indicator cell.
#[derive(Debug, Clone, PartialEq)]
pub enum GridValue {
    Number(f64),
    Category(String),
}

impl GridValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GridValue::Number(value) => Some(*value),
            GridValue::Category(_) => None,
        }
    }
}

/// One computed value before it is laid out in a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub timestamp: NaiveDateTime,
    pub column: String,
    pub value: Option<GridValue>,
}

impl Observation {
    pub fn number(timestamp: NaiveDateTime, column: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            timestamp,
            column: column.into(),
            value: value.map(GridValue::Number),
        }
    }

    pub fn category(timestamp: NaiveDateTime, column: impl Into<String>, label: &str) -> Self {
        Self {
            timestamp,
            column: column.into(),
            value: Some(GridValue::Category(label.to_string())),
        }
    }
}

/// Timestamp × column matrix of optional cells.
///
/// Timestamps are unique and kept in ascending order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WideGrid {
    columns: Vec<String>,
    rows: BTreeMap<NaiveDateTime, Vec<Option<GridValue>>>,
}

impl WideGrid {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: BTreeMap::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Inserts or replaces the row at `timestamp`.
    ///
    /// Rows shorter than the column list are padded with nulls; longer rows
    /// are truncated.
    pub fn insert_row(&mut self, timestamp: NaiveDateTime, mut cells: Vec<Option<GridValue>>) {
        cells.resize(self.columns.len(), None);
        self.rows.insert(timestamp, cells);
    }

    pub fn row(&self, timestamp: &NaiveDateTime) -> Option<&[Option<GridValue>]> {
        self.rows.get(timestamp).map(Vec::as_slice)
    }

    pub fn get(&self, timestamp: &NaiveDateTime, column: &str) -> Option<&GridValue> {
        let position = self.column_index(column)?;
        self.rows.get(timestamp)?.get(position)?.as_ref()
    }

    pub fn rows(&self) -> impl Iterator<Item = (&NaiveDateTime, &[Option<GridValue>])> {
        self.rows
            .iter()
            .map(|(timestamp, cells)| (timestamp, cells.as_slice()))
    }

    pub fn timestamps(&self) -> impl Iterator<Item = &NaiveDateTime> {
        self.rows.keys()
    }

    pub fn first_timestamp(&self) -> Option<NaiveDateTime> {
        self.rows.keys().next().copied()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Non-null cells in column `position`, in timestamp order.
    pub fn column_values(&self, position: usize) -> impl Iterator<Item = &GridValue> {
        self.rows
            .values()
            .filter_map(move |cells| cells.get(position).and_then(Option::as_ref))
    }

    /// Keeps only rows whose timestamp satisfies `keep`.
    pub fn retain_timestamps(&mut self, mut keep: impl FnMut(&NaiveDateTime) -> bool) {
        self.rows.retain(|timestamp, _| keep(timestamp));
    }

    /// Removes rows where every cell is null.
    pub fn drop_empty_rows(&mut self) {
        self.rows
            .retain(|_, cells| cells.iter().any(Option::is_some));
    }
}

/// One value per zone over the whole filtered period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneTotals {
    pub values: Vec<(String, Option<f64>)>,
}

impl ZoneTotals {
    pub fn get(&self, zone: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name == zone)
            .and_then(|(_, value)| *value)
    }
}

/// Result of one indicator, shaped by its temporal semantics.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorOutput {
    Series(WideGrid),
    ZoneTotals(ZoneTotals),
    Global(Option<f64>),
}

impl IndicatorOutput {
    pub fn as_series(&self) -> Option<&WideGrid> {
        match self {
            IndicatorOutput::Series(grid) => Some(grid),
            _ => None,
        }
    }
}

/// Computed indicators of one simulation, in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorSet {
    pub simulation: String,
    pub outputs: Vec<(Indicator, IndicatorOutput)>,
}

impl IndicatorSet {
    pub fn new(simulation: impl Into<String>) -> Self {
        Self {
            simulation: simulation.into(),
            outputs: Vec::new(),
        }
    }

    pub fn get(&self, indicator: Indicator) -> Option<&IndicatorOutput> {
        self.outputs
            .iter()
            .find(|(candidate, _)| *candidate == indicator)
            .map(|(_, output)| output)
    }

    pub fn indicators(&self) -> Vec<Indicator> {
        self.outputs.iter().map(|(indicator, _)| *indicator).collect()
    }
}
