//! In-memory representation of raw simulation output.

use std::collections::HashMap;

use crate::error::{ModelError, Result};

/// Name of the raw timestamp column in simulation output.
pub const TIME_COLUMN: &str = "Date/Time";

/// A single raw cell.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Missing,
}

impl RawValue {
    /// Numeric view of the cell; numeric text is parsed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Number(value) if value.is_finite() => Some(*value),
            RawValue::Text(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<Option<f64>> for RawValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(RawValue::Missing, RawValue::Number)
    }
}

/// One named raw column.
#[derive(Debug, Clone, PartialEq)]
pub struct RawColumn {
    pub name: String,
    pub values: Vec<RawValue>,
}

impl RawColumn {
    pub fn new(name: impl Into<String>, values: Vec<RawValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self::new(name, values.into_iter().map(RawValue::from).collect())
    }
}

/// Rows keyed by raw timestamp label with one entry per raw column.
///
/// The dataset is read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDataset {
    labels: Vec<String>,
    columns: Vec<RawColumn>,
    index: HashMap<String, usize>,
}

impl RawDataset {
    /// Builds a dataset, checking every column has one value per label.
    pub fn new(labels: Vec<String>, columns: Vec<RawColumn>) -> Result<Self> {
        let mut index = HashMap::with_capacity(columns.len());
        for (position, column) in columns.iter().enumerate() {
            if column.values.len() != labels.len() {
                return Err(ModelError::ColumnLengthMismatch {
                    column: column.name.clone(),
                    expected: labels.len(),
                    actual: column.values.len(),
                });
            }
            if index.insert(column.name.clone(), position).is_some() {
                return Err(ModelError::DuplicateColumn(column.name.clone()));
            }
        }
        Ok(Self {
            labels,
            columns,
            index,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn height(&self) -> usize {
        self.labels.len()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|column| column.name.clone()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&[RawValue]> {
        self.index
            .get(name)
            .map(|&position| self.columns[position].values.as_slice())
    }

    /// Numeric value at `row` of column `name`.
    pub fn number(&self, name: &str, row: usize) -> Option<f64> {
        self.column(name)
            .and_then(|values| values.get(row))
            .and_then(RawValue::as_f64)
    }
}
