//! Conversion from Polars frames to raw datasets.

use polars::prelude::*;
use tracing::debug;

use comfort_common::{any_to_f64, any_to_string, parse_f64};
use comfort_model::{RawColumn, RawDataset, RawValue, TIME_COLUMN};

use crate::error::{IngestError, Result};

/// Builds a [`RawDataset`] from a frame holding a `Date/Time` column.
///
/// Header whitespace is ignored when locating the timestamp column. Numeric
/// text becomes a number; other non-empty text is kept as text.
pub fn dataset_from_frame(df: &DataFrame) -> Result<RawDataset> {
    let time_column = df
        .get_columns()
        .iter()
        .find(|column| column.name().trim() == TIME_COLUMN)
        .ok_or_else(|| IngestError::MissingTimeColumn {
            column: TIME_COLUMN.to_string(),
        })?;
    let height = df.height();

    let mut labels = Vec::with_capacity(height);
    for idx in 0..height {
        labels.push(any_to_string(time_column.get(idx)?));
    }

    let mut columns = Vec::with_capacity(df.width().saturating_sub(1));
    for column in df.get_columns() {
        if column.name() == time_column.name() {
            continue;
        }
        let mut values = Vec::with_capacity(height);
        for idx in 0..height {
            values.push(raw_value(column.get(idx)?));
        }
        columns.push(RawColumn::new(column.name().trim(), values));
    }

    debug!(rows = height, columns = columns.len(), "converted frame");
    Ok(RawDataset::new(labels, columns)?)
}

fn raw_value(value: AnyValue<'_>) -> RawValue {
    match value {
        AnyValue::Null => RawValue::Missing,
        AnyValue::String(text) => text_value(text),
        AnyValue::StringOwned(text) => text_value(&text),
        other => match any_to_f64(other.clone()) {
            Some(number) => RawValue::Number(number),
            None => RawValue::Text(any_to_string(other)),
        },
    }
}

fn text_value(text: &str) -> RawValue {
    if text.trim().is_empty() {
        return RawValue::Missing;
    }
    match parse_f64(text) {
        Some(number) if number.is_finite() => RawValue::Number(number),
        _ => RawValue::Text(text.to_string()),
    }
}
