//! CSV loading via Polars.

use std::path::Path;

use polars::prelude::*;
use tracing::info;

use comfort_model::RawDataset;

use crate::error::{IngestError, Result};
use crate::frame::dataset_from_frame;

/// Reads a simulation output CSV as a frame of text columns.
///
/// Schema inference is disabled so mixed columns never fail to parse;
/// numbers are recovered per cell when building the dataset.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
    if df.height() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(df)
}

/// Loads a simulation output CSV into a [`RawDataset`].
pub fn read_raw_csv(path: &Path) -> Result<RawDataset> {
    let df = read_csv_frame(path)?;
    let dataset = dataset_from_frame(&df)?;
    info!(
        path = %path.display(),
        rows = dataset.height(),
        columns = dataset.column_names().len(),
        "loaded simulation output"
    );
    Ok(dataset)
}
