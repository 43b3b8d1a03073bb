//! Helpers shared by the table writers.

use std::fs::{self, File};
use std::path::Path;

use comfort_common::format_numeric;
use comfort_model::GridValue;

use crate::error::{OutputError, Result};

/// Ensure a directory exists.
pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| OutputError::io(dir, source))
}

/// Ensure a parent directory exists for a file path.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_dir(parent)?;
    }
    Ok(())
}

pub(crate) fn csv_writer(path: &Path) -> Result<csv::Writer<File>> {
    delimited_csv_writer(path, b',')
}

pub(crate) fn delimited_csv_writer(path: &Path, delimiter: u8) -> Result<csv::Writer<File>> {
    let file = File::create(path).map_err(|source| OutputError::io(path, source))?;
    Ok(csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(file))
}

pub(crate) fn finish<W: std::io::Write>(mut writer: csv::Writer<W>, path: &Path) -> Result<()> {
    writer.flush().map_err(|source| OutputError::io(path, source))
}

/// Text of one cell; null renders empty.
pub(crate) fn cell_text(value: Option<&GridValue>) -> String {
    match value {
        Some(GridValue::Number(number)) => format_numeric(*number),
        Some(GridValue::Category(label)) => label.clone(),
        None => String::new(),
    }
}

pub(crate) fn number_text(value: Option<f64>) -> String {
    value.map(format_numeric).unwrap_or_default()
}
