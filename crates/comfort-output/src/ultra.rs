//! The consolidated `Simulation,Indicator,DateTime,Zone,Value` table.

use std::io;
use std::path::Path;

use tracing::info;

use comfort_common::format_timestamp;
use comfort_model::UltraLongRow;

use crate::common::{cell_text, csv_writer, ensure_parent_dir, finish};
use crate::error::{OutputError, Result};
use crate::format::ExportFormat;

pub const ULTRA_LONG_HEADER: [&str; 5] = ["Simulation", "Indicator", "DateTime", "Zone", "Value"];

/// Writes the header and `rows` in the given order.
///
/// Aggregate rows have an empty `DateTime`; a null value is an empty `Value`.
pub fn write_ultra_long_table<W: io::Write>(
    writer: &mut csv::Writer<W>,
    rows: &[UltraLongRow],
) -> Result<()> {
    writer.write_record(ULTRA_LONG_HEADER)?;
    for row in rows {
        let datetime = row
            .datetime
            .as_ref()
            .map(format_timestamp)
            .unwrap_or_default();
        writer.write_record([
            row.simulation.as_str(),
            row.indicator.as_str(),
            datetime.as_str(),
            row.zone.as_str(),
            cell_text(row.value.as_ref()).as_str(),
        ])?;
    }
    Ok(())
}

/// Renders the table into a string.
pub fn render_ultra_long(rows: &[UltraLongRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_ultra_long_table(&mut writer, rows)?;
    let bytes = writer
        .into_inner()
        .map_err(|err| OutputError::Csv(csv::Error::from(err.into_error())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes the table to `path`, creating its parent directory.
pub fn write_ultra_long(path: &Path, rows: &[UltraLongRow], format: ExportFormat) -> Result<()> {
    format.ensure_available()?;
    ensure_parent_dir(path)?;
    let mut writer = csv_writer(path)?;
    write_ultra_long_table(&mut writer, rows)?;
    finish(writer, path)?;
    info!(path = %path.display(), rows = rows.len(), "wrote ultra-long table");
    Ok(())
}
