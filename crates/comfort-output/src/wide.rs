//! One wide table per indicator.
//!
//! Time series are written as a `DateTime` column followed by one column per
//! zone (or `Environment`). Per-zone totals and the global aggregate have no
//! time axis and are written as `Zone,<indicator>` rows.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use comfort_common::format_timestamp;
use comfort_model::{GLOBAL_ZONE, Indicator, IndicatorOutput, IndicatorSet};

use crate::common::{cell_text, csv_writer, ensure_dir, finish, number_text};
use crate::error::Result;
use crate::format::ExportFormat;

/// Header of the time column in wide tables.
pub const DATETIME_HEADER: &str = "DateTime";
/// Header of the zone column in aggregate tables.
pub const ZONE_HEADER: &str = "Zone";

/// File name of one indicator's wide table, e.g. `IOD_Base.csv`.
pub fn wide_file_name(indicator: Indicator, simulation: &str, format: ExportFormat) -> String {
    format!(
        "{}_{}.{}",
        indicator.file_stem(),
        simulation,
        format.extension()
    )
}

/// Writes one indicator result as a wide table.
pub fn write_wide_table<W: io::Write>(
    writer: &mut csv::Writer<W>,
    indicator: Indicator,
    output: &IndicatorOutput,
) -> Result<()> {
    match output {
        IndicatorOutput::Series(grid) => {
            let mut header = vec![DATETIME_HEADER.to_string()];
            header.extend(grid.columns().iter().cloned());
            writer.write_record(&header)?;
            for (timestamp, cells) in grid.rows() {
                let mut record = vec![format_timestamp(timestamp)];
                record.extend(cells.iter().map(|cell| cell_text(cell.as_ref())));
                writer.write_record(&record)?;
            }
        }
        IndicatorOutput::ZoneTotals(totals) => {
            writer.write_record([ZONE_HEADER, indicator.name()])?;
            for (zone, value) in &totals.values {
                writer.write_record([zone.clone(), number_text(*value)])?;
            }
        }
        IndicatorOutput::Global(value) => {
            writer.write_record([ZONE_HEADER, indicator.name()])?;
            writer.write_record([GLOBAL_ZONE.to_string(), number_text(*value)])?;
        }
    }
    Ok(())
}

/// Writes every result of `set` into `dir`, one file per indicator.
///
/// Returns the written paths in result order.
pub fn write_wide_outputs(
    dir: &Path,
    set: &IndicatorSet,
    format: ExportFormat,
) -> Result<Vec<PathBuf>> {
    format.ensure_available()?;
    ensure_dir(dir)?;

    let mut written = Vec::with_capacity(set.outputs.len());
    for (indicator, output) in &set.outputs {
        let path = dir.join(wide_file_name(*indicator, &set.simulation, format));
        let mut writer = csv_writer(&path)?;
        write_wide_table(&mut writer, *indicator, output)?;
        finish(writer, &path)?;
        debug!(indicator = %indicator, path = %path.display(), "wrote wide table");
        written.push(path);
    }
    info!(
        simulation = %set.simulation,
        files = written.len(),
        dir = %dir.display(),
        "wrote indicator tables"
    );
    Ok(written)
}
