//! Per-zone thermal summary: the normalized inputs behind the indicators,
//! one row per zone record, separated by semicolons.

use std::io;
use std::path::Path;

use tracing::info;

use comfort_common::format_timestamp;
use comfort_model::{NormalizedDataset, NormalizedRecord, VariableRole};

use crate::common::{delimited_csv_writer, ensure_parent_dir, finish, number_text};
use crate::error::{OutputError, Result};
use crate::format::ExportFormat;

pub const THERMAL_DELIMITER: u8 = b';';

/// One exported column and the variable role it is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThermalColumn {
    pub name: &'static str,
    pub role: Option<VariableRole>,
}

impl ThermalColumn {
    const fn new(name: &'static str, role: Option<VariableRole>) -> Self {
        Self { name, role }
    }
}

/// Columns in export order; `Date/Time` first and `Zone` last.
pub const THERMAL_COLUMNS: [ThermalColumn; 9] = [
    ThermalColumn::new("Date/Time", None),
    ThermalColumn::new("Relative_Humidity", Some(VariableRole::RelativeHumidity)),
    ThermalColumn::new("Occupancy", Some(VariableRole::Occupancy)),
    ThermalColumn::new("Air_Temperature", Some(VariableRole::AirTemperature)),
    ThermalColumn::new(
        "Mean_Radiant_Temperature",
        Some(VariableRole::MeanRadiantTemperature),
    ),
    ThermalColumn::new(
        "Operative_Temperature",
        Some(VariableRole::OperativeTemperature),
    ),
    ThermalColumn::new(
        "Outdoor_Dry_Bulb_Temperature",
        Some(VariableRole::OutdoorDryBulb),
    ),
    ThermalColumn::new(
        "Outdoor_Dewpoint_Temperature",
        Some(VariableRole::OutdoorDewpoint),
    ),
    ThermalColumn::new("Zone", None),
];

fn measurements(record: &NormalizedRecord) -> [Option<f64>; 7] {
    [
        record.relative_humidity,
        record.occupancy_count,
        record.air_temperature,
        record.mean_radiant_temperature,
        record.operative_temperature,
        record.outdoor_dry_bulb,
        record.outdoor_dewpoint,
    ]
}

/// Non-null count of one exported column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnCoverage {
    pub column: ThermalColumn,
    pub present: usize,
    pub total: usize,
}

impl ColumnCoverage {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * self.present as f64 / self.total as f64
        }
    }
}

/// Coverage of every column over all zone records.
pub fn thermal_coverage(data: &NormalizedDataset) -> Vec<ColumnCoverage> {
    let records = data.zones.iter().flat_map(|series| &series.records);
    let mut present = [0usize; 7];
    let mut total = 0;
    for record in records {
        total += 1;
        for (count, value) in present.iter_mut().zip(measurements(record)) {
            if value.is_some() {
                *count += 1;
            }
        }
    }
    THERMAL_COLUMNS
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let present = match index {
                0 | 8 => total,
                measured => present[measured - 1],
            };
            ColumnCoverage {
                column: *column,
                present,
                total,
            }
        })
        .collect()
}

/// Writes the header and one row per zone record, zone by zone.
///
/// Returns the number of data rows.
pub fn write_thermal_table<W: io::Write>(
    writer: &mut csv::Writer<W>,
    data: &NormalizedDataset,
) -> Result<usize> {
    writer.write_record(THERMAL_COLUMNS.iter().map(|column| column.name))?;
    let mut rows = 0;
    for series in &data.zones {
        for record in &series.records {
            let mut fields = Vec::with_capacity(THERMAL_COLUMNS.len());
            fields.push(format_timestamp(&record.timestamp));
            fields.extend(measurements(record).into_iter().map(number_text));
            fields.push(series.zone.clone());
            writer.write_record(&fields)?;
            rows += 1;
        }
    }
    Ok(rows)
}

/// Renders the table into a string.
pub fn render_thermal_table(data: &NormalizedDataset) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(THERMAL_DELIMITER)
        .from_writer(Vec::new());
    write_thermal_table(&mut writer, data)?;
    let bytes = writer
        .into_inner()
        .map_err(|err| OutputError::Csv(csv::Error::from(err.into_error())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes the summary to `path` and returns its column coverage.
pub fn write_thermal_summary(
    path: &Path,
    data: &NormalizedDataset,
    format: ExportFormat,
) -> Result<Vec<ColumnCoverage>> {
    format.ensure_available()?;
    ensure_parent_dir(path)?;
    let mut writer = delimited_csv_writer(path, THERMAL_DELIMITER)?;
    let rows = write_thermal_table(&mut writer, data)?;
    finish(writer, path)?;
    info!(
        path = %path.display(),
        rows,
        zones = data.zones.len(),
        "wrote thermal summary"
    );
    Ok(thermal_coverage(data))
}
