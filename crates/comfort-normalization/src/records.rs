//! Builds per-zone normalized records from a raw dataset.

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use comfort_model::{
    ComfortOptions, EnvironmentRecord, NormalizedDataset, NormalizedRecord, RawDataset,
    VariableRole, VariableSpec, ZoneColumns, ZoneSeries, ZoneVariableMap,
};

use crate::time::TimeNormalizer;

/// Reads scaled numeric cells for resolved columns.
struct CellReader<'a> {
    dataset: &'a RawDataset,
    spec: &'a VariableSpec,
}

impl CellReader<'_> {
    fn read(&self, column: Option<&str>, role: VariableRole, row: usize) -> Option<f64> {
        let value = self.dataset.number(column?, row)?;
        Some(value * self.spec.scale(role))
    }
}

/// Stamps every row with an absolute time and derives the per-zone
/// variables.
///
/// Rows whose label does not parse are dropped from every series and
/// counted in the log. Records are returned in timestamp order.
pub fn normalize_dataset(
    dataset: &RawDataset,
    map: &ZoneVariableMap,
    spec: &VariableSpec,
    options: &ComfortOptions,
) -> NormalizedDataset {
    let stamps = TimeNormalizer::new(options.year).normalize(dataset.labels());
    let dropped = stamps.iter().filter(|stamp| stamp.is_none()).count();
    let reader = CellReader { dataset, spec };

    let dry_bulb = map.environment_column(VariableRole::OutdoorDryBulb);
    let dewpoint = map.environment_column(VariableRole::OutdoorDewpoint);
    let mut environment: Vec<EnvironmentRecord> = valid_rows(&stamps)
        .map(|(row, timestamp)| EnvironmentRecord {
            timestamp,
            outdoor_dry_bulb: reader.read(dry_bulb, VariableRole::OutdoorDryBulb, row),
            outdoor_dewpoint: reader.read(dewpoint, VariableRole::OutdoorDewpoint, row),
        })
        .collect();
    environment.sort_by_key(|record| record.timestamp);

    let mut zones = Vec::with_capacity(map.zones.len());
    for columns in &map.zones {
        if dropped > 0 {
            warn!(
                zone = %columns.zone,
                dropped,
                "dropped rows with unparseable timestamps"
            );
        }
        let series = build_zone_series(columns, &stamps, &reader, map, options);
        debug!(zone = %series.zone, records = series.records.len(), "normalized zone");
        zones.push(series);
    }

    info!(
        zones = zones.len(),
        timestamps = environment.len(),
        dropped,
        "normalized simulation output"
    );
    NormalizedDataset { zones, environment }
}

fn valid_rows(
    stamps: &[Option<NaiveDateTime>],
) -> impl Iterator<Item = (usize, NaiveDateTime)> + '_ {
    stamps
        .iter()
        .enumerate()
        .filter_map(|(row, stamp)| stamp.map(|timestamp| (row, timestamp)))
}

fn build_zone_series(
    columns: &ZoneColumns,
    stamps: &[Option<NaiveDateTime>],
    reader: &CellReader<'_>,
    map: &ZoneVariableMap,
    options: &ComfortOptions,
) -> ZoneSeries {
    let humidity_column = columns.column(VariableRole::RelativeHumidity);
    let occupancy_column = columns.column(VariableRole::Occupancy);
    if humidity_column.is_none() {
        debug!(
            zone = %columns.zone,
            default = options.default_relative_humidity,
            "using default relative humidity"
        );
    }
    if occupancy_column.is_none() {
        debug!(
            zone = %columns.zone,
            default = options.default_occupancy,
            "using default occupancy"
        );
    }

    let mut records: Vec<NormalizedRecord> = valid_rows(stamps)
        .map(|(row, timestamp)| {
            let air = reader.read(
                columns.column(VariableRole::AirTemperature),
                VariableRole::AirTemperature,
                row,
            );
            let radiant = reader.read(
                columns.column(VariableRole::MeanRadiantTemperature),
                VariableRole::MeanRadiantTemperature,
                row,
            );
            let direct = reader.read(
                columns.column(VariableRole::OperativeTemperature),
                VariableRole::OperativeTemperature,
                row,
            );
            let relative_humidity = match humidity_column {
                Some(_) => reader
                    .read(humidity_column, VariableRole::RelativeHumidity, row)
                    .map(|rh| rh.clamp(0.0, 100.0)),
                None => Some(options.default_relative_humidity),
            };
            let occupancy_count = match occupancy_column {
                Some(_) => reader
                    .read(occupancy_column, VariableRole::Occupancy, row)
                    .map(|count| count.max(0.0)),
                None => Some(options.default_occupancy),
            };
            NormalizedRecord {
                timestamp,
                air_temperature: air,
                relative_humidity,
                mean_radiant_temperature: radiant,
                operative_temperature: operative_temperature(direct, air, radiant),
                occupancy_count,
                outdoor_dry_bulb: reader.read(
                    map.environment_column(VariableRole::OutdoorDryBulb),
                    VariableRole::OutdoorDryBulb,
                    row,
                ),
                outdoor_dewpoint: reader.read(
                    map.environment_column(VariableRole::OutdoorDewpoint),
                    VariableRole::OutdoorDewpoint,
                    row,
                ),
            }
        })
        .collect();
    records.sort_by_key(|record| record.timestamp);

    ZoneSeries {
        zone: columns.zone.clone(),
        records,
    }
}

/// Direct reading, else the mean of air and radiant temperature, else air.
pub fn operative_temperature(
    direct: Option<f64>,
    air: Option<f64>,
    radiant: Option<f64>,
) -> Option<f64> {
    direct.or(match (air, radiant) {
        (Some(air), Some(radiant)) => Some((air + radiant) / 2.0),
        _ => air,
    })
}
