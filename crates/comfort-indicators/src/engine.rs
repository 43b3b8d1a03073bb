//! Applies the indicator formulas to normalized datasets.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use tracing::debug;

use comfort_model::{
    ComfortOptions, ENVIRONMENT_COLUMN, GridValue, NormalizedDataset, NormalizedRecord, Observation,
    WideGrid,
};

use crate::ddh::{contribution, trailing_mean};
use crate::discomfort::{DiscomfortLevel, discomfort_index};
use crate::heat_index::{HeatIndexLevel, heat_index};
use crate::overheating::{alpha, ambient_warmness_degree, indoor_overheating_degree};

/// Computes indicator values with the thresholds of one configuration.
///
/// Zone indicators yield one observation per zone record; environmental
/// ones yield one observation per timestamp under [`ENVIRONMENT_COLUMN`].
#[derive(Debug, Clone, Copy)]
pub struct IndicatorEngine<'a> {
    options: &'a ComfortOptions,
}

impl<'a> IndicatorEngine<'a> {
    pub fn new(options: &'a ComfortOptions) -> Self {
        Self { options }
    }

    /// Indoor overheating degree; unoccupied hours are null.
    pub fn iod(&self, data: &NormalizedDataset) -> Vec<Observation> {
        zone_observations(data, |record| {
            indoor_overheating_degree(
                record.operative_temperature,
                record.occupancy_count,
                self.options.comfort_temp,
            )
        })
    }

    /// Ambient warmness degree over every timestamp.
    pub fn awd(&self, data: &NormalizedDataset) -> Vec<Observation> {
        data.environment
            .iter()
            .map(|record| {
                Observation::number(
                    record.timestamp,
                    ENVIRONMENT_COLUMN,
                    ambient_warmness_degree(record.outdoor_dry_bulb, self.options.base_temp),
                )
            })
            .collect()
    }

    /// Alpha on the IOD index, dividing by the AWD at the same timestamp.
    ///
    /// The result keeps the IOD grid's columns and timestamps.
    pub fn alpha(&self, iod: &WideGrid, awd: &WideGrid) -> WideGrid {
        let mut grid = WideGrid::new(iod.columns().to_vec());
        for (timestamp, cells) in iod.rows() {
            let denominator = awd
                .get(timestamp, ENVIRONMENT_COLUMN)
                .and_then(GridValue::as_f64);
            let row = cells
                .iter()
                .map(|cell| {
                    alpha(cell.as_ref().and_then(GridValue::as_f64), denominator)
                        .map(GridValue::Number)
                })
                .collect();
            grid.insert_row(*timestamp, row);
        }
        grid
    }

    /// Heat index from zone operative temperature and humidity.
    pub fn heat_index(&self, data: &NormalizedDataset) -> Vec<Observation> {
        zone_observations(data, |record| {
            heat_index(record.operative_temperature, record.relative_humidity)
        })
    }

    /// Heat index risk band per zone record.
    pub fn heat_index_levels(&self, data: &NormalizedDataset) -> Vec<Observation> {
        data.zones
            .iter()
            .flat_map(|series| {
                series.records.iter().map(move |record| {
                    let level = HeatIndexLevel::classify(heat_index(
                        record.operative_temperature,
                        record.relative_humidity,
                    ));
                    Observation::category(record.timestamp, series.zone.as_str(), level.label())
                })
            })
            .collect()
    }

    /// Discomfort index from outdoor conditions.
    pub fn discomfort_index(&self, data: &NormalizedDataset) -> Vec<Observation> {
        outdoor_discomfort(data)
            .into_iter()
            .map(|(timestamp, di)| Observation::number(timestamp, ENVIRONMENT_COLUMN, di))
            .collect()
    }

    /// Discomfort band per timestamp.
    pub fn discomfort_index_levels(&self, data: &NormalizedDataset) -> Vec<Observation> {
        outdoor_discomfort(data)
            .into_iter()
            .map(|(timestamp, di)| {
                Observation::category(
                    timestamp,
                    ENVIRONMENT_COLUMN,
                    DiscomfortLevel::classify(di).label(),
                )
            })
            .collect()
    }

    /// Hourly degree-weighted discomfort contributions.
    ///
    /// The running mean is taken over each zone's own record sequence.
    /// These are summed per zone once the time window is applied.
    pub fn ddh_contributions(&self, data: &NormalizedDataset) -> Vec<Observation> {
        let window = self.options.running_mean_window;
        let mut observations = Vec::new();
        for series in &data.zones {
            let outdoor: Vec<Option<f64>> = series
                .records
                .iter()
                .map(|record| record.outdoor_dry_bulb)
                .collect();
            let running = trailing_mean(&outdoor, window);
            for (record, running_mean) in series.records.iter().zip(running) {
                observations.push(Observation::number(
                    record.timestamp,
                    series.zone.as_str(),
                    contribution(
                        record.operative_temperature,
                        running_mean,
                        record.is_occupied(),
                    ),
                ));
            }
        }
        debug!(observations = observations.len(), window, "computed DDH contributions");
        observations
    }
}

fn zone_observations(
    data: &NormalizedDataset,
    value: impl Fn(&NormalizedRecord) -> Option<f64>,
) -> Vec<Observation> {
    let value = &value;
    data.zones
        .iter()
        .flat_map(|series| {
            series.records.iter().map(move |record| {
                Observation::number(record.timestamp, series.zone.as_str(), value(record))
            })
        })
        .collect()
}

/// Discomfort index per environment timestamp.
///
/// The outdoor dry bulb pairs with the first zone's clipped relative humidity
/// at the same timestamp; the dew point does not enter the index.
fn outdoor_discomfort(data: &NormalizedDataset) -> Vec<(NaiveDateTime, Option<f64>)> {
    let mut zone_humidity: HashMap<NaiveDateTime, Option<f64>> = HashMap::new();
    if let Some(series) = data.zones.first() {
        for record in &series.records {
            zone_humidity
                .entry(record.timestamp)
                .or_insert(record.relative_humidity);
        }
    }
    data.environment
        .iter()
        .map(|record| {
            let humidity = zone_humidity.get(&record.timestamp).copied().flatten();
            (
                record.timestamp,
                discomfort_index(record.outdoor_dry_bulb, humidity),
            )
        })
        .collect()
}
