//! End-to-end runs over small synthetic EnergyPlus-style datasets.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use comfort_core::{PipelineError, compute_indicators, resolve_columns, thermal_data};
use comfort_map::{
    OUTDOOR_DEWPOINT_COLUMN, OUTDOOR_DRY_BULB_COLUMN, ResolveError, energyplus_variable_spec,
};
use comfort_model::{
    ComfortOptions, DateRange, ENVIRONMENT_COLUMN, GridValue, Indicator,
    IndicatorOutput, IndicatorRequest, RawColumn, RawDataset, VariableRole,
};

const ZONE: &str = "PLANTA:ZONA1";

fn column(zone: &str, variable: &str) -> String {
    format!("{zone}:{variable}")
}

fn operative(zone: &str) -> String {
    column(zone, "Zone Operative Temperature [C](Hourly)")
}

fn air(zone: &str) -> String {
    column(zone, "Zone Mean Air Temperature [C](Hourly:ON)")
}

fn radiant(zone: &str) -> String {
    column(zone, "Zone Mean Radiant Temperature [C](Hourly)")
}

fn humidity(zone: &str) -> String {
    column(zone, "Zone Air Relative Humidity [%](Hourly)")
}

fn people(zone: &str) -> String {
    column(zone, "Zone People Sensible Heating Rate [W](Hourly)")
}

fn at(month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn labels(count: usize) -> Vec<String> {
    (1..=count)
        .map(|hour| format!(" 07/01  {hour:02}:00:00"))
        .collect()
}

/// Single zone over three July hours.
fn three_hours() -> RawDataset {
    RawDataset::new(
        labels(3),
        vec![
            RawColumn::numeric(air(ZONE), vec![Some(27.0), Some(29.0), Some(21.0)]),
            RawColumn::numeric(operative(ZONE), vec![Some(28.0), Some(30.0), Some(20.0)]),
            RawColumn::numeric(people(ZONE), vec![Some(100.0), Some(100.0), Some(0.0)]),
            RawColumn::numeric(
                OUTDOOR_DRY_BULB_COLUMN,
                vec![Some(10.0), Some(20.0), Some(30.0)],
            ),
        ],
    )
    .unwrap()
}

fn number(output: &IndicatorOutput, timestamp: NaiveDateTime, column: &str) -> Option<f64> {
    output
        .as_series()
        .and_then(|grid| grid.get(&timestamp, column))
        .and_then(GridValue::as_f64)
}

#[test]
fn iod_is_null_outside_occupied_hours() {
    let request = IndicatorRequest::new("Base").with_indicators(vec![Indicator::Iod]);
    let set = compute_indicators(&three_hours(), &energyplus_variable_spec(), &request).unwrap();

    let iod = set.get(Indicator::Iod).unwrap();
    assert_eq!(number(iod, at(7, 1, 1), ZONE), Some(1.5));
    assert_eq!(number(iod, at(7, 1, 2), ZONE), Some(3.5));
    assert_eq!(number(iod, at(7, 1, 3), ZONE), None);
    assert_eq!(set.indicators(), vec![Indicator::Iod]);
}

#[test]
fn awd_ignores_occupancy() {
    let request = IndicatorRequest::new("Base").with_indicators(vec![Indicator::Awd]);
    let set = compute_indicators(&three_hours(), &energyplus_variable_spec(), &request).unwrap();

    let awd = set.get(Indicator::Awd).unwrap();
    let grid = awd.as_series().unwrap();
    assert_eq!(grid.columns(), [ENVIRONMENT_COLUMN.to_string()]);
    assert_eq!(number(awd, at(7, 1, 1), ENVIRONMENT_COLUMN), Some(0.0));
    assert_eq!(number(awd, at(7, 1, 2), ENVIRONMENT_COLUMN), Some(2.0));
    assert_eq!(number(awd, at(7, 1, 3), ENVIRONMENT_COLUMN), Some(12.0));
}

#[test]
fn alpha_request_also_yields_alphatot() {
    let request = IndicatorRequest::new("Base").with_indicators(vec![Indicator::Alpha]);
    let set = compute_indicators(&three_hours(), &energyplus_variable_spec(), &request).unwrap();

    assert_eq!(set.indicators(), vec![Indicator::Alpha, Indicator::AlphaTot]);
    let alpha = set.get(Indicator::Alpha).unwrap();
    // AWD is zero at the first hour.
    assert_eq!(number(alpha, at(7, 1, 1), ZONE), None);
    assert_eq!(number(alpha, at(7, 1, 2), ZONE), Some(1.75));
    assert_eq!(
        set.get(Indicator::AlphaTot),
        Some(&IndicatorOutput::Global(Some(1.75)))
    );
}

#[test]
fn alphatot_alone_hides_alpha_series() {
    let request = IndicatorRequest::new("Base").with_indicators(vec![Indicator::AlphaTot]);
    let set = compute_indicators(&three_hours(), &energyplus_variable_spec(), &request).unwrap();

    assert_eq!(set.indicators(), vec![Indicator::AlphaTot]);
    assert_eq!(
        set.get(Indicator::AlphaTot),
        Some(&IndicatorOutput::Global(Some(1.75)))
    );
}

#[test]
fn comfort_temperature_is_configurable() {
    let request = IndicatorRequest::new("Base")
        .with_indicators(vec![Indicator::Iod])
        .with_options(ComfortOptions::new().with_comfort_temp(29.0));
    let set = compute_indicators(&three_hours(), &energyplus_variable_spec(), &request).unwrap();

    let iod = set.get(Indicator::Iod).unwrap();
    assert_eq!(number(iod, at(7, 1, 1), ZONE), Some(0.0));
    assert_eq!(number(iod, at(7, 1, 2), ZONE), Some(1.0));
}

#[test]
fn operative_temperature_falls_back_to_air_and_radiant_mean() {
    let dataset = RawDataset::new(
        labels(2),
        vec![
            RawColumn::numeric(air(ZONE), vec![Some(30.0), Some(26.0)]),
            RawColumn::numeric(radiant(ZONE), vec![Some(32.0), Some(30.0)]),
            RawColumn::numeric(people(ZONE), vec![Some(200.0), Some(100.0)]),
            RawColumn::numeric(OUTDOOR_DRY_BULB_COLUMN, vec![Some(25.0), Some(25.0)]),
        ],
    )
    .unwrap();
    let request = IndicatorRequest::new("Base").with_indicators(vec![Indicator::Iod]);
    let set = compute_indicators(&dataset, &energyplus_variable_spec(), &request).unwrap();

    let iod = set.get(Indicator::Iod).unwrap();
    assert_eq!(number(iod, at(7, 1, 1), ZONE), Some(4.5));
    assert_eq!(number(iod, at(7, 1, 2), ZONE), Some(1.5));
}

#[test]
fn discomfort_index_uses_zone_humidity_not_dewpoint() {
    let dataset = RawDataset::new(
        labels(1),
        vec![
            RawColumn::numeric(air(ZONE), vec![Some(26.0)]),
            RawColumn::numeric(humidity(ZONE), vec![Some(50.0)]),
            RawColumn::numeric(OUTDOOR_DRY_BULB_COLUMN, vec![Some(30.0)]),
            RawColumn::numeric(OUTDOOR_DEWPOINT_COLUMN, vec![Some(10.0)]),
        ],
    )
    .unwrap();
    let request = IndicatorRequest::new("Base").with_indicators(vec![Indicator::Di]);
    let set = compute_indicators(&dataset, &energyplus_variable_spec(), &request).unwrap();

    let di = number(set.get(Indicator::Di).unwrap(), at(7, 1, 1), ENVIRONMENT_COLUMN).unwrap();
    assert!((di - 26.148).abs() < 0.01, "di = {di}");
}

#[test]
fn ddh_sums_contributions_of_repeated_timestamps() {
    let dataset = RawDataset::new(
        vec![" 07/01  01:00:00".to_string(); 2],
        vec![
            RawColumn::numeric(air(ZONE), vec![Some(31.4); 2]),
            RawColumn::numeric(operative(ZONE), vec![Some(31.4); 2]),
            RawColumn::numeric(people(ZONE), vec![Some(100.0); 2]),
            RawColumn::numeric(OUTDOOR_DRY_BULB_COLUMN, vec![Some(20.0); 2]),
        ],
    )
    .unwrap();
    let request = IndicatorRequest::new("Base").with_indicators(vec![Indicator::Ddh]);
    let set = compute_indicators(&dataset, &energyplus_variable_spec(), &request).unwrap();

    // Each row exceeds the 29.4 °C upper limit by 2 °C.
    let Some(IndicatorOutput::ZoneTotals(totals)) = set.get(Indicator::Ddh) else {
        panic!("DDH should be a per-zone total");
    };
    let ddh = totals.get(ZONE).unwrap();
    assert!((ddh - 4.0).abs() < 1e-9, "ddh = {ddh}");
}

/// Hourly rows for the whole of 2020, warmer indoors on June 22.
fn full_year() -> RawDataset {
    let start = at(1, 1, 1);
    let mut labels = Vec::new();
    let mut operative_values = Vec::new();
    for step in 0..8784 {
        let timestamp = start + Duration::hours(step);
        let reported = timestamp - Duration::hours(1);
        labels.push(format!(
            " {:02}/{:02}  {:02}:00:00",
            reported.month(),
            reported.day(),
            reported.hour() + 1
        ));
        let june_22 = timestamp.month() == 6 && timestamp.day() == 22;
        operative_values.push(Some(if june_22 { 31.0 } else { 30.0 }));
    }
    let rows = labels.len();
    RawDataset::new(
        labels,
        vec![
            RawColumn::numeric(air(ZONE), operative_values.clone()),
            RawColumn::numeric(operative(ZONE), operative_values),
            RawColumn::numeric(people(ZONE), vec![Some(100.0); rows]),
            RawColumn::numeric(OUTDOOR_DRY_BULB_COLUMN, vec![Some(20.0); rows]),
        ],
    )
    .unwrap()
}

#[test]
fn date_range_scopes_series_and_aggregates() {
    let request = IndicatorRequest::new("Base")
        .with_indicators(vec![Indicator::Iod, Indicator::Alpha, Indicator::Ddh])
        .with_range(Some(DateRange::new("06/22", "06/22")));
    let set = compute_indicators(&full_year(), &energyplus_variable_spec(), &request).unwrap();

    let iod = set.get(Indicator::Iod).and_then(IndicatorOutput::as_series).unwrap();
    assert_eq!(iod.height(), 24);
    assert_eq!(iod.first_timestamp(), Some(at(6, 22, 0)));

    // Upper comfort limit at a 20 °C running mean is 29.4 °C.
    let Some(IndicatorOutput::ZoneTotals(totals)) = set.get(Indicator::Ddh) else {
        panic!("DDH should be a per-zone total");
    };
    let ddh = totals.get(ZONE).unwrap();
    assert!((ddh - 24.0 * 1.6).abs() < 1e-6, "ddh = {ddh}");

    let Some(IndicatorOutput::Global(Some(alphatot))) = set.get(Indicator::AlphaTot) else {
        panic!("alphatot should be computed");
    };
    assert!((alphatot - 2.25).abs() < 1e-9, "alphatot = {alphatot}");
}

#[test]
fn inverted_range_is_rejected() {
    let request = IndicatorRequest::new("Base")
        .with_indicators(vec![Indicator::Iod])
        .with_range(Some(DateRange::new("08/31", "06/01")));
    let error = compute_indicators(&three_hours(), &energyplus_variable_spec(), &request)
        .expect_err("inverted range");
    assert!(matches!(error, PipelineError::Range(_)));
}

#[test]
fn empty_indicator_list_is_rejected() {
    let request = IndicatorRequest::new("Base").with_indicators(Vec::new());
    let error = compute_indicators(&three_hours(), &energyplus_variable_spec(), &request)
        .expect_err("nothing requested");
    assert!(matches!(error, PipelineError::NoIndicators));
}

#[test]
fn zones_are_discovered_when_none_requested() {
    let map = resolve_columns(&three_hours(), &energyplus_variable_spec(), &[]).unwrap();
    assert_eq!(map.zone_names(), vec![ZONE]);
}

#[test]
fn unknown_zones_fail_resolution() {
    let zones = vec!["PLANTA:ZONA9".to_string()];
    let error = resolve_columns(&three_hours(), &energyplus_variable_spec(), &zones)
        .expect_err("unknown zone");
    assert!(matches!(
        error,
        PipelineError::Resolve(ResolveError::NoZonesResolved { .. })
    ));
}

#[test]
fn missing_outdoor_temperature_is_fatal() {
    let dataset = RawDataset::new(
        labels(1),
        vec![RawColumn::numeric(air(ZONE), vec![Some(25.0)])],
    )
    .unwrap();
    let request = IndicatorRequest::new("Base");
    let error = compute_indicators(&dataset, &energyplus_variable_spec(), &request)
        .expect_err("no outdoor column");
    match error {
        PipelineError::Resolve(ResolveError::MissingEnvironmental { role, .. }) => {
            assert_eq!(role, VariableRole::OutdoorDryBulb);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn thermal_data_is_scoped_to_the_range() {
    let request = IndicatorRequest::new("Base").with_range(Some(DateRange::new("06/22", "06/22")));
    let thermal = thermal_data(&full_year(), &energyplus_variable_spec(), &request).unwrap();

    assert_eq!(thermal.map.zone_names(), vec![ZONE]);
    let records = &thermal.data.zones[0].records;
    assert_eq!(records.len(), 24);
    assert_eq!(records[0].timestamp, at(6, 22, 0));
    assert_eq!(records[0].operative_temperature, Some(31.0));
    assert_eq!(records[0].occupancy_count, Some(1.0));
    assert_eq!(thermal.data.environment.len(), 24);
}
