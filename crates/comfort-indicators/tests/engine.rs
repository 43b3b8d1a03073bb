use chrono::{Duration, NaiveDate, NaiveDateTime};
use comfort_indicators::ddh::contribution;
use comfort_indicators::{
    DiscomfortLevel, HeatIndexLevel, IndicatorEngine, discomfort_index, heat_index,
};
use comfort_model::{
    ComfortOptions, ENVIRONMENT_COLUMN, EnvironmentRecord, GridValue, NormalizedDataset,
    NormalizedRecord, Observation, WideGrid, ZoneSeries,
};
use proptest::prelude::*;

fn hour(offset: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 7, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        + Duration::hours(offset)
}

fn record(offset: i64, operative: f64, occupancy: f64, outdoor: f64) -> NormalizedRecord {
    NormalizedRecord {
        operative_temperature: Some(operative),
        air_temperature: Some(operative),
        relative_humidity: Some(60.0),
        occupancy_count: Some(occupancy),
        outdoor_dry_bulb: Some(outdoor),
        ..NormalizedRecord::empty(hour(offset))
    }
}

fn dataset(zones: Vec<ZoneSeries>, outdoor: &[Option<f64>]) -> NormalizedDataset {
    NormalizedDataset {
        zones,
        environment: outdoor
            .iter()
            .enumerate()
            .map(|(offset, value)| EnvironmentRecord {
                timestamp: hour(offset as i64),
                outdoor_dry_bulb: *value,
                outdoor_dewpoint: None,
            })
            .collect(),
    }
}

fn numbers(observations: &[Observation]) -> Vec<Option<f64>> {
    observations
        .iter()
        .map(|observation| observation.value.as_ref().and_then(GridValue::as_f64))
        .collect()
}

#[test]
fn iod_is_null_when_unoccupied() {
    let data = dataset(
        vec![ZoneSeries {
            zone: "Z1".to_string(),
            records: vec![record(0, 30.0, 0.0, 25.0), record(1, 30.0, 1.0, 25.0)],
        }],
        &[Some(25.0), Some(25.0)],
    );
    let options = ComfortOptions::default();
    let iod = IndicatorEngine::new(&options).iod(&data);
    assert_eq!(numbers(&iod), vec![None, Some(3.5)]);
    assert_eq!(iod[1].column, "Z1");
}

#[test]
fn awd_is_environmental() {
    let data = dataset(Vec::new(), &[Some(20.0), Some(10.0), None]);
    let options = ComfortOptions::default();
    let awd = IndicatorEngine::new(&options).awd(&data);
    assert_eq!(numbers(&awd), vec![Some(2.0), Some(0.0), None]);
    assert!(awd.iter().all(|observation| observation.column == ENVIRONMENT_COLUMN));
}

#[test]
fn alpha_aligns_on_iod_index() {
    let mut iod = WideGrid::new(vec!["Z1".to_string(), "Z2".to_string()]);
    iod.insert_row(hour(0), vec![Some(GridValue::Number(1.5)), None]);
    iod.insert_row(hour(1), vec![Some(GridValue::Number(1.0)), Some(GridValue::Number(2.0))]);
    let mut awd = WideGrid::new(vec![ENVIRONMENT_COLUMN.to_string()]);
    awd.insert_row(hour(0), vec![Some(GridValue::Number(2.0))]);
    awd.insert_row(hour(1), vec![Some(GridValue::Number(0.0))]);
    awd.insert_row(hour(2), vec![Some(GridValue::Number(5.0))]);

    let options = ComfortOptions::default();
    let alpha = IndicatorEngine::new(&options).alpha(&iod, &awd);
    assert_eq!(alpha.height(), 2);
    assert_eq!(alpha.get(&hour(0), "Z1"), Some(&GridValue::Number(0.75)));
    assert_eq!(alpha.get(&hour(0), "Z2"), None);
    assert_eq!(alpha.get(&hour(1), "Z1"), None);
    assert_eq!(alpha.get(&hour(1), "Z2"), None);
}

#[test]
fn discomfort_pairs_outdoor_temperature_with_zone_humidity() {
    let mut zone = vec![record(0, 25.0, 1.0, 30.0), record(1, 25.0, 1.0, 30.0)];
    zone[0].relative_humidity = Some(50.0);
    let mut data = dataset(
        vec![ZoneSeries {
            zone: "Z1".to_string(),
            records: zone,
        }],
        &[Some(30.0), Some(30.0)],
    );
    // A dry dew point would imply about 29 % humidity; it must not be used.
    data.environment[0].outdoor_dewpoint = Some(10.0);
    let options = ComfortOptions::default();
    let di = numbers(&IndicatorEngine::new(&options).discomfort_index(&data));
    assert_eq!(di[0], discomfort_index(Some(30.0), Some(50.0)));
    assert!((di[0].unwrap() - 26.148).abs() < 0.01, "di = {:?}", di[0]);
    assert_eq!(di[1], discomfort_index(Some(30.0), Some(60.0)));

    let levels = IndicatorEngine::new(&options).discomfort_index_levels(&data);
    assert_eq!(
        levels[1].value,
        Some(GridValue::Category(
            DiscomfortLevel::classify(di[1]).label().to_string()
        ))
    );
}

#[test]
fn discomfort_without_zone_humidity_is_null() {
    let data = dataset(Vec::new(), &[Some(30.0)]);
    let options = ComfortOptions::default();
    let di = numbers(&IndicatorEngine::new(&options).discomfort_index(&data));
    assert_eq!(di, vec![None]);
}

#[test]
fn heat_index_levels_mark_missing_as_invalid() {
    let mut missing = record(0, 30.0, 1.0, 25.0);
    missing.operative_temperature = None;
    let data = dataset(
        vec![ZoneSeries {
            zone: "Z1".to_string(),
            records: vec![missing, record(1, 22.0, 1.0, 25.0)],
        }],
        &[Some(25.0), Some(25.0)],
    );
    let options = ComfortOptions::default();
    let levels = IndicatorEngine::new(&options).heat_index_levels(&data);
    assert_eq!(levels[0].value, Some(GridValue::Category("INVALID DATA".to_string())));
    assert_eq!(
        levels[1].value,
        Some(GridValue::Category("SAFE CONDITION".to_string()))
    );
}

#[test]
fn ddh_contributions_follow_running_mean() {
    // Warm outdoor history gives a limit of 0.33·25 + 18.8 + 4 = 31.05.
    let records = (0..3).map(|offset| record(offset, 33.05, 1.0, 25.0)).collect();
    let data = dataset(
        vec![ZoneSeries {
            zone: "Z1".to_string(),
            records,
        }],
        &[Some(25.0); 3],
    );
    let options = ComfortOptions::default();
    let ddh = numbers(&IndicatorEngine::new(&options).ddh_contributions(&data));
    for value in ddh {
        assert!((value.unwrap() - 2.0).abs() < 1e-9);
    }
}

proptest! {
    #[test]
    fn heat_index_is_identity_when_cool_or_dry(t in -20.0f64..26.7, rh in 0.0f64..100.0) {
        prop_assert_eq!(heat_index(Some(t), Some(rh)), Some(t));
    }

    #[test]
    fn heat_index_is_identity_when_dry(t in 26.7f64..50.0, rh in 0.0f64..39.99) {
        prop_assert_eq!(heat_index(Some(t), Some(rh)), Some(t));
    }

    #[test]
    fn heat_index_level_never_invalid_for_finite_values(value in -50.0f64..100.0) {
        prop_assert_ne!(HeatIndexLevel::classify(Some(value)), HeatIndexLevel::InvalidData);
    }

    #[test]
    fn raising_operative_never_lowers_ddh(
        top in 10.0f64..45.0,
        delta in 0.0f64..10.0,
        running_mean in -5.0f64..35.0,
        occupied in any::<bool>(),
    ) {
        let low = contribution(Some(top), Some(running_mean), occupied).unwrap();
        let high = contribution(Some(top + delta), Some(running_mean), occupied).unwrap();
        prop_assert!(high >= low);
        prop_assert!(low >= 0.0);
    }
}
