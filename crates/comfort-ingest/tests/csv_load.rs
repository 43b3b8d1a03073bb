use std::fs;

use comfort_ingest::{IngestError, read_raw_csv};
use tempfile::tempdir;

#[test]
fn loads_energyplus_style_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("eplusout.csv");
    fs::write(
        &path,
        "Date/Time,Environment:Site Outdoor Air Drybulb Temperature [C](Hourly),P:Z1:Zone Mean Air Temperature [C](Hourly:ON)\n\
          07/01  01:00:00,21.5,25.0\n\
          07/01  02:00:00,20.0,\n",
    )
    .unwrap();

    let dataset = read_raw_csv(&path).unwrap();
    assert_eq!(dataset.height(), 2);
    assert_eq!(dataset.labels()[0].trim(), "07/01  01:00:00");
    assert_eq!(
        dataset.number(
            "Environment:Site Outdoor Air Drybulb Temperature [C](Hourly)",
            1
        ),
        Some(20.0)
    );
    assert_eq!(
        dataset.number("P:Z1:Zone Mean Air Temperature [C](Hourly:ON)", 1),
        None
    );
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().unwrap();
    let result = read_raw_csv(&dir.path().join("absent.csv"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn header_only_file_is_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "Date/Time,A\n").unwrap();
    assert!(matches!(
        read_raw_csv(&path),
        Err(IngestError::EmptyCsv { .. })
    ));
}

#[test]
fn csv_without_timestamp_column_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_time.csv");
    fs::write(&path, "A,B\n1,2\n").unwrap();
    assert!(matches!(
        read_raw_csv(&path),
        Err(IngestError::MissingTimeColumn { .. })
    ));
}
