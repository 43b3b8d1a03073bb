//! Laying observations out as timestamp × column grids.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use comfort_model::{GridValue, LongRow, MergeRule, Observation, WideGrid};

#[derive(Debug, Clone, Default)]
enum Cell {
    #[default]
    Empty,
    Sum { total: f64, count: usize },
    Total(f64),
    Value(GridValue),
}

impl Cell {
    fn push(&mut self, value: &GridValue, rule: MergeRule) {
        match (rule, value) {
            (MergeRule::Mean, GridValue::Number(number)) => match self {
                Cell::Empty => {
                    *self = Cell::Sum {
                        total: *number,
                        count: 1,
                    };
                }
                Cell::Sum { total, count } => {
                    *total += number;
                    *count += 1;
                }
                _ => {}
            },
            (MergeRule::Sum, GridValue::Number(number)) => match self {
                Cell::Empty => *self = Cell::Total(*number),
                Cell::Total(total) => *total += number,
                _ => {}
            },
            _ => {
                if matches!(self, Cell::Empty) {
                    *self = Cell::Value(value.clone());
                }
            }
        }
    }

    fn finish(self) -> Option<GridValue> {
        match self {
            Cell::Empty => None,
            Cell::Sum { total, count } => Some(GridValue::Number(total / count as f64)),
            Cell::Total(total) => Some(GridValue::Number(total)),
            Cell::Value(value) => Some(value),
        }
    }
}

/// Pivots observations into a wide grid.
///
/// Columns appear in first-seen order. Several observations for the same
/// timestamp and column collapse according to `rule`; null observations
/// still create their row but never displace a value.
pub fn to_wide(observations: &[Observation], rule: MergeRule) -> WideGrid {
    let mut columns: Vec<String> = Vec::new();
    let mut rows: BTreeMap<NaiveDateTime, Vec<Cell>> = BTreeMap::new();
    for observation in observations {
        let position = match columns.iter().position(|column| *column == observation.column) {
            Some(position) => position,
            None => {
                columns.push(observation.column.clone());
                columns.len() - 1
            }
        };
        let row = rows.entry(observation.timestamp).or_default();
        if row.len() <= position {
            row.resize(position + 1, Cell::Empty);
        }
        if let Some(value) = &observation.value {
            row[position].push(value, rule);
        }
    }

    let mut grid = WideGrid::new(columns);
    for (timestamp, cells) in rows {
        grid.insert_row(timestamp, cells.into_iter().map(Cell::finish).collect());
    }
    grid
}

/// Unpivots a grid into one row per non-null cell, in timestamp then
/// column order.
pub fn to_long(grid: &WideGrid) -> Vec<LongRow> {
    let mut rows = Vec::new();
    for (timestamp, cells) in grid.rows() {
        for (column, cell) in grid.columns().iter().zip(cells) {
            if let Some(value) = cell {
                rows.push(LongRow {
                    timestamp: *timestamp,
                    zone: column.clone(),
                    value: value.clone(),
                });
            }
        }
    }
    rows
}

/// Rebuilds a grid from long rows; the first value per cell wins.
pub fn from_long(rows: &[LongRow]) -> WideGrid {
    let observations: Vec<Observation> = rows
        .iter()
        .map(|row| Observation {
            timestamp: row.timestamp,
            column: row.zone.clone(),
            value: Some(row.value.clone()),
        })
        .collect();
    to_wide(&observations, MergeRule::First)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 8, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_duplicate_numbers_average() {
        let observations = vec![
            Observation::number(at(1), "Z1", Some(1.0)),
            Observation::number(at(1), "Z1", Some(3.0)),
            Observation::number(at(1), "Z1", None),
        ];
        let grid = to_wide(&observations, MergeRule::Mean);
        assert_eq!(grid.get(&at(1), "Z1"), Some(&GridValue::Number(2.0)));
    }

    #[test]
    fn test_duplicate_numbers_sum() {
        let observations = vec![
            Observation::number(at(1), "Z1", Some(2.0)),
            Observation::number(at(1), "Z1", None),
            Observation::number(at(1), "Z1", Some(2.0)),
            Observation::number(at(2), "Z1", Some(0.5)),
        ];
        let grid = to_wide(&observations, MergeRule::Sum);
        assert_eq!(grid.get(&at(1), "Z1"), Some(&GridValue::Number(4.0)));
        assert_eq!(grid.get(&at(2), "Z1"), Some(&GridValue::Number(0.5)));
    }

    #[test]
    fn test_duplicate_categories_keep_first() {
        let observations = vec![
            Observation::category(at(1), "Z1", "CAUTION"),
            Observation::category(at(1), "Z1", "DANGER"),
        ];
        let grid = to_wide(&observations, MergeRule::Mean);
        assert_eq!(
            grid.get(&at(1), "Z1"),
            Some(&GridValue::Category("CAUTION".to_string()))
        );
    }

    #[test]
    fn test_first_rule_ignores_later_numbers() {
        let observations = vec![
            Observation::number(at(2), "Environment", Some(4.0)),
            Observation::number(at(2), "Environment", Some(8.0)),
        ];
        let grid = to_wide(&observations, MergeRule::First);
        assert_eq!(grid.get(&at(2), "Environment"), Some(&GridValue::Number(4.0)));
    }

    #[test]
    fn test_null_only_rows_are_kept() {
        let observations = vec![
            Observation::number(at(1), "Z1", None),
            Observation::number(at(2), "Z2", Some(1.0)),
        ];
        let grid = to_wide(&observations, MergeRule::Mean);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.columns(), ["Z1".to_string(), "Z2".to_string()]);
        assert_eq!(grid.row(&at(1)).unwrap(), [None, None]);
    }

    #[test]
    fn test_long_skips_nulls() {
        let observations = vec![
            Observation::number(at(1), "Z1", Some(1.0)),
            Observation::number(at(1), "Z2", None),
        ];
        let rows = to_long(&to_wide(&observations, MergeRule::Mean));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].zone, "Z1");
    }
}
