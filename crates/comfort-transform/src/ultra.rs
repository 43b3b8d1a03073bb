//! Fully normalized `(Simulation, Indicator, DateTime, Zone, Value)` rows.

use comfort_model::{
    GLOBAL_ZONE, GridValue, Indicator, IndicatorOutput, IndicatorSet, UltraLongRow,
};

/// Rows for one indicator result.
///
/// Time series contribute one row per non-null cell. Per-zone totals and
/// the global aggregate carry no timestamp; the global aggregate uses the
/// `values` zone sentinel and is emitted even when it is null.
pub fn to_ultra_long(
    output: &IndicatorOutput,
    simulation: &str,
    indicator: Indicator,
) -> Vec<UltraLongRow> {
    let row = |datetime, zone: &str, value| UltraLongRow {
        simulation: simulation.to_string(),
        indicator: indicator.name().to_string(),
        datetime,
        zone: zone.to_string(),
        value,
    };
    match output {
        IndicatorOutput::Series(grid) => {
            let mut rows = Vec::new();
            for (timestamp, cells) in grid.rows() {
                for (column, cell) in grid.columns().iter().zip(cells) {
                    if let Some(value) = cell {
                        rows.push(row(Some(*timestamp), column, Some(value.clone())));
                    }
                }
            }
            rows
        }
        IndicatorOutput::ZoneTotals(totals) => totals
            .values
            .iter()
            .filter_map(|(zone, value)| {
                value.map(|value| row(None, zone, Some(GridValue::Number(value))))
            })
            .collect(),
        IndicatorOutput::Global(value) => {
            vec![row(None, GLOBAL_ZONE, value.map(GridValue::Number))]
        }
    }
}

/// Every result of `set` as ultra-long rows, sorted.
pub fn set_to_ultra_long(set: &IndicatorSet) -> Vec<UltraLongRow> {
    let mut rows: Vec<UltraLongRow> = set
        .outputs
        .iter()
        .flat_map(|(indicator, output)| to_ultra_long(output, &set.simulation, *indicator))
        .collect();
    sort_ultra_long(&mut rows);
    rows
}

/// Orders rows by indicator name, zone, then timestamp; aggregate rows
/// without a timestamp come first within their zone.
pub fn sort_ultra_long(rows: &mut [UltraLongRow]) {
    rows.sort_by(|a, b| {
        a.indicator
            .cmp(&b.indicator)
            .then_with(|| a.zone.cmp(&b.zone))
            .then_with(|| a.datetime.cmp(&b.datetime))
    });
}
