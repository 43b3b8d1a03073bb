use chrono::NaiveDateTime;

use crate::grid::GridValue;

/// One non-null cell of a wide grid.
#[derive(Debug, Clone, PartialEq)]
pub struct LongRow {
    pub timestamp: NaiveDateTime,
    pub zone: String,
    pub value: GridValue,
}

/// Fully normalized output row.
///
/// `datetime` is `None` for aggregates; `value` is `None` only for an
/// aggregate that could not be computed.
#[derive(Debug, Clone, PartialEq)]
pub struct UltraLongRow {
    pub simulation: String,
    pub indicator: String,
    pub datetime: Option<NaiveDateTime>,
    pub zone: String,
    pub value: Option<GridValue>,
}
