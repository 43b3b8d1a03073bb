//! Whole-window reductions of scoped grids.

use comfort_model::{GridValue, ZoneTotals};

use crate::range::ScopedGrid;

/// Sum of every numeric cell per column; missing cells count as zero.
pub fn sum_by_column(scoped: &ScopedGrid) -> ZoneTotals {
    let grid = scoped.grid();
    let values = grid
        .columns()
        .iter()
        .enumerate()
        .map(|(position, column)| {
            let total: f64 = grid
                .column_values(position)
                .filter_map(GridValue::as_f64)
                .sum();
            (column.clone(), Some(total))
        })
        .collect();
    ZoneTotals { values }
}

/// Mean of every numeric cell across all columns; `None` when there is none.
pub fn mean_of_cells(scoped: &ScopedGrid) -> Option<f64> {
    let grid = scoped.grid();
    let (total, count) = (0..grid.columns().len())
        .flat_map(|position| grid.column_values(position))
        .filter_map(GridValue::as_f64)
        .fold((0.0, 0usize), |(total, count), value| (total + value, count + 1));
    (count > 0).then(|| total / count as f64)
}
