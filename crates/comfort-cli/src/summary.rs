use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use comfort_common::format_numeric;
use comfort_model::{IndicatorOutput, ZoneVariableMap};
use comfort_output::ColumnCoverage;

use crate::types::{ExportResult, IndicatorsResult, ThermalResult};

pub fn print_indicators_summary(result: &IndicatorsResult) {
    println!("Simulation: {}", result.set.simulation);
    println!("Output: {}", result.output_dir.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Indicator"),
        header_cell("Shape"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Value"),
        header_cell("File"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for ((indicator, output), path) in result.set.outputs.iter().zip(&result.files) {
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (shape, rows, columns, value) = match output {
            IndicatorOutput::Series(grid) => (
                "time series",
                Cell::new(grid.height()),
                Cell::new(grid.columns().len()),
                dim_cell("-"),
            ),
            IndicatorOutput::ZoneTotals(totals) => (
                "per zone",
                Cell::new(totals.values.len()),
                dim_cell("-"),
                dim_cell("-"),
            ),
            IndicatorOutput::Global(value) => (
                "global",
                Cell::new(1),
                dim_cell("-"),
                value_cell(*value),
            ),
        };
        table.add_row(vec![
            Cell::new(indicator.name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(shape),
            rows,
            columns,
            value,
            Cell::new(file),
        ]);
    }
    println!("{table}");
}

pub fn print_export_summary(result: &ExportResult) {
    println!("Output: {}", result.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Simulation"),
        header_cell("Source"),
        header_cell("Indicators"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for summary in &result.simulations {
        table.add_row(vec![
            Cell::new(&summary.simulation)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.source.display()),
            Cell::new(summary.indicators),
            Cell::new(summary.rows),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(result.total_rows()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_thermal_summary(result: &ThermalResult) {
    println!("Output: {}", result.output.display());
    println!("Zones: {}", result.zones);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Exported Column"),
        header_cell("Source Variable"),
        header_cell("Values"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for (index, entry) in result.coverage.iter().enumerate() {
        let source = source_variable(&result.map, entry);
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(entry.column.name),
            match source {
                Some(source) => Cell::new(source),
                None => dim_cell("-"),
            },
            Cell::new(format!(
                "{}/{} ({:.0}%)",
                entry.present,
                entry.total,
                entry.percent()
            )),
        ]);
    }
    println!("{table}");
}

/// Column the first zone (or the environment) read for `entry`, without
/// the zone prefix.
fn source_variable<'a>(map: &'a ZoneVariableMap, entry: &ColumnCoverage) -> Option<&'a str> {
    let role = entry.column.role?;
    map.zones
        .first()
        .and_then(|zone| {
            zone.column(role)
                .map(|column| column.strip_prefix(zone.zone.as_str()).unwrap_or(column))
                .map(|column| column.trim_start_matches(':'))
        })
        .or_else(|| map.environment_column(role))
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn value_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format_numeric(value)).add_attribute(Attribute::Bold),
        None => dim_cell("null"),
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
