use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use tracing::{info, info_span, warn};

use comfort_cli::simulation::{
    compute_simulation, load_variable_spec, normalize_simulation, simulation_name,
};
use comfort_ingest::read_raw_csv;
use comfort_map::{ColumnCatalog, ColumnQuery, VariableGroup};
use comfort_output::{ExportFormat, write_thermal_summary, write_ultra_long, write_wide_outputs};
use comfort_transform::set_to_ultra_long;

use crate::cli::{ColumnsArgs, ExportArgs, IndicatorsArgs, ThermalArgs, ZonesArgs};
use crate::summary::{apply_table_style, dim_cell, header_cell};
use crate::types::{ExportResult, IndicatorsResult, SimulationSummary, ThermalResult};

pub fn run_indicators(args: &IndicatorsArgs) -> Result<IndicatorsResult> {
    let simulation = args
        .simulation
        .clone()
        .unwrap_or_else(|| simulation_name(&args.input));
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.input));
    let format = ExportFormat::from(args.compute.format);
    format.ensure_available()?;

    let spec = load_variable_spec(args.compute.variables.as_deref())?;
    let request = args.compute.request(&simulation);
    let set = compute_simulation(&args.input, &spec, &request)?;
    let files = write_wide_outputs(&output_dir, &set, format).context("write indicator tables")?;
    Ok(IndicatorsResult {
        output_dir,
        set,
        files,
    })
}

pub fn run_export(args: &ExportArgs) -> Result<ExportResult> {
    let format = ExportFormat::from(args.compute.format);
    format.ensure_available()?;
    let spec = load_variable_spec(args.compute.variables.as_deref())?;

    let mut rows = Vec::new();
    let mut simulations: Vec<SimulationSummary> = Vec::with_capacity(args.inputs.len());
    for input in &args.inputs {
        let simulation = simulation_name(input);
        let span = info_span!("simulation", simulation = %simulation);
        let _guard = span.enter();
        if simulations.iter().any(|summary| summary.simulation == simulation) {
            warn!(path = %input.display(), "duplicate simulation name; rows will be merged");
        }
        let request = args.compute.request(&simulation);
        let set = compute_simulation(input, &spec, &request)?;
        let simulation_rows = set_to_ultra_long(&set);
        info!(rows = simulation_rows.len(), "collected ultra-long rows");
        simulations.push(SimulationSummary {
            simulation,
            source: input.clone(),
            indicators: set.outputs.len(),
            rows: simulation_rows.len(),
        });
        rows.extend(simulation_rows);
    }

    write_ultra_long(&args.output, &rows, format)
        .with_context(|| format!("write {}", args.output.display()))?;
    Ok(ExportResult {
        output: args.output.clone(),
        simulations,
    })
}

pub fn run_thermal(args: &ThermalArgs) -> Result<ThermalResult> {
    let simulation = simulation_name(&args.input);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_thermal_path(&args.input, &simulation));
    let spec = load_variable_spec(args.variables.as_deref())?;
    let request = args.request(&simulation);
    let thermal = normalize_simulation(&args.input, &spec, &request)?;
    let coverage = write_thermal_summary(&output, &thermal.data, ExportFormat::Csv)
        .with_context(|| format!("write {}", output.display()))?;
    Ok(ThermalResult {
        output,
        zones: thermal.data.zones.len(),
        map: thermal.map,
        coverage,
    })
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let catalog = load_catalog(&args.input)?;
    let mut table = Table::new();
    if args.groups {
        table.set_header(vec![
            header_cell("Group"),
            header_cell("Columns"),
            header_cell("Example"),
        ]);
        apply_table_style(&mut table);
        for (group, columns) in catalog.variable_groups() {
            table.add_row(vec![
                Cell::new(group.label()),
                Cell::new(columns.len()),
                Cell::new(columns.first().copied().unwrap_or("-")),
            ]);
        }
    } else {
        let query = ColumnQuery {
            zone: args.zone.clone(),
            pattern: args.pattern.clone(),
            limit: args.limit,
        };
        let selected = catalog.select(&query);
        table.set_header(vec![
            header_cell("#"),
            header_cell("Column"),
            header_cell("Group"),
        ]);
        apply_table_style(&mut table);
        for (index, column) in selected.iter().enumerate() {
            table.add_row(vec![
                dim_cell(index + 1),
                Cell::new(column),
                Cell::new(VariableGroup::classify(column).label()),
            ]);
        }
        println!("Columns: {} of {}", selected.len(), catalog.len());
    }
    println!("{table}");
    Ok(())
}

pub fn run_zones(args: &ZonesArgs) -> Result<()> {
    let catalog = load_catalog(&args.input)?;
    let zones = catalog.zones();
    let mut table = Table::new();
    table.set_header(vec![header_cell("Zone"), header_cell("Columns")]);
    apply_table_style(&mut table);
    for zone in &zones {
        let query = ColumnQuery {
            zone: Some(format!("{zone}:")),
            ..ColumnQuery::default()
        };
        table.add_row(vec![Cell::new(zone), Cell::new(catalog.select(&query).len())]);
    }
    println!("Zones: {}", zones.len());
    println!("{table}");
    Ok(())
}

fn load_catalog(input: &Path) -> Result<ColumnCatalog> {
    let dataset = read_raw_csv(input).with_context(|| format!("read {}", input.display()))?;
    Ok(ColumnCatalog::new(dataset.column_names()))
}

fn default_thermal_path(input: &Path, simulation: &str) -> PathBuf {
    input.with_file_name(format!("{simulation}_thermal.csv"))
}

fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .map_or_else(|| PathBuf::from("indicators"), |dir| dir.join("indicators"))
}
