use std::path::PathBuf;

use comfort_model::{IndicatorSet, ZoneVariableMap};
use comfort_output::ColumnCoverage;

#[derive(Debug)]
pub struct IndicatorsResult {
    pub output_dir: PathBuf,
    pub set: IndicatorSet,
    pub files: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct ExportResult {
    pub output: PathBuf,
    pub simulations: Vec<SimulationSummary>,
}

#[derive(Debug)]
pub struct ThermalResult {
    pub output: PathBuf,
    pub map: ZoneVariableMap,
    pub zones: usize,
    pub coverage: Vec<ColumnCoverage>,
}

#[derive(Debug)]
pub struct SimulationSummary {
    pub simulation: String,
    pub source: PathBuf,
    pub indicators: usize,
    pub rows: usize,
}

impl ExportResult {
    pub fn total_rows(&self) -> usize {
        self.simulations.iter().map(|summary| summary.rows).sum()
    }
}
