//! Loading and computing one simulation at a time.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use comfort_core::{ThermalData, compute_indicators, thermal_data};
use comfort_ingest::read_raw_csv;
use comfort_map::energyplus_variable_spec;
use comfort_model::{IndicatorRequest, IndicatorSet, VariableSpec};

/// Simulation label for an input file: its stem, e.g. `Base` for `Base.csv`.
pub fn simulation_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "simulation".to_string())
}

/// Column templates from a JSON file, or the EnergyPlus defaults.
pub fn load_variable_spec(path: Option<&Path>) -> Result<VariableSpec> {
    let Some(path) = path else {
        return Ok(energyplus_variable_spec());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("read variable spec {}", path.display()))?;
    let spec: VariableSpec = serde_json::from_str(&text)
        .with_context(|| format!("parse variable spec {}", path.display()))?;
    info!(path = %path.display(), entries = spec.entries.len(), "loaded variable spec");
    Ok(spec)
}

/// Reads `path` and computes the requested indicators for it.
pub fn compute_simulation(
    path: &Path,
    spec: &VariableSpec,
    request: &IndicatorRequest,
) -> Result<IndicatorSet> {
    let dataset = read_raw_csv(path).with_context(|| format!("read {}", path.display()))?;
    debug!(
        rows = dataset.height(),
        columns = dataset.column_names().len(),
        "loaded simulation output"
    );
    compute_indicators(&dataset, spec, request)
        .with_context(|| format!("compute indicators for {}", request.simulation))
}

/// Reads `path` and normalizes it for the thermal summary.
pub fn normalize_simulation(
    path: &Path,
    spec: &VariableSpec,
    request: &IndicatorRequest,
) -> Result<ThermalData> {
    let dataset = read_raw_csv(path).with_context(|| format!("read {}", path.display()))?;
    thermal_data(&dataset, spec, request)
        .with_context(|| format!("normalize {}", request.simulation))
}
