//! Indicator pipeline with explicit stages.
//!
//! 1. **Resolve**: map zone and environmental roles onto raw columns
//! 2. **Normalize**: absolute timestamps and derived per-zone variables
//! 3. **Compute**: time-series grids for every needed indicator
//! 4. **Scope**: apply the optional date range to every time series
//! 5. **Aggregate**: DDH totals and the global alpha mean over the scoped grids

use std::time::Instant;

use chrono::Datelike;
use tracing::{debug, info, info_span, warn};

use comfort_indicators::IndicatorEngine;
use comfort_map::{ColumnResolver, discover_zones};
use comfort_model::{
    Indicator, IndicatorOutput, IndicatorRequest, IndicatorSet, NormalizedDataset,
    RawDataset, VariableSpec, WideGrid, ZoneVariableMap,
};
use comfort_normalization::normalize_dataset;
use comfort_transform::{RangeFilter, ScopedGrid, mean_of_cells, sum_by_column, to_wide};

use crate::error::{PipelineError, Result};

// ============================================================================
// Stage 1: Resolve
// ============================================================================

/// Resolves the requested zones, discovering them when none are given.
pub fn resolve_columns(
    dataset: &RawDataset,
    spec: &VariableSpec,
    zones: &[String],
) -> Result<ZoneVariableMap> {
    let columns = dataset.column_names();
    let zones = if zones.is_empty() {
        let discovered = discover_zones(&columns);
        info!(zones = discovered.len(), "discovered zones from column names");
        discovered
    } else {
        zones.to_vec()
    };
    Ok(ColumnResolver::new(spec).resolve(&zones, &columns)?)
}

// ============================================================================
// Stage 3: Compute
// ============================================================================

/// Which grids must be computed to satisfy a request.
#[derive(Debug, Clone, Copy)]
struct Plan {
    iod: bool,
    awd: bool,
    alpha: bool,
}

impl Plan {
    fn for_request(request: &IndicatorRequest) -> Self {
        let alpha = request.wants(Indicator::Alpha) || request.wants(Indicator::AlphaTot);
        Self {
            iod: request.wants(Indicator::Iod) || alpha,
            awd: request.wants(Indicator::Awd) || alpha,
            alpha,
        }
    }
}

/// Time-series grids before any date range is applied.
#[derive(Debug, Default)]
struct SeriesGrids {
    series: Vec<(Indicator, WideGrid)>,
}

impl SeriesGrids {
    fn push(&mut self, indicator: Indicator, grid: WideGrid) {
        debug!(
            indicator = %indicator,
            rows = grid.height(),
            columns = grid.columns().len(),
            "computed indicator"
        );
        self.series.push((indicator, grid));
    }
}

fn compute_series(
    engine: &IndicatorEngine<'_>,
    data: &NormalizedDataset,
    request: &IndicatorRequest,
) -> SeriesGrids {
    let plan = Plan::for_request(request);
    let mut grids = SeriesGrids::default();

    let iod = plan.iod.then(|| {
        let mut grid = to_wide(&engine.iod(data), Indicator::Iod.merge_rule());
        grid.drop_empty_rows();
        grid
    });
    let awd = plan
        .awd
        .then(|| to_wide(&engine.awd(data), Indicator::Awd.merge_rule()));

    if plan.alpha
        && let (Some(iod), Some(awd)) = (&iod, &awd)
    {
        grids.push(Indicator::Alpha, engine.alpha(iod, awd));
    }
    if let Some(grid) = iod {
        grids.push(Indicator::Iod, grid);
    }
    if let Some(grid) = awd {
        grids.push(Indicator::Awd, grid);
    }
    if request.wants(Indicator::Hi) {
        grids.push(
            Indicator::Hi,
            to_wide(&engine.heat_index(data), Indicator::Hi.merge_rule()),
        );
    }
    if request.wants(Indicator::HiLevel) {
        grids.push(
            Indicator::HiLevel,
            to_wide(&engine.heat_index_levels(data), Indicator::HiLevel.merge_rule()),
        );
    }
    if request.wants(Indicator::Di) {
        grids.push(
            Indicator::Di,
            to_wide(&engine.discomfort_index(data), Indicator::Di.merge_rule()),
        );
    }
    if request.wants(Indicator::DiLevel) {
        grids.push(
            Indicator::DiLevel,
            to_wide(
                &engine.discomfort_index_levels(data),
                Indicator::DiLevel.merge_rule(),
            ),
        );
    }
    if request.wants(Indicator::Ddh) {
        grids.push(
            Indicator::Ddh,
            to_wide(&engine.ddh_contributions(data), Indicator::Ddh.merge_rule()),
        );
    }
    grids
}

// ============================================================================
// Stage 4: Scope
// ============================================================================

/// Resolves the request's date range against the data's first year.
fn range_filter(
    data: &NormalizedDataset,
    request: &IndicatorRequest,
) -> Result<Option<RangeFilter>> {
    let Some(range) = &request.range else {
        return Ok(None);
    };
    let year = data
        .environment
        .first()
        .map_or(request.options.year, |record| record.timestamp.year());
    let filter = RangeFilter::resolve(range, year)?;
    info!(start = %filter.start(), end = %filter.end(), "filtering by date range");
    Ok(Some(filter))
}

fn scope(grid: WideGrid, filter: Option<&RangeFilter>) -> ScopedGrid {
    match filter {
        Some(filter) => filter.apply(grid),
        None => ScopedGrid::unbounded(grid),
    }
}

/// Keeps zone and environment records inside the window.
fn scope_records(data: &mut NormalizedDataset, filter: &RangeFilter) {
    for series in &mut data.zones {
        series.records.retain(|record| filter.contains(&record.timestamp));
    }
    data.environment.retain(|record| filter.contains(&record.timestamp));
}

// ============================================================================
// Full pipeline
// ============================================================================

/// Normalized per-zone inputs with the columns they were read from.
#[derive(Debug, Clone)]
pub struct ThermalData {
    pub map: ZoneVariableMap,
    pub data: NormalizedDataset,
}

/// Resolves and normalizes one simulation without computing indicators.
///
/// The request's zones and date range apply; its indicator list is ignored.
pub fn thermal_data(
    dataset: &RawDataset,
    spec: &VariableSpec,
    request: &IndicatorRequest,
) -> Result<ThermalData> {
    let span = info_span!("thermal", simulation = %request.simulation);
    let _guard = span.enter();

    let map = resolve_columns(dataset, spec, &request.zones)?;
    let mut data = normalize_dataset(dataset, &map, spec, &request.options);
    if let Some(filter) = range_filter(&data, request)? {
        scope_records(&mut data, &filter);
    }
    info!(
        zones = data.zones.len(),
        records = data.zones.iter().map(|series| series.records.len()).sum::<usize>(),
        "normalized thermal data"
    );
    Ok(ThermalData { map, data })
}

/// Computes every requested indicator for one simulation.
///
/// Time series are filtered to the requested range before any aggregate
/// is taken. Requesting `alpha` also yields `alphatot`; requesting only
/// `alphatot` computes alpha without emitting its series.
pub fn compute_indicators(
    dataset: &RawDataset,
    spec: &VariableSpec,
    request: &IndicatorRequest,
) -> Result<IndicatorSet> {
    let span = info_span!("indicators", simulation = %request.simulation);
    let _guard = span.enter();
    let started = Instant::now();

    if request.indicators.is_empty() {
        return Err(PipelineError::NoIndicators);
    }

    let map = resolve_columns(dataset, spec, &request.zones)?;
    let data = normalize_dataset(dataset, &map, spec, &request.options);
    if data.environment.is_empty() {
        warn!("no rows with a valid timestamp; every indicator will be empty");
    }

    let engine = IndicatorEngine::new(&request.options);
    let grids = compute_series(&engine, &data, request);
    let filter = range_filter(&data, request)?;
    let scoped: Vec<(Indicator, ScopedGrid)> = grids
        .series
        .into_iter()
        .map(|(indicator, grid)| (indicator, scope(grid, filter.as_ref())))
        .collect();
    let find = |indicator: Indicator| {
        scoped
            .iter()
            .find(|(candidate, _)| *candidate == indicator)
            .map(|(_, grid)| grid)
    };

    let mut set = IndicatorSet::new(request.simulation.clone());
    for indicator in Indicator::ALL {
        let emit = request.wants(indicator)
            || (indicator == Indicator::AlphaTot && request.wants(Indicator::Alpha));
        if !emit {
            continue;
        }
        let output = match indicator {
            Indicator::Ddh => find(Indicator::Ddh)
                .map(|grid| IndicatorOutput::ZoneTotals(sum_by_column(grid))),
            Indicator::AlphaTot => find(Indicator::Alpha)
                .map(|grid| IndicatorOutput::Global(mean_of_cells(grid))),
            other => find(other).map(|grid| IndicatorOutput::Series(grid.grid().clone())),
        };
        if let Some(output) = output {
            set.outputs.push((indicator, output));
        }
    }

    info!(
        zones = map.zones.len(),
        indicators = set.outputs.len(),
        duration_ms = started.elapsed().as_millis(),
        "indicator computation complete"
    );
    Ok(set)
}
