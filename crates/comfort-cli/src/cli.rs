//! CLI argument definitions for the comfort indicator tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use comfort_model::{ComfortOptions, DateRange, Indicator, IndicatorRequest};
use comfort_output::ExportFormat;

#[derive(Parser)]
#[command(
    name = "comfort",
    version,
    about = "Thermal comfort indicators from building energy simulation output",
    long_about = "Compute thermal comfort indicators from EnergyPlus hourly CSV output.\n\n\
                  Indicators: IOD, AWD, ALPHA, alphatot, HI, HIlevel, DDH, DI, DIlevel.\n\
                  Results are written as one wide CSV per indicator or as a single\n\
                  ultra-long table across simulations."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute indicators for one simulation and write one table per indicator.
    Indicators(IndicatorsArgs),

    /// Compute indicators for several simulations into one ultra-long table.
    Export(ExportArgs),

    /// Write the normalized per-zone inputs of one simulation as a table.
    Thermal(ThermalArgs),

    /// List the columns of a simulation output.
    Columns(ColumnsArgs),

    /// List the zones found in a simulation output.
    Zones(ZonesArgs),
}

/// Options shared by every command that computes indicators.
#[derive(Args)]
pub struct ComputeArgs {
    /// Operative temperature above which occupied hours count as overheated.
    #[arg(long = "comfort-temp", value_name = "C", default_value_t = 26.5)]
    pub comfort_temp: f64,

    /// Outdoor temperature above which ambient warmness accumulates.
    #[arg(long = "base-temp", value_name = "C", default_value_t = 18.0)]
    pub base_temp: f64,

    /// Year attached to the month/day timestamps of the input.
    #[arg(long = "year", default_value_t = 2020)]
    pub year: i32,

    /// Zones to analyze, comma-separated (default: every zone found).
    #[arg(long = "zones", value_name = "ZONE", value_delimiter = ',')]
    pub zones: Vec<String>,

    /// Indicators to compute, comma-separated (default: all).
    #[arg(long = "indicators", value_name = "NAME", value_delimiter = ',')]
    pub indicators: Vec<Indicator>,

    /// First day of the analysis window (MM/DD or YYYY-MM-DD).
    #[arg(long = "start-date", value_name = "DATE", requires = "end_date")]
    pub start_date: Option<String>,

    /// Last day of the analysis window, inclusive.
    #[arg(long = "end-date", value_name = "DATE", requires = "start_date")]
    pub end_date: Option<String>,

    /// JSON file overriding the default EnergyPlus column templates.
    #[arg(long = "variables", value_name = "PATH")]
    pub variables: Option<PathBuf>,

    /// Output file format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: ExportFormatArg,
}

impl ComputeArgs {
    pub fn options(&self) -> ComfortOptions {
        ComfortOptions::new()
            .with_comfort_temp(self.comfort_temp)
            .with_base_temp(self.base_temp)
            .with_year(self.year)
    }

    pub fn range(&self) -> Option<DateRange> {
        match (&self.start_date, &self.end_date) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        }
    }

    /// Request for `simulation`; an empty indicator list means all.
    pub fn request(&self, simulation: &str) -> IndicatorRequest {
        let request = IndicatorRequest::new(simulation)
            .with_zones(self.zones.clone())
            .with_range(self.range())
            .with_options(self.options());
        if self.indicators.is_empty() {
            request
        } else {
            request.with_indicators(self.indicators.clone())
        }
    }
}

#[derive(Parser)]
pub struct IndicatorsArgs {
    /// EnergyPlus CSV output of one simulation.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Simulation label used in file names (default: the input file stem).
    #[arg(long = "simulation")]
    pub simulation: Option<String>,

    /// Output directory for the tables (default: <CSV dir>/indicators).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub compute: ComputeArgs,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// EnergyPlus CSV outputs; each file is one simulation.
    #[arg(value_name = "CSV", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Path of the consolidated table.
    #[arg(long = "output", value_name = "PATH", default_value = "indicators.csv")]
    pub output: PathBuf,

    #[command(flatten)]
    pub compute: ComputeArgs,
}

#[derive(Parser)]
pub struct ThermalArgs {
    /// EnergyPlus CSV output of one simulation.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Path of the summary (default: <CSV dir>/<stem>_thermal.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Zones to include, comma-separated (default: every zone found).
    #[arg(long = "zones", value_name = "ZONE", value_delimiter = ',')]
    pub zones: Vec<String>,

    /// First day to include (MM/DD or YYYY-MM-DD).
    #[arg(long = "start-date", value_name = "DATE", requires = "end_date")]
    pub start_date: Option<String>,

    /// Last day to include, inclusive.
    #[arg(long = "end-date", value_name = "DATE", requires = "start_date")]
    pub end_date: Option<String>,

    /// Year attached to the month/day timestamps of the input.
    #[arg(long = "year", default_value_t = 2020)]
    pub year: i32,

    /// JSON file overriding the default EnergyPlus column templates.
    #[arg(long = "variables", value_name = "PATH")]
    pub variables: Option<PathBuf>,
}

impl ThermalArgs {
    pub fn request(&self, simulation: &str) -> IndicatorRequest {
        let range = match (&self.start_date, &self.end_date) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        };
        IndicatorRequest::new(simulation)
            .with_zones(self.zones.clone())
            .with_range(range)
            .with_options(ComfortOptions::new().with_year(self.year))
    }
}

#[derive(Parser)]
pub struct ColumnsArgs {
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Only columns containing this zone name.
    #[arg(long = "zone")]
    pub zone: Option<String>,

    /// Only columns containing this text (case-insensitive).
    #[arg(long = "pattern")]
    pub pattern: Option<String>,

    /// Maximum number of columns to list.
    #[arg(long = "limit")]
    pub limit: Option<usize>,

    /// Group columns by variable kind instead of listing them.
    #[arg(long = "groups")]
    pub groups: bool,
}

#[derive(Parser)]
pub struct ZonesArgs {
    #[arg(value_name = "CSV")]
    pub input: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Xlsx,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Csv => ExportFormat::Csv,
            ExportFormatArg::Xlsx => ExportFormat::Xlsx,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
