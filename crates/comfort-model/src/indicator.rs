use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Column name used for indicators that do not vary by zone.
pub const ENVIRONMENT_COLUMN: &str = "Environment";

/// Zone sentinel carried by the global alpha aggregate.
pub const GLOBAL_ZONE: &str = "values";

/// Thermal comfort indicators the engine can derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Indicator {
    Iod,
    Awd,
    Alpha,
    AlphaTot,
    Hi,
    HiLevel,
    Ddh,
    Di,
    DiLevel,
}

/// Temporal shape of an indicator's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorKind {
    /// One value per zone and timestamp.
    ZoneSeries,
    /// One value per timestamp, shared by every zone.
    Environmental,
    /// One value per zone over the whole period.
    ZoneAggregate,
    /// One value over every zone and timestamp.
    GlobalAggregate,
}

impl Indicator {
    pub const ALL: [Indicator; 9] = [
        Indicator::Iod,
        Indicator::Awd,
        Indicator::Alpha,
        Indicator::AlphaTot,
        Indicator::Hi,
        Indicator::HiLevel,
        Indicator::Ddh,
        Indicator::Di,
        Indicator::DiLevel,
    ];

    /// Name used in exported tables.
    pub fn name(self) -> &'static str {
        match self {
            Indicator::Iod => "IOD",
            Indicator::Awd => "AWD",
            Indicator::Alpha => "alpha",
            Indicator::AlphaTot => "alphatot",
            Indicator::Hi => "HI",
            Indicator::HiLevel => "HIlevel",
            Indicator::Ddh => "DDH",
            Indicator::Di => "DI",
            Indicator::DiLevel => "DIlevel",
        }
    }

    /// Stem used for per-indicator export files.
    pub fn file_stem(self) -> &'static str {
        match self {
            Indicator::Alpha => "ALPHA",
            other => other.name(),
        }
    }

    pub fn kind(self) -> IndicatorKind {
        match self {
            Indicator::Iod
            | Indicator::Alpha
            | Indicator::Hi
            | Indicator::HiLevel => IndicatorKind::ZoneSeries,
            Indicator::Awd | Indicator::Di | Indicator::DiLevel => IndicatorKind::Environmental,
            Indicator::Ddh => IndicatorKind::ZoneAggregate,
            Indicator::AlphaTot => IndicatorKind::GlobalAggregate,
        }
    }

    /// Categorical indicators carry level labels instead of numbers.
    pub fn is_categorical(self) -> bool {
        matches!(self, Indicator::HiLevel | Indicator::DiLevel)
    }

    /// Duplicate timestamps are averaged for numeric series, summed for DDH
    /// contributions and take the first value otherwise.
    pub fn merge_rule(self) -> MergeRule {
        if self == Indicator::Ddh {
            MergeRule::Sum
        } else if self.is_categorical() || self.kind() == IndicatorKind::Environmental {
            MergeRule::First
        } else {
            MergeRule::Mean
        }
    }
}

/// How values sharing a timestamp and column collapse into one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeRule {
    Mean,
    /// Additive quantities such as degree-hour contributions.
    Sum,
    First,
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Indicator {
    type Err = ModelError;

    /// Case-insensitive; `ALPHA` and `alpha` are the same indicator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Indicator::ALL
            .into_iter()
            .find(|indicator| indicator.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownIndicator(s.to_string()))
    }
}
