//! Inclusive calendar-window filtering of time-series grids.
//!
//! Filtering yields a [`ScopedGrid`], the only input the aggregations in
//! [`crate::aggregate`] accept, so totals are always taken over the
//! filtered window.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tracing::debug;

use comfort_model::{DateRange, WideGrid};

use crate::error::{RangeError, Result};

/// A bound as written: month and day with an optional explicit year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CalendarDay {
    year: Option<i32>,
    month: u32,
    day: u32,
}

fn parse_day(value: &str) -> Result<CalendarDay> {
    let trimmed = value.trim();
    let invalid = || RangeError::InvalidDate {
        value: value.to_string(),
    };
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(CalendarDay {
            year: Some(date.year()),
            month: date.month(),
            day: date.day(),
        });
    }
    let (month, day) = trimmed.split_once('/').ok_or_else(invalid)?;
    let month: u32 = month.trim().parse().map_err(|_| invalid())?;
    let day: u32 = day.trim().parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(invalid());
    }
    Ok(CalendarDay {
        year: None,
        month,
        day,
    })
}

fn resolve_day(value: &str, day: CalendarDay, year: i32) -> Result<NaiveDate> {
    let year = day.year.unwrap_or(year);
    NaiveDate::from_ymd_opt(year, day.month, day.day).ok_or_else(|| {
        RangeError::NonexistentDate {
            value: value.to_string(),
            year,
        }
    })
}

fn at_time(
    value: &str,
    date: NaiveDate,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<NaiveDateTime> {
    date.and_hms_opt(hour, minute, second)
        .ok_or_else(|| RangeError::InvalidDate {
            value: value.to_string(),
        })
}

/// Concrete inclusive `[start, end]` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFilter {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl RangeFilter {
    /// Resolves `range` using its own year, else `fallback_year`.
    ///
    /// The end bound covers the whole end day, through 23:59:59.
    pub fn resolve(range: &DateRange, fallback_year: i32) -> Result<Self> {
        let year = range.year.unwrap_or(fallback_year);
        let start_day = parse_day(&range.start)?;
        let end_day = parse_day(&range.end)?;
        let start = at_time(&range.start, resolve_day(&range.start, start_day, year)?, 0, 0, 0)?;
        let end = at_time(&range.end, resolve_day(&range.end, end_day, year)?, 23, 59, 59)?;
        if start > end {
            return Err(RangeError::Inverted {
                start: range.start.clone(),
                end: range.end.clone(),
            });
        }
        Ok(Self { start, end })
    }

    /// Resolves `range` taking the default year from the grid's first
    /// timestamp. An empty grid needs no window and yields `None`.
    pub fn for_grid(range: &DateRange, grid: &WideGrid) -> Result<Option<Self>> {
        match (range.year, grid.first_timestamp()) {
            (Some(year), _) => Self::resolve(range, year).map(Some),
            (None, Some(first)) => Self::resolve(range, first.year()).map(Some),
            (None, None) => Ok(None),
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        *timestamp >= self.start && *timestamp <= self.end
    }

    /// Drops rows outside the window.
    pub fn apply(&self, mut grid: WideGrid) -> ScopedGrid {
        let before = grid.height();
        grid.retain_timestamps(|timestamp| self.contains(timestamp));
        debug!(
            start = %self.start,
            end = %self.end,
            kept = grid.height(),
            dropped = before - grid.height(),
            "applied date range"
        );
        ScopedGrid { grid }
    }
}

/// Filters `grid` to `range`, or scopes it unchanged when no range is set.
pub fn filter_range(grid: WideGrid, range: Option<&DateRange>) -> Result<ScopedGrid> {
    let Some(range) = range else {
        return Ok(ScopedGrid::unbounded(grid));
    };
    match RangeFilter::for_grid(range, &grid)? {
        Some(filter) => Ok(filter.apply(grid)),
        None => Ok(ScopedGrid::unbounded(grid)),
    }
}

/// A time-series grid whose time window is final.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopedGrid {
    grid: WideGrid,
}

impl ScopedGrid {
    /// Scopes a grid to its full time span.
    pub fn unbounded(grid: WideGrid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &WideGrid {
        &self.grid
    }

    pub fn into_inner(self) -> WideGrid {
        self.grid
    }
}
