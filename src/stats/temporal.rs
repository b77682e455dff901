//! Lenient date parsing and the titles-per-year trend.
//!
//! Every value is tried against a list of formats on its own, so a column
//! may mix "September 25, 2021" with "2021-09-25". Values matching no format
//! count as missing.

use crate::data::{text_values, ColumnKind};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use polars::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

const DATETIME_FORMATS: [&str; 8] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

// month-first before day-first, as ambiguous dates read in the US order
const DATE_FORMATS: [&str; 13] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d-%b-%Y",
    "%a, %d %b %Y",
];

/// Parse a single cell, trying each known layout in turn.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.date_naive());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }

    if value.bytes().all(|b| b.is_ascii_digit()) {
        match value.len() {
            8 => return NaiveDate::parse_from_str(value, "%Y%m%d").ok(),
            4 => {
                let year: i32 = value.parse().ok()?;
                return NaiveDate::from_ymd_opt(year, 1, 1);
            }
            _ => {}
        }
    }

    None
}

/// Parse every cell of a column; nulls and unparseable cells become `None`.
pub fn parse_column(column: &Column) -> PolarsResult<Vec<Option<NaiveDate>>> {
    let parsed = text_values(column)?
        .into_iter()
        .map(|v| v.as_deref().and_then(parse_date))
        .collect();
    Ok(parsed)
}

/// Number of rows per calendar year, ascending by year. Missing dates are
/// left out.
pub fn yearly_counts(dates: &[Option<NaiveDate>]) -> Vec<(i32, usize)> {
    let mut years: BTreeMap<i32, usize> = BTreeMap::new();
    for date in dates.iter().flatten() {
        *years.entry(date.year()).or_default() += 1;
    }
    years.into_iter().collect()
}

/// Year/count series for a line chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearTrend {
    pub column: String,
    pub points: Vec<(i32, usize)>,
    /// Cells that could not be read as a date.
    pub unparsed: usize,
}

impl YearTrend {
    /// Trend of a column, or `None` when not a single value parses.
    pub fn from_column(column: &Column) -> PolarsResult<Option<Self>> {
        let parsed = parse_column(column)?;
        let unparsed = parsed.iter().filter(|d| d.is_none()).count();
        let points = yearly_counts(&parsed);

        debug!(
            column = %column.name(),
            years = points.len(),
            unparsed = unparsed,
            "parsed temporal column"
        );

        if points.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self {
            column: column.name().to_string(),
            points,
            unparsed,
        }))
    }
}

/// Whether a column name suggests dates: contains "date" or "time", any case.
pub fn is_temporal_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.contains("date") || lower.contains("time")
}

/// First non-numeric column, in table order, whose name suggests dates and
/// which holds at least one parseable value. Columns the reader typed as
/// numbers stay numbers.
pub fn detect_trend(df: &DataFrame) -> PolarsResult<Option<YearTrend>> {
    for column in df.get_columns() {
        let numeric = ColumnKind::of(column.dtype()) == ColumnKind::Numeric;
        if numeric || !is_temporal_name(column.name()) {
            continue;
        }
        if let Some(trend) = YearTrend::from_column(column)? {
            return Ok(Some(trend));
        }
    }
    Ok(None)
}
