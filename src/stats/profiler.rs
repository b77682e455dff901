//! Column profiling: missing value counts and the summary statistics table.

use crate::data::{numeric_values, text_values, ColumnKind};
use crate::stats::categories::value_counts;
use crate::stats::calculator::{NumericSummary, StatsCalculator};
use polars::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingCount {
    pub column: String,
    pub missing: usize,
}

/// Statistics for a non-numeric column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoricalSummary {
    pub count: usize,
    pub unique: usize,
    pub top: Option<String>,
    pub freq: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnStats {
    Numeric(NumericSummary),
    Categorical(CategoricalSummary),
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub stats: ColumnStats,
}

/// One rendered statistic across all columns; `None` where it does not apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub label: &'static str,
    pub cells: Vec<Option<String>>,
}

/// Descriptive statistics for every column of a table.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryTable {
    pub columns: Vec<ColumnSummary>,
}

const CATEGORICAL_ROWS: [&str; 4] = ["count", "unique", "top", "freq"];
const NUMERIC_ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

impl SummaryTable {
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Statistic rows in display order. A row only appears when at least one
    /// column provides it.
    pub fn rows(&self) -> Vec<SummaryRow> {
        let has_numeric = self
            .columns
            .iter()
            .any(|c| matches!(c.stats, ColumnStats::Numeric(_)));
        let has_categorical = self
            .columns
            .iter()
            .any(|c| matches!(c.stats, ColumnStats::Categorical(_)));

        let mut labels: Vec<&'static str> = vec!["count"];
        if has_categorical {
            labels.extend(&CATEGORICAL_ROWS[1..]);
        }
        if has_numeric {
            labels.extend(&NUMERIC_ROWS[1..]);
        }

        labels
            .into_iter()
            .map(|label| SummaryRow {
                label,
                cells: self.columns.iter().map(|c| cell(&c.stats, label)).collect(),
            })
            .collect()
    }
}

fn cell(stats: &ColumnStats, label: &str) -> Option<String> {
    match stats {
        ColumnStats::Numeric(s) => {
            let value = match label {
                "count" => return Some(s.count.to_string()),
                "mean" => s.mean,
                "std" => s.std,
                "min" => s.min,
                "25%" => s.q25,
                "50%" => s.median,
                "75%" => s.q75,
                "max" => s.max,
                _ => return None,
            };
            Some(format_stat(value))
        }
        ColumnStats::Categorical(s) => match label {
            "count" => Some(s.count.to_string()),
            "unique" => Some(s.unique.to_string()),
            "top" => s.top.clone(),
            "freq" => s.freq.map(|f| f.to_string()),
            _ => None,
        },
    }
}

/// Six significant decimals, trailing zeros trimmed.
pub fn format_stat(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let formatted = format!("{:.6}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Per-column null counts of the original table, in column order.
pub fn missing_counts(df: &DataFrame) -> Vec<MissingCount> {
    df.get_columns()
        .iter()
        .map(|col| MissingCount {
            column: col.name().to_string(),
            missing: col.null_count(),
        })
        .collect()
}

/// Summary statistics over every column of a (cleaned) table.
pub fn describe(df: &DataFrame) -> PolarsResult<SummaryTable> {
    let columns = df
        .get_columns()
        .iter()
        .map(|col| {
            let stats = match ColumnKind::of(col.dtype()) {
                ColumnKind::Numeric => {
                    let values = numeric_values(col)?;
                    ColumnStats::Numeric(StatsCalculator::compute_descriptive_stats(&values))
                }
                ColumnKind::Categorical | ColumnKind::Temporal => {
                    let values: Vec<String> = text_values(col)?.into_iter().flatten().collect();
                    ColumnStats::Categorical(categorical_summary(&values))
                }
            };
            Ok(ColumnSummary {
                name: col.name().to_string(),
                stats,
            })
        })
        .collect::<PolarsResult<Vec<_>>>()?;

    Ok(SummaryTable { columns })
}

fn categorical_summary(values: &[String]) -> CategoricalSummary {
    let counts = value_counts(values.iter().map(String::as_str));
    let top = counts.first();
    CategoricalSummary {
        count: values.len(),
        unique: counts.len(),
        top: top.map(|c| c.value.clone()),
        freq: top.map(|c| c.count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_counts_in_column_order() {
        let df = df![
            "title" => [Some("A"), None, None],
            "year" => [Some(1i64), Some(2), None],
            "ok" => [1, 2, 3],
        ]
        .unwrap();

        let counts = missing_counts(&df);
        assert_eq!(
            counts,
            vec![
                MissingCount { column: "title".into(), missing: 2 },
                MissingCount { column: "year".into(), missing: 1 },
                MissingCount { column: "ok".into(), missing: 0 },
            ]
        );
    }

    #[test]
    fn test_describe_mixed_columns() {
        let df = df![
            "type" => ["Movie", "TV Show", "Movie", "Movie"],
            "release_year" => [2019i64, 2020, 2020, 2021],
        ]
        .unwrap();

        let table = describe(&df).unwrap();
        assert_eq!(table.column_names(), vec!["type", "release_year"]);

        let rows = table.rows();
        let labels: Vec<_> = rows.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec!["count", "unique", "top", "freq", "mean", "std", "min", "25%", "50%", "75%", "max"]
        );

        let row = |label: &str| rows.iter().find(|r| r.label == label).unwrap().cells.clone();
        assert_eq!(row("count"), vec![Some("4".into()), Some("4".into())]);
        assert_eq!(row("unique"), vec![Some("2".into()), None]);
        assert_eq!(row("top"), vec![Some("Movie".into()), None]);
        assert_eq!(row("freq"), vec![Some("3".into()), None]);
        assert_eq!(row("mean"), vec![None, Some("2020".into())]);
        assert_eq!(row("max"), vec![None, Some("2021".into())]);
    }

    #[test]
    fn test_describe_numeric_only_has_no_categorical_rows() {
        let df = df!["x" => [1.0, 2.0]].unwrap();
        let labels: Vec<_> = describe(&df).unwrap().rows().iter().map(|r| r.label).collect();
        assert_eq!(labels, NUMERIC_ROWS.to_vec());
    }

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(2.5), "2.5");
        assert_eq!(format_stat(1.2909944487358056), "1.290994");
        assert_eq!(format_stat(2020.0), "2020");
        assert_eq!(format_stat(f64::NAN), "NaN");
    }
}
