//! Pipelines turning a CSV source into a [`Report`].
//!
//! Both dashboards run load → clean → profile → visualize from scratch on
//! every trigger and hand back a fresh report; nothing is kept between runs.

pub mod catalog;
pub mod explorer;

use crate::config::DashboardConfig;
use crate::data::{clean, text_rows};
use crate::error::Result;
use crate::stats::{
    describe, missing_counts, CategoryCount, CorrelationMatrix, MissingCount, SummaryTable,
    YearTrend,
};
use polars::prelude::*;
use serde::Serialize;
use tracing::info;

/// Everything one dashboard shows.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub title: String,
    pub caption: String,
    pub body: ReportBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReportBody {
    /// Nothing to analyse yet; shown as an informational prompt.
    Idle { message: String },
    /// The source could not be read; shown as an error banner.
    Failed { message: String },
    Ready(Box<Insights>),
}

impl Report {
    pub fn new(title: impl Into<String>, caption: impl Into<String>, body: ReportBody) -> Self {
        Self {
            title: title.into(),
            caption: caption.into(),
            body,
        }
    }

    pub fn insights(&self) -> Option<&Insights> {
        match &self.body {
            ReportBody::Ready(insights) => Some(insights),
            _ => None,
        }
    }
}

/// Sections of a successfully analysed table, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct Insights {
    pub source: String,
    pub row_count: usize,
    pub clean_row_count: usize,
    pub preview: TablePreview,
    pub missing: Vec<MissingCount>,
    pub summary: SummaryTable,
    pub correlation: Option<CorrelationSection>,
    pub trend: Option<TrendSection>,
    pub categories: Vec<CategorySection>,
    pub notices: Vec<String>,
}

impl Insights {
    /// Number of charts the report carries.
    pub fn chart_count(&self) -> usize {
        usize::from(self.correlation.is_some())
            + usize::from(self.trend.is_some())
            + self.categories.len()
    }
}

/// First rows of the raw table, as text.
#[derive(Debug, Clone, Serialize)]
pub struct TablePreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CorrelationSection {
    pub heading: String,
    pub matrix: CorrelationMatrix,
    pub precision: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendSection {
    pub heading: String,
    pub x_label: String,
    pub y_label: String,
    pub trend: YearTrend,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySection {
    pub heading: String,
    pub x_label: String,
    pub y_label: String,
    pub counts: Vec<CategoryCount>,
}

/// The stages shared by both dashboards: preview and missing counts on the
/// raw table, then cleaning and the summary table. Returns the cleaned table
/// for the chart stages.
pub(crate) fn profile(
    source: &str,
    df: &DataFrame,
    config: &DashboardConfig,
) -> Result<(Insights, DataFrame)> {
    let head = df.head(Some(config.preview_rows));
    let preview = TablePreview {
        columns: df.get_column_names().iter().map(|s| s.to_string()).collect(),
        rows: text_rows(&head)?,
    };

    let missing = missing_counts(df);
    let cleaned = clean(df)?;
    let summary = describe(&cleaned)?;

    info!(
        source = %source,
        rows = df.height(),
        clean_rows = cleaned.height(),
        "profiled table"
    );

    let insights = Insights {
        source: source.to_string(),
        row_count: df.height(),
        clean_row_count: cleaned.height(),
        preview,
        missing,
        summary,
        correlation: None,
        trend: None,
        categories: Vec::new(),
        notices: Vec::new(),
    };
    Ok((insights, cleaned))
}

pub(crate) fn correlation_section(
    df: &DataFrame,
    columns: &[String],
    config: &DashboardConfig,
) -> Result<CorrelationSection> {
    Ok(CorrelationSection {
        heading: "Correlation Heatmap".to_string(),
        matrix: CorrelationMatrix::compute(df, columns)?,
        precision: config.correlation_precision,
    })
}

pub(crate) fn trend_section(heading: impl Into<String>, trend: YearTrend) -> TrendSection {
    TrendSection {
        heading: heading.into(),
        x_label: "Year".to_string(),
        y_label: "Count".to_string(),
        trend,
    }
}

pub(crate) fn category_section(
    heading: impl Into<String>,
    x_label: impl Into<String>,
    counts: Vec<CategoryCount>,
) -> CategorySection {
    CategorySection {
        heading: heading.into(),
        x_label: x_label.into(),
        y_label: "Count".to_string(),
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_counts_rows_removed_by_cleaning() {
        let df = df![
            "title" => [Some("A"), None, Some("C"), Some("D")],
            "year" => [Some(2001i64), Some(2002), None, None],
        ]
        .unwrap();
        let (insights, cleaned) = profile("t.csv", &df, &DashboardConfig::default()).unwrap();

        let rows_with_missing = 3;
        assert_eq!(insights.row_count - insights.clean_row_count, rows_with_missing);
        assert_eq!(cleaned.height(), 1);

        let per_column: usize = insights.missing.iter().map(|m| m.missing).sum();
        assert_eq!(per_column, 3);
        assert_eq!(insights.preview.rows.len(), 4);
        assert_eq!(insights.preview.columns, vec!["title", "year"]);
    }

    #[test]
    fn test_preview_is_capped() {
        let df = df!["x" => (0..20).collect::<Vec<i32>>()].unwrap();
        let (insights, _) = profile("x.csv", &df, &DashboardConfig::default()).unwrap();
        assert_eq!(insights.preview.rows.len(), 5);
        assert_eq!(insights.chart_count(), 0);
    }
}
