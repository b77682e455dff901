//! Catalog dashboard: statistics and charts for the fixed titles dataset.

use super::{
    category_section, correlation_section, profile, trend_section, CategorySection, Insights,
    Report, ReportBody,
};
use crate::config::DashboardConfig;
use crate::data::{ColumnKind, DataLoader};
use crate::error::{DashboardError, Result};
use crate::stats::{top_values, YearTrend};
use polars::prelude::*;
use tracing::{error, warn};

pub const TITLE: &str = "Netflix Dataset Insights";
pub const CAPTION: &str = "Explore Netflix's content with visual analytics";

const RELEASE_YEAR: &str = "release_year";
const DATE_ADDED: &str = "date_added";
const COUNTRY: &str = "country";

/// Load the configured dataset and build its report. A missing file yields an
/// error banner and nothing else.
pub fn render(config: &DashboardConfig) -> Report {
    let body = match build(config) {
        Ok(insights) => ReportBody::Ready(Box::new(insights)),
        Err(e) => {
            error!(error = %e, "catalog dashboard failed");
            ReportBody::Failed {
                message: e.to_string(),
            }
        }
    };
    Report::new(TITLE, CAPTION, body)
}

fn build(config: &DashboardConfig) -> Result<Insights> {
    let mut loader = DataLoader::new();
    let df = loader.load_csv(&config.dataset_path)?.clone();
    let source = loader.source_name().unwrap_or_default().to_string();

    let (mut insights, cleaned) = profile(&source, &df, config)?;

    if let Ok(column) = cleaned.column(RELEASE_YEAR) {
        if ColumnKind::of(column.dtype()) == ColumnKind::Numeric {
            insights.correlation = Some(correlation_section(
                &cleaned,
                &[RELEASE_YEAR.to_string()],
                config,
            )?);
        } else {
            warn!(column = RELEASE_YEAR, dtype = %column.dtype(), "not numeric, no heatmap");
        }
    }

    if let Ok(column) = cleaned.column(DATE_ADDED) {
        if let Some(trend) = YearTrend::from_column(column)? {
            insights.trend = Some(trend_section("Titles Added Over Years", trend));
        }
    }

    match top_countries(&cleaned, config) {
        Ok(section) => insights.categories.push(section),
        Err(DashboardError::MissingColumn(name)) => {
            warn!(column = %name, "skipping top countries");
            insights
                .notices
                .push(format!("Column '{}' not found; Top Countries is not available.", name));
        }
        Err(e) => return Err(e),
    }

    Ok(insights)
}

fn top_countries(df: &DataFrame, config: &DashboardConfig) -> Result<CategorySection> {
    let column = df
        .column(COUNTRY)
        .map_err(|_| DashboardError::MissingColumn(COUNTRY.to_string()))?;
    let counts = top_values(column, config.top_n)?;
    Ok(category_section("Top Countries", "Country", counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    fn fixture() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog_sample.csv")
    }

    fn config_for(path: PathBuf) -> DashboardConfig {
        DashboardConfig {
            dataset_path: path,
            ..DashboardConfig::default()
        }
    }

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("csv_insights_catalog_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_missing_dataset_shows_only_error_banner() {
        let report = render(&config_for(PathBuf::from("no/such/netflix_titles.csv")));
        assert_eq!(report.title, TITLE);
        match &report.body {
            ReportBody::Failed { message } => {
                assert!(message.contains("netflix_titles.csv"));
                assert!(message.contains("not found"));
            }
            other => panic!("expected failure banner, got {:?}", other),
        }
        assert!(report.insights().is_none());
    }

    #[test]
    fn test_fixture_renders_all_sections() {
        let report = render(&config_for(fixture()));
        let insights = report.insights().expect("fixture should load");

        assert!(insights.clean_row_count < insights.row_count);
        assert_eq!(insights.preview.rows.len(), 5);

        let correlation = insights.correlation.as_ref().unwrap();
        assert_eq!(correlation.matrix.values, vec![vec![1.0]]);

        let trend = insights.trend.as_ref().unwrap();
        assert_eq!(trend.heading, "Titles Added Over Years");
        let years: Vec<i32> = trend.trend.points.iter().map(|p| p.0).collect();
        let mut sorted = years.clone();
        sorted.sort();
        assert_eq!(years, sorted);

        assert_eq!(insights.categories.len(), 1);
        let countries = &insights.categories[0];
        assert_eq!(countries.x_label, "Country");
        assert_eq!(countries.counts[0].value, "United States");
        assert!(countries.counts.len() <= 10);
        assert!(insights.notices.is_empty());
    }

    #[test]
    fn test_unparseable_dates_only_leave_the_trend() {
        let path = write_temp(
            "bad_dates.csv",
            "title,release_year,date_added,country\n\
             A,2019,\"September 1, 2020\",India\n\
             B,2018,someday,India\n\
             C,2017,2021-02-03,Spain\n",
        );
        let report = render(&config_for(path));
        let insights = report.insights().unwrap();

        assert_eq!(insights.clean_row_count, 3);
        let trend = insights.trend.as_ref().unwrap();
        assert_eq!(trend.trend.points, vec![(2020, 1), (2021, 1)]);
        assert_eq!(trend.trend.unparsed, 1);

        let india = &insights.categories[0].counts[0];
        assert_eq!((india.value.as_str(), india.count), ("India", 2));
    }

    #[test]
    fn test_missing_country_column_is_a_notice() {
        let path = write_temp(
            "no_country.csv",
            "title,release_year,date_added\nA,2019,2020-01-01\nB,2020,2021-01-01\n",
        );
        let report = render(&config_for(path));
        let insights = report.insights().unwrap();

        assert!(insights.categories.is_empty());
        assert!(insights.correlation.is_some());
        assert!(insights.trend.is_some());
        assert_eq!(insights.notices.len(), 1);
        assert!(insights.notices[0].contains("country"));
    }
}
