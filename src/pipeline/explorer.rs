//! Explorer dashboard: generic exploratory analysis of an uploaded CSV.

use super::{
    category_section, correlation_section, profile, trend_section, Insights, Report, ReportBody,
};
use crate::config::DashboardConfig;
use crate::data::{columns_of_kind, ColumnKind, DataLoader, Upload};
use crate::error::{DashboardError, Result};
use crate::stats::{detect_trend, top_values};
use tracing::{debug, error};

pub const TITLE: &str = "CSV Explorer";
pub const CAPTION: &str = "Upload any CSV file for a quick exploratory analysis";

/// Build the explorer report for the current upload, if any.
pub fn render(upload: Option<&Upload>, config: &DashboardConfig) -> Report {
    let Some(upload) = upload else {
        return Report::new(
            TITLE,
            CAPTION,
            ReportBody::Idle {
                message: DashboardError::NoFileProvided.to_string(),
            },
        );
    };

    let body = match build(upload, config) {
        Ok(insights) => ReportBody::Ready(Box::new(insights)),
        Err(e) => {
            error!(file = %upload.name, error = %e, "explorer failed");
            ReportBody::Failed {
                message: e.to_string(),
            }
        }
    };
    Report::new(TITLE, format!("Analysing {}", upload.name), body)
}

fn build(upload: &Upload, config: &DashboardConfig) -> Result<Insights> {
    let mut loader = DataLoader::new();
    let df = loader.load_bytes(upload)?.clone();

    let (mut insights, cleaned) = profile(&upload.name, &df, config)?;

    let numeric = columns_of_kind(&cleaned, ColumnKind::Numeric);
    if numeric.len() >= 2 {
        insights.correlation = Some(correlation_section(&cleaned, &numeric, config)?);
    } else {
        debug!(numeric = numeric.len(), "too few numeric columns for a heatmap");
    }

    let trend = detect_trend(&cleaned)?;
    let trend_column = trend.as_ref().map(|t| t.column.clone());
    if let Some(trend) = trend {
        let heading = format!("{} Over Years", trend.column);
        insights.trend = Some(trend_section(heading, trend));
    }

    // the trend column now reads as dates, not categories
    let categorical: Vec<String> = columns_of_kind(&cleaned, ColumnKind::Categorical)
        .into_iter()
        .filter(|name| Some(name) != trend_column.as_ref())
        .take(config.max_category_charts)
        .collect();

    for name in categorical {
        let counts = top_values(cleaned.column(&name)?, config.top_n)?;
        if counts.is_empty() {
            debug!(column = %name, "no values left after cleaning, no chart");
            continue;
        }
        insights
            .categories
            .push(category_section(format!("Top {}", name), name, counts));
    }

    Ok(insights)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(csv: &str) -> Upload {
        Upload::new("data.csv", csv.as_bytes().to_vec())
    }

    #[test]
    fn test_no_upload_is_idle_prompt_only() {
        let report = render(None, &DashboardConfig::default());
        match &report.body {
            ReportBody::Idle { message } => assert_eq!(message, "Upload a CSV file to begin."),
            other => panic!("expected idle prompt, got {:?}", other),
        }
    }

    #[test]
    fn test_no_numeric_columns_means_no_heatmap() {
        let csv = "name,city\nAna,Lisbon\nBo,Oslo\nCy,Lisbon\n";
        let report = render(Some(&upload(csv)), &DashboardConfig::default());
        let insights = report.insights().unwrap();

        assert!(insights.correlation.is_none());
        assert!(insights.trend.is_none());
        assert_eq!(insights.categories.len(), 2);
        assert_eq!(insights.categories[1].counts[0].value, "Lisbon");
    }

    #[test]
    fn test_single_numeric_column_means_no_heatmap() {
        let csv = "name,score\nAna,1\nBo,2\n";
        let report = render(Some(&upload(csv)), &DashboardConfig::default());
        assert!(report.insights().unwrap().correlation.is_none());
    }

    #[test]
    fn test_full_exploration() {
        let csv = "\
id,signup_date,plan,region,channel,device,spend,visits
1,2021-01-04,basic,EU,web,ios,10.5,3
2,2021-03-09,pro,US,web,android,40.0,9
3,2022-07-21,basic,EU,ads,ios,12.0,4
4,not a date,pro,APAC,web,web,38.5,8
5,2022-11-30,basic,,ads,ios,9.0,2
6,2023-02-14,team,US,web,android,120.0,20
";
        let report = render(Some(&upload(csv)), &DashboardConfig::default());
        let insights = report.insights().unwrap();

        assert_eq!(insights.row_count, 6);
        assert_eq!(insights.clean_row_count, 5);

        let correlation = insights.correlation.as_ref().unwrap();
        assert_eq!(correlation.matrix.columns, vec!["id", "spend", "visits"]);
        for i in 0..3 {
            assert_eq!(correlation.matrix.values[i][i], 1.0);
        }

        let trend = insights.trend.as_ref().unwrap();
        assert_eq!(trend.trend.column, "signup_date");
        assert_eq!(trend.trend.points, vec![(2021, 2), (2022, 1), (2023, 1)]);
        assert_eq!(trend.x_label, "Year");
        assert_eq!(trend.y_label, "Count");

        let charted: Vec<_> = insights.categories.iter().map(|c| c.x_label.as_str()).collect();
        assert_eq!(charted, vec!["plan", "region", "channel"]);
    }

    #[test]
    fn test_numeric_time_column_is_not_a_trend() {
        let csv = "runtime,score\n1999,1\n2005,2\n";
        let report = render(Some(&upload(csv)), &DashboardConfig::default());
        let insights = report.insights().unwrap();

        assert!(insights.trend.is_none());
        let correlation = insights.correlation.as_ref().unwrap();
        assert_eq!(correlation.matrix.columns, vec!["runtime", "score"]);
    }

    #[test]
    fn test_fully_missing_rows_draw_no_empty_charts() {
        // every row has a gap, so cleaning leaves nothing to count
        let csv = "plan,region,spend\nbasic,,1.0\n,EU,2.0\npro,US,\n";
        let report = render(Some(&upload(csv)), &DashboardConfig::default());
        let insights = report.insights().unwrap();

        assert_eq!(insights.clean_row_count, 0);
        assert!(insights.categories.is_empty());
        assert_eq!(insights.chart_count(), 0);
    }

    #[test]
    fn test_empty_upload_is_error_banner() {
        let report = render(
            Some(&Upload::new("empty.csv", Vec::new())),
            &DashboardConfig::default(),
        );
        assert!(matches!(report.body, ReportBody::Failed { .. }));
    }
}
