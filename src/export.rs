//! Report export: every chart of a dashboard as PNG plus the report as JSON.

use crate::charts::StaticChartRenderer;
use crate::error::{DashboardError, Result};
use crate::pipeline::Report;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Files written by one export.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub directory: PathBuf,
    pub files: Vec<PathBuf>,
}

/// File-system friendly stem for a chart heading.
pub fn file_stem(heading: &str) -> String {
    let mut stem = String::with_capacity(heading.len());
    for c in heading.chars() {
        if c.is_ascii_alphanumeric() {
            stem.push(c.to_ascii_lowercase());
        } else if !stem.ends_with('_') {
            stem.push('_');
        }
    }
    let stem = stem.trim_matches('_');
    if stem.is_empty() {
        "chart".to_string()
    } else {
        stem.to_string()
    }
}

/// Write `report.json` and one PNG per chart into `directory`.
pub fn export_report(report: &Report, directory: &Path, size: (u32, u32)) -> Result<ExportSummary> {
    let insights = report.insights().ok_or(DashboardError::NothingToExport)?;
    fs::create_dir_all(directory)?;

    let mut files = Vec::new();
    let json_path = directory.join("report.json");
    fs::write(&json_path, serde_json::to_string_pretty(report)?)?;
    files.push(json_path);

    let mut charts: Vec<(String, Vec<u8>)> = Vec::new();
    if let Some(section) = &insights.correlation {
        charts.push((section.heading.clone(), StaticChartRenderer::render_heatmap(section, size)?));
    }
    if let Some(section) = &insights.trend {
        charts.push((section.heading.clone(), StaticChartRenderer::render_trend(section, size)?));
    }
    for section in &insights.categories {
        charts.push((
            section.heading.clone(),
            StaticChartRenderer::render_categories(section, size)?,
        ));
    }

    for (i, (heading, png)) in charts.into_iter().enumerate() {
        let path = directory.join(format!("{:02}_{}.png", i + 1, file_stem(&heading)));
        fs::write(&path, png)?;
        files.push(path);
    }

    info!(
        directory = %directory.display(),
        charts = insights.chart_count(),
        files = files.len(),
        "exported report"
    );

    Ok(ExportSummary {
        directory: directory.to_path_buf(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::data::Upload;
    use crate::pipeline::explorer;

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("Titles Added Over Years"), "titles_added_over_years");
        assert_eq!(file_stem("Top  country / region"), "top_country_region");
        assert_eq!(file_stem("***"), "chart");
    }

    #[test]
    fn test_idle_report_has_nothing_to_export() {
        let report = explorer::render(None, &DashboardConfig::default());
        let dir = std::env::temp_dir().join("csv_insights_export_idle");
        let err = export_report(&report, &dir, (400, 300)).unwrap_err();
        assert!(matches!(err, DashboardError::NothingToExport));
    }

    #[test]
    fn test_chartless_report_writes_json_only() {
        // one numeric column and nothing categorical: no charts at all
        let upload = Upload::new("scores.csv", b"score\n1\n2\n3\n".to_vec());
        let report = explorer::render(Some(&upload), &DashboardConfig::default());
        let dir = std::env::temp_dir().join(format!("csv_insights_export_{}", std::process::id()));

        let summary = export_report(&report, &dir, (400, 300)).unwrap();
        assert_eq!(summary.files, vec![dir.join("report.json")]);

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.join("report.json")).unwrap()).unwrap();
        assert_eq!(json["title"], "CSV Explorer");
        assert_eq!(json["body"]["state"], "ready");
        assert_eq!(json["body"]["row_count"], 3);
    }

    #[test]
    fn test_full_report_writes_one_png_per_chart() {
        let csv = "\
signup_date,plan,spend,visits
2021-01-04,basic,10.5,3
2022-03-09,pro,40.0,9
2022-07-21,basic,12.0,4
";
        let upload = Upload::new("signups.csv", csv.as_bytes().to_vec());
        let report = explorer::render(Some(&upload), &DashboardConfig::default());
        assert_eq!(report.insights().unwrap().chart_count(), 3);

        let dir = std::env::temp_dir().join(format!("csv_insights_charts_{}", std::process::id()));
        let summary = export_report(&report, &dir, (400, 300)).unwrap();

        let expected = vec![
            dir.join("report.json"),
            dir.join("01_correlation_heatmap.png"),
            dir.join("02_signup_date_over_years.png"),
            dir.join("03_top_plan.png"),
        ];
        assert_eq!(summary.files, expected);

        for png in &expected[1..] {
            let bytes = fs::read(png).unwrap();
            let format = image::guess_format(&bytes).unwrap();
            assert_eq!(format, image::ImageFormat::Png);
            let img = image::load_from_memory(&bytes).unwrap();
            assert_eq!((img.width(), img.height()), (400, 300));
        }
    }
}
