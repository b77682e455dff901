//! Dashboard settings.
//!
//! Everything here has a fixed default; the dashboards expose no settings of
//! their own beyond picking a file.

use std::path::PathBuf;

/// Location of the catalog dataset, relative to the working directory.
pub const DEFAULT_DATASET: &str = "netflix_titles.csv";

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// CSV read by the catalog dashboard.
    pub dataset_path: PathBuf,
    /// Rows shown in the raw data preview.
    pub preview_rows: usize,
    /// Entries kept in every top-values chart.
    pub top_n: usize,
    /// Categorical columns charted by the explorer.
    pub max_category_charts: usize,
    /// Decimals shown in heatmap cells.
    pub correlation_precision: usize,
    /// Size of exported PNG charts (width, height).
    pub export_size: (u32, u32),
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            preview_rows: 5,
            top_n: 10,
            max_category_charts: 3,
            correlation_precision: 2,
            export_size: (1200, 700),
        }
    }
}
