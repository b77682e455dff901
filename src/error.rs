//! Error types shared by the loaders, pipelines and export.

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    /// The fixed dataset is not where the catalog dashboard expects it.
    #[error("'{}' not found. Please place it in the same folder as this app.", .0.display())]
    SourceNotFound(PathBuf),

    /// The explorer has nothing to analyse yet; shown as the idle prompt.
    #[error("Upload a CSV file to begin.")]
    NoFileProvided,

    #[error("Column '{0}' not found in dataset")]
    MissingColumn(String),

    #[error("Failed to parse CSV: {0}")]
    Parse(#[from] PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Nothing to export")]
    NothingToExport,
}

/// Failures while drawing static chart images.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Draw(String),
    #[error("Image buffer has the wrong size")]
    Buffer,
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
