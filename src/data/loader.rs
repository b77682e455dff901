//! CSV Data Loader Module
//! Reads the catalog file from disk or an uploaded CSV from memory using Polars.

use crate::error::{DashboardError, Result};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::info;

/// A CSV handed to the explorer through the file dialog.
#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a picked file into memory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, bytes))
    }
}

/// Handles CSV loading with Polars. Schema inference scans the whole file so
/// a late non-numeric value keeps its column textual.
pub struct DataLoader {
    df: Option<DataFrame>,
    source: Option<String>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            source: None,
        }
    }

    /// Load a CSV file from a fixed path.
    pub fn load_csv(&mut self, file_path: &Path) -> Result<&DataFrame> {
        if !file_path.exists() {
            return Err(DashboardError::SourceNotFound(file_path.to_path_buf()));
        }

        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(None)
            .finish()?
            .collect()?;

        info!(
            path = %file_path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded CSV"
        );

        self.source = Some(file_path.display().to_string());
        Ok(&*self.df.insert(df))
    }

    /// Parse an uploaded CSV held in memory.
    pub fn load_bytes(&mut self, upload: &Upload) -> Result<&DataFrame> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .into_reader_with_file_handle(Cursor::new(upload.bytes.clone()))
            .finish()?;

        info!(
            file = %upload.name,
            rows = df.height(),
            columns = df.width(),
            "parsed upload"
        );

        self.source = Some(upload.name.clone());
        Ok(&*self.df.insert(df))
    }

    /// Name of the last loaded source.
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_source_not_found() {
        let mut loader = DataLoader::new();
        let err = loader
            .load_csv(Path::new("definitely/not/here/netflix_titles.csv"))
            .unwrap_err();
        assert!(matches!(err, DashboardError::SourceNotFound(_)));
        assert!(err.to_string().contains("netflix_titles.csv"));
    }

    #[test]
    fn test_load_bytes_infers_types_and_nulls() {
        let upload = Upload::new("people.csv", b"name,age,city\nAna,31,Lisbon\nBo,,Oslo\n".to_vec());
        let mut loader = DataLoader::new();
        let df = loader.load_bytes(&upload).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.column("age").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("age").unwrap().null_count(), 1);
        assert_eq!(loader.source_name(), Some("people.csv"));
    }

    #[test]
    fn test_load_fixture_from_disk() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog_sample.csv");
        let mut loader = DataLoader::new();
        let df = loader.load_csv(&path).unwrap();
        assert!(df.height() > 0);
        assert!(df.column("release_year").is_ok());
    }
}
