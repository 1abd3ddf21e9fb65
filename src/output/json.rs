//! JSON report output writer.
//!
//! Writes Report structs to JSON files with proper formatting.

use crate::aggregator::summarize;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Summary report for a numeric sequence
///
/// **Public** - the on-disk JSON schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version
    pub version: String,

    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Number of input values
    pub count: usize,

    /// Sum of the input values
    pub total: f64,

    /// Arithmetic mean; zero when the input was empty
    pub average: f64,
}

impl Report {
    /// Build a report from a sequence of values
    ///
    /// **Public** - called by the sum command
    pub fn new(values: &[f64]) -> Self {
        let summary = summarize(values);

        Report {
            version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            count: summary.count,
            total: summary.total,
            average: summary.average,
        }
    }
}

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `report` - Report data to write
/// * `output_path` - Path to output JSON file
///
/// # Returns
/// Ok if file written successfully
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &Report, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    // Validate path
    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.exists() && !parent.as_os_str().is_empty() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    // Serialize to JSON with pretty printing
    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    info!("Report written successfully");

    Ok(())
}

/// Read a report back from a JSON file
///
/// **Public** - used by tests and for inspecting previous runs
pub fn read_report(path: impl AsRef<Path>) -> Result<Report, OutputError> {
    let file = File::open(path.as_ref()).map_err(OutputError::WriteFailed)?;
    let report = serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;
    Ok(report)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_report_new() {
        let report = Report::new(&[1.0, 2.0, 3.0, 4.0]);

        assert_eq!(report.version, SCHEMA_VERSION);
        assert_eq!(report.count, 4);
        assert_eq!(report.total, 10.0);
        assert_eq!(report.average, 2.5);
    }

    #[test]
    fn test_report_new_empty() {
        let report = Report::new(&[]);

        assert_eq!(report.count, 0);
        assert_eq!(report.total, 0.0);
        assert_eq!(report.average, 0.0);
    }

    #[test]
    fn test_write_and_read_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");

        let report = Report::new(&[10.0]);
        write_report(&report, &path).unwrap();

        let loaded = read_report(&path).unwrap();
        assert_eq!(loaded.count, 1);
        assert_eq!(loaded.total, 10.0);
        assert_eq!(loaded.average, 10.0);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        write_report(&Report::new(&[1.0]), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_rejects_empty_path() {
        let err = write_report(&Report::new(&[]), "").unwrap_err();
        assert!(matches!(err, OutputError::InvalidPath(_)));
    }

    #[test]
    fn test_write_rejects_directory_path() {
        let dir = tempdir().unwrap();
        let err = write_report(&Report::new(&[]), dir.path()).unwrap_err();
        assert!(matches!(err, OutputError::InvalidPath(_)));
    }
}
