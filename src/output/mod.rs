//! Output writers for summary reports.
//!
//! This module handles writing results to disk as pretty-printed JSON.

pub mod json;

// Re-export main functions
pub use json::{read_report, write_report, Report};
