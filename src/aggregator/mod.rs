//! Aggregation of numeric sequences into summary values.
//!
//! This module provides:
//! - `total` - sum of an ordered sequence
//! - `average` - arithmetic mean with a zero fallback for empty input
//! - `summarize` - count, total, and average in one struct

pub mod metrics;

// Re-export main types and functions
pub use metrics::{average, summarize, total, SequenceSummary};
