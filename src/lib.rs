//! Tally
//!
//! Sum and average summaries for numeric sequences.
//!
//! This crate provides two core operations, [`total`] and [`average`],
//! plus the implementation for the `tally` CLI tool.
//!
//! ## Getting Started
//!
//! Use the operations directly as a library:
//!
//! ```
//! use tally::{average, total};
//!
//! assert_eq!(total(&[1.0, 2.0, 3.0, 4.0]), 10.0);
//! assert_eq!(average(&[1.0, 2.0, 3.0, 4.0]), 2.5);
//! assert_eq!(average(&[]), 0.0);
//! ```
//!
//! Or install and use the CLI:
//!
//! ```bash
//! cargo install tally
//! tally sum 1 2 3 4
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

// The two core operations, importable with no setup
pub use aggregator::{average, summarize, total, SequenceSummary};
