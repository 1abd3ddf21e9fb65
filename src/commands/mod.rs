//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the library components to perform user tasks.

pub mod sum;

// Re-export main command functions
pub use sum::{execute_sum, validate_args, SumArgs};
