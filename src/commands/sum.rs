//! Sum command implementation.
//!
//! The sum command:
//! 1. Gathers a numeric sequence from arguments, a file, or stdin
//! 2. Calculates total and average
//! 3. Prints the results
//! 4. Writes a JSON report (if requested)

use crate::aggregator::summarize;
use crate::output::{write_report, Report};
use crate::parser::{parse_values, read_values, read_values_from};
use crate::utils::config::STDIN_PATH;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::path::PathBuf;

/// Arguments for the sum command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct SumArgs {
    /// Values given directly on the command line (raw tokens)
    pub values: Vec<String>,

    /// Input file of numbers; `-` reads from stdin
    pub input: Option<PathBuf>,

    /// Output path for the JSON report (optional)
    pub output: Option<PathBuf>,
}

/// Validate sum arguments before execution
///
/// **Public** - called from main.rs before execute_sum
///
/// # Errors
/// * Values given both inline and via `--input`
/// * Neither values nor `--input` given
pub fn validate_args(args: &SumArgs) -> Result<()> {
    if !args.values.is_empty() && args.input.is_some() {
        bail!("Provide values either as arguments or via --input, not both");
    }

    if args.values.is_empty() && args.input.is_none() {
        bail!("No input values. Pass numbers as arguments or use --input <FILE>");
    }

    Ok(())
}

/// Execute the sum command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Sum command arguments
///
/// # Returns
/// Ok if the sequence was summarized, Err with context if any step fails
///
/// # Errors
/// * Input file read or parse failures
/// * Report write failures
pub fn execute_sum(args: SumArgs) -> Result<()> {
    // Step 1: Gather the sequence
    let values = gather_values(&args).context("Failed to read input values")?;

    info!("Summarizing {} values", values.len());

    // Step 2: Calculate
    let summary = summarize(&values);
    debug!("{}", summary.summary());

    // Step 3: Print results
    println!("Count:   {}", summary.count);
    println!("Total:   {}", summary.total);
    println!("Average: {}", summary.average);

    // Step 4: Write report (if requested)
    if let Some(output_path) = &args.output {
        let report = Report::new(&values);
        write_report(&report, output_path)
            .with_context(|| format!("Failed to write report to {}", output_path.display()))?;
        println!("Report written to: {}", output_path.display());
    }

    Ok(())
}

/// Materialize the input sequence from whichever source was given
///
/// **Private** - inline tokens, file, or stdin
fn gather_values(args: &SumArgs) -> Result<Vec<f64>> {
    if !args.values.is_empty() {
        let values = parse_values(&args.values.join(" "))?;
        return Ok(values);
    }

    match &args.input {
        Some(path) if path.as_os_str() == STDIN_PATH => {
            debug!("Reading values from stdin");
            Ok(read_values_from(std::io::stdin().lock())?)
        }
        Some(path) => Ok(read_values(path)?),
        // validate_args rules this out
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_both_sources() {
        let args = SumArgs {
            values: vec!["1".to_string()],
            input: Some(PathBuf::from("data.txt")),
            output: None,
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_rejects_no_source() {
        assert!(validate_args(&SumArgs::default()).is_err());
    }

    #[test]
    fn test_validate_accepts_inline_values() {
        let args = SumArgs {
            values: vec!["1".to_string(), "2".to_string()],
            input: None,
            output: None,
        };
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_gather_inline_values() {
        let args = SumArgs {
            values: vec!["1".to_string(), "2.5".to_string(), "-3".to_string()],
            input: None,
            output: None,
        };
        let values = gather_values(&args).unwrap();
        assert_eq!(values, vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn test_gather_rejects_bad_token() {
        let args = SumArgs {
            values: vec!["1".to_string(), "abc".to_string()],
            input: None,
            output: None,
        };
        assert!(gather_values(&args).is_err());
    }
}
