//! Numeric input parsing.
//!
//! This module handles:
//! - Parsing decimal numbers from plain text (whitespace or comma separated)
//! - Skipping blank lines and `#` comment lines
//! - Reading sequences from files or stdin

use crate::utils::config::COMMENT_CHAR;
use crate::utils::error::ParseError;
use log::debug;
use std::io::Read;
use std::path::Path;

/// Parse a numeric sequence from text
///
/// **Public** - main entry point for text input
///
/// Numbers may be separated by whitespace, commas, or both, across any
/// number of lines. Blank lines are skipped, as are lines whose first
/// non-whitespace character is `#`.
///
/// # Arguments
/// * `input` - Raw text containing decimal numbers
///
/// # Returns
/// The parsed values, in input order
///
/// # Errors
/// * `ParseError::InvalidNumber` - a token is not a valid decimal number;
///   carries the token and its 1-based line number
pub fn parse_values(input: &str) -> Result<Vec<f64>, ParseError> {
    let mut values = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with(COMMENT_CHAR) {
            continue;
        }

        for token in line.split(|c: char| c.is_whitespace() || c == ',') {
            if token.is_empty() {
                continue;
            }

            let value = token
                .parse::<f64>()
                .map_err(|source| ParseError::InvalidNumber {
                    token: token.to_string(),
                    line: index + 1,
                    source,
                })?;

            values.push(value);
        }
    }

    debug!("Parsed {} values from input", values.len());

    Ok(values)
}

/// Read and parse a numeric sequence from a file
///
/// **Public** - file convenience wrapper around parse_values
///
/// # Arguments
/// * `path` - Path to a text file of numbers
///
/// # Errors
/// * `ParseError::IoError` - the file cannot be read
/// * `ParseError::InvalidNumber` - the file contains a non-numeric token
pub fn read_values(path: impl AsRef<Path>) -> Result<Vec<f64>, ParseError> {
    let path = path.as_ref();
    debug!("Reading values from: {}", path.display());

    let input = std::fs::read_to_string(path)?;
    parse_values(&input)
}

/// Read and parse a numeric sequence from any reader (e.g. stdin)
///
/// **Public** - used by the CLI when input is `-`
pub fn read_values_from(mut reader: impl Read) -> Result<Vec<f64>, ParseError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_values(&input)
}
