//! Sum and average calculations over numeric sequences.
//!
//! Both operations are pure: they read the input slice in order,
//! mutate nothing, and hold no state between calls.

use log::debug;

/// Calculate the total of a sequence of numbers
///
/// **Public** - one of the two core operations
///
/// # Arguments
/// * `values` - Ordered sequence of numbers, may be empty
///
/// # Returns
/// The sum of all elements; `0.0` for an empty sequence (additive identity)
pub fn total(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Calculate the average of a sequence of numbers
///
/// **Public** - one of the two core operations
///
/// Defined as `total(values) / values.len()` for non-empty input.
/// An empty sequence returns `0.0` rather than failing with a
/// division-by-zero; callers relying on this fallback get a plain
/// zero, never NaN.
///
/// # Arguments
/// * `values` - Ordered sequence of numbers, may be empty
///
/// # Returns
/// The arithmetic mean, or `0.0` for an empty sequence
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    total(values) / values.len() as f64
}

/// Calculate count, total, and average for a sequence
///
/// **Public** - convenience for callers that want the full summary
///
/// # Arguments
/// * `values` - Ordered sequence of numbers
///
/// # Returns
/// Summary statistics for the sequence
pub fn summarize(values: &[f64]) -> SequenceSummary {
    debug!("Summarizing sequence of {} values", values.len());

    SequenceSummary {
        count: values.len(),
        total: total(values),
        average: average(values),
    }
}

/// Summary statistics for a numeric sequence
///
/// **Public** - returned from summarize
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSummary {
    /// Number of elements in the sequence
    pub count: usize,

    /// Sum of all elements
    pub total: f64,

    /// Arithmetic mean; zero when the sequence is empty
    pub average: f64,
}

impl Default for SequenceSummary {
    fn default() -> Self {
        Self {
            count: 0,
            total: 0.0,
            average: 0.0,
        }
    }
}

impl SequenceSummary {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and the CLI summary line
    pub fn summary(&self) -> String {
        format!(
            "Count: {} | Total: {} | Average: {}",
            self.count, self.total, self.average
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total() {
        assert_eq!(total(&[1.0, 2.0, 3.0, 4.0]), 10.0);
    }

    #[test]
    fn test_total_empty() {
        assert_eq!(total(&[]), 0.0);
    }

    #[test]
    fn test_total_cancellation() {
        assert_eq!(total(&[-5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn test_average_empty_is_zero() {
        // Contractual fallback: empty input is not a division error
        let result = average(&[]);
        assert_eq!(result, 0.0);
        assert!(!result.is_nan());
    }

    #[test]
    fn test_average_singleton() {
        assert_eq!(average(&[10.0]), 10.0);
    }

    #[test]
    fn test_summarize() {
        let summary = summarize(&[2.0, 4.0, 6.0]);

        assert_eq!(summary.count, 3);
        assert_eq!(summary.total, 12.0);
        assert_eq!(summary.average, 4.0);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary, SequenceSummary::default());
    }

    #[test]
    fn test_summary_line() {
        let summary = summarize(&[1.0, 3.0]);
        assert_eq!(summary.summary(), "Count: 2 | Total: 4 | Average: 2");
    }
}
