//! Engine run metrics.
//!
//! `Converter::convert` for normal operation, `Converter::run` when the caller
//! wants to see which rule matched, which were skipped and which errored.

use std::time::Duration;

use crate::error::ConvertError;
use crate::range::DateTimeRange;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the run, postprocessing included.
    pub total: Duration,
    /// The phrase as the rules saw it.
    pub cleaned: String,
    /// Number of rules whose production was invoked.
    pub rules_considered: usize,
    /// Rules skipped because the phrase lacked their trigger buckets.
    pub rules_skipped: Vec<&'static str>,
    /// Rules that errored on the phrase; each counted as a non-match.
    pub rule_errors: Vec<(&'static str, ConvertError)>,
    /// Name of the rule whose result was taken.
    pub matched_rule: Option<&'static str>,
    /// The matched rule's result before postprocessing.
    pub raw: Option<DateTimeRange>,
}

/// Converter output bundled with run metrics.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// The postprocessed range, or `None` when no rule matched.
    pub range: Option<DateTimeRange>,
    pub metrics: RunMetrics,
}
