use chrono::{DateTime, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

#[macro_use]
mod macros;
mod api;
mod engine;
mod entities;
mod error;
mod range;
mod rules;

pub use api::{Context, ConverterConfig, parse, parse_many, parse_move_in, parse_verbose, parse_with};
pub use engine::{Converter, RunMetrics, RunResult, Variant};
pub use entities::{Layout, normalize_budget, normalize_layout};
pub use error::ConvertError;
pub use range::{DateTimeRange, RangeTuple, Shape};

// --- Internal types ---------------------------------------------------------

/// Everything a rule may look at besides the phrase itself.
///
/// `message_day` and `relative_base` are wall-clock values in `timezone`.
#[derive(Debug, Clone)]
pub(crate) struct RuleContext {
    pub message_timestamp: DateTime<Tz>,
    pub message_day: NaiveDate,
    /// Anchor for relative phrases handed to the general-purpose parser.
    pub relative_base: NaiveDateTime,
    pub timezone: Tz,
    pub am_pm_threshold: u32,
    pub exact_match: bool,
}

/// `Ok(None)` means "not mine"; errors are treated the same way by the pipeline
/// after being logged.
pub(crate) type RuleResult = error::Result<Option<DateTimeRange>>;

pub(crate) type Production = Box<dyn Fn(&str, &RuleContext) -> RuleResult + Send + Sync>;

/// A conversion rule: a name, the trigger buckets the phrase must carry for
/// the rule to be tried, and the `production` that attempts the conversion.
pub(crate) struct Rule {
    pub name: &'static str,
    /// Bucket mask - rule only activates if the phrase has all of these buckets.
    pub buckets: u32,
    pub production: Production,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("production", &"<function>")
            .field("buckets", &self.buckets)
            .finish()
    }
}
