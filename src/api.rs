use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::engine::{Converter, DEFAULT_CLEAN_PATTERN, RunResult};
use crate::error::Result;
use crate::range::DateTimeRange;

static APPOINTMENT: Lazy<Converter> = Lazy::new(Converter::appointment);
static MOVE_IN: Lazy<Converter> = Lazy::new(Converter::move_in);
static DEFAULT_CLEAN: Lazy<Regex> = Lazy::new(|| Regex::new(DEFAULT_CLEAN_PATTERN).unwrap());

/// Parsing context.
///
/// This holds the message the phrase came from and the timezone it should be
/// read in.
#[derive(Debug, Clone)]
pub struct Context {
    /// When the message was sent. Converted into `timezone` before use.
    pub message_timestamp: DateTime<FixedOffset>,
    /// IANA identifier such as `"US/Eastern"`. Unknown names fall back to the
    /// converter's default zone.
    pub timezone: String,
    /// Anchor for relative phrases, as wall-clock time in `timezone`.
    /// Defaults to midnight of the message day.
    pub context_date: Option<NaiveDateTime>,
}

impl Context {
    pub fn new<Z: TimeZone>(message_timestamp: DateTime<Z>, timezone: impl Into<String>) -> Self {
        Self { message_timestamp: message_timestamp.fixed_offset(), timezone: timezone.into(), context_date: None }
    }

    pub fn with_context_date(mut self, context_date: NaiveDateTime) -> Self {
        self.context_date = Some(context_date);
        self
    }
}

/// Options that affect cleaning and rule behavior.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Pre-clean phrases (strip `clean_pattern`, fold a.m./p.m., lowercase).
    pub clean: bool,
    pub clean_pattern: Regex,
    /// Hours below this are read as afternoon by the appointment variant.
    pub am_pm_threshold: u32,
    /// Require urgency keywords and month mentions to be the whole phrase.
    pub exact_match: bool,
    /// Zone used when the context names an unknown one.
    pub default_timezone: Tz,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            clean: true,
            clean_pattern: DEFAULT_CLEAN.clone(),
            am_pm_threshold: 9,
            exact_match: false,
            default_timezone: Tz::US__Eastern,
        }
    }
}

impl ConverterConfig {
    pub fn with_clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    /// Replace the cleaning pattern; fails if `pattern` is not a valid regex.
    pub fn with_clean_pattern(mut self, pattern: &str) -> Result<Self> {
        self.clean_pattern = Regex::new(pattern)?;
        Ok(self)
    }

    pub fn with_am_pm_threshold(mut self, am_pm_threshold: u32) -> Self {
        self.am_pm_threshold = am_pm_threshold;
        self
    }

    pub fn with_exact_match(mut self, exact_match: bool) -> Self {
        self.exact_match = exact_match;
        self
    }

    pub fn with_default_timezone(mut self, default_timezone: Tz) -> Self {
        self.default_timezone = default_timezone;
        self
    }
}

/// Convert an appointment phrase with the default appointment converter.
///
/// # Example
/// ```
/// use chrono::TimeZone;
/// use chrono_tz::Tz;
/// use tourparse::{Context, parse};
///
/// let sent = Tz::US__Eastern.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
/// let range = parse("this weekend", &Context::new(sent, "US/Eastern")).unwrap();
/// assert!(range.is_whole_day());
/// ```
pub fn parse(phrase: &str, context: &Context) -> Option<DateTimeRange> {
    APPOINTMENT.convert(phrase, context)
}

/// Convert a move-in phrase; the result is always a whole day.
pub fn parse_move_in(phrase: &str, context: &Context) -> Option<DateTimeRange> {
    MOVE_IN.convert(phrase, context)
}

/// Convert several appointment phrases, dropping the ones no rule recognizes.
/// Results carry no timezone tag.
pub fn parse_many<S: AsRef<str>>(phrases: &[S], context: &Context) -> Vec<DateTimeRange> {
    APPOINTMENT.convert_many(phrases, context)
}

/// Convert with an explicit converter.
pub fn parse_with(phrase: &str, context: &Context, converter: &Converter) -> Option<DateTimeRange> {
    converter.convert(phrase, context)
}

/// Convert an appointment phrase and return the run metrics alongside.
pub fn parse_verbose(phrase: &str, context: &Context) -> RunResult {
    APPOINTMENT.run(phrase, context)
}
