//! The rule sieve: one converter type, configured per variant.

use std::time::Instant;

use chrono::{NaiveTime, TimeZone};
use chrono_tz::Tz;
use log::{debug, trace};
use once_cell::sync::Lazy;

use super::clean::clean_phrase;
use super::metrics::{RunMetrics, RunResult};
use super::postprocess;
use super::trigger::TriggerInfo;
use crate::api::{Context, ConverterConfig};
use crate::range::DateTimeRange;
use crate::{Rule, RuleContext, rules};

static APPOINTMENT_RULES: Lazy<Vec<Rule>> = Lazy::new(rules::appointment);
static MOVE_IN_RULES: Lazy<Vec<Rule>> = Lazy::new(rules::move_in);

/// Which rule list and postprocessing a converter uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Tour scheduling: the full rule list, clock-time rules included.
    Appointment,
    /// Move-in dates: day-level rules only, results collapsed to whole days.
    MoveIn,
}

impl Variant {
    fn rules(self) -> &'static [Rule] {
        match self {
            Variant::Appointment => &APPOINTMENT_RULES,
            Variant::MoveIn => &MOVE_IN_RULES,
        }
    }

    fn postprocess(self, range: DateTimeRange, ctx: &RuleContext) -> DateTimeRange {
        match self {
            Variant::Appointment => postprocess::appointment(range, ctx),
            Variant::MoveIn => postprocess::move_in(range, ctx),
        }
    }
}

/// Converts free-text date phrases to [`DateTimeRange`]s.
///
/// A converter is fully described by its variant (rule list plus
/// postprocessing) and its [`ConverterConfig`]. It is cheap to clone and
/// holds no mutable state.
#[derive(Debug, Clone)]
pub struct Converter {
    variant: Variant,
    config: ConverterConfig,
}

impl Converter {
    pub fn new(variant: Variant, config: ConverterConfig) -> Self {
        Self { variant, config }
    }

    /// Appointment converter with the default AM/PM threshold (9).
    pub fn appointment() -> Self {
        Self::new(Variant::Appointment, ConverterConfig::default())
    }

    pub fn appointment_with_threshold(am_pm_threshold: u32) -> Self {
        Self::new(Variant::Appointment, ConverterConfig::default().with_am_pm_threshold(am_pm_threshold))
    }

    pub fn move_in() -> Self {
        Self::new(Variant::MoveIn, ConverterConfig::default())
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Rule names in the order they are tried.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.variant.rules().iter().map(|rule| rule.name).collect()
    }

    /// Convert one phrase; `None` when no rule recognizes it.
    pub fn convert(&self, phrase: &str, context: &Context) -> Option<DateTimeRange> {
        self.run(phrase, context).range
    }

    /// Convert each phrase, dropping the unrecognized ones and stripping the
    /// timezone tag from the rest.
    pub fn convert_many<S: AsRef<str>>(&self, phrases: &[S], context: &Context) -> Vec<DateTimeRange> {
        phrases
            .iter()
            .filter_map(|phrase| self.convert(phrase.as_ref(), context))
            .map(|range| range.replace_timezone(None))
            .collect()
    }

    /// Convert one phrase and report how the result was reached.
    pub fn run(&self, phrase: &str, context: &Context) -> RunResult {
        let started = Instant::now();
        let ctx = self.rule_context(context);

        let text = if self.config.clean { clean_phrase(phrase, &self.config.clean_pattern) } else { phrase.to_string() };
        let trigger = TriggerInfo::scan(&text);

        let mut metrics = RunMetrics::default();
        let mut found: Option<DateTimeRange> = None;

        for rule in self.variant.rules() {
            if !trigger.admits(rule.buckets) {
                trace!("rule {:?} skipped: missing buckets", rule.name);
                metrics.rules_skipped.push(rule.name);
                continue;
            }

            metrics.rules_considered += 1;
            trace!("trying rule {:?} on {:?}", rule.name, text);

            match (rule.production)(&text, &ctx) {
                Ok(Some(range)) => {
                    if range.is_set() {
                        debug!("rule {:?} matched {:?}: {}", rule.name, text, range);
                    } else {
                        debug!("rule {:?} claimed {:?} without a range", rule.name, text);
                    }
                    metrics.matched_rule = Some(rule.name);
                    found = Some(range);
                    break;
                }
                Ok(None) => {}
                Err(err) => {
                    debug!("rule {:?} failed on {:?}: {}", rule.name, text, err);
                    metrics.rule_errors.push((rule.name, err));
                }
            }
        }

        if found.is_none() {
            debug!("no rule matched {:?}", text);
        }

        metrics.raw = found;
        metrics.cleaned = text;
        let range = found.filter(DateTimeRange::is_set).map(|range| self.variant.postprocess(range, &ctx));
        metrics.total = started.elapsed();

        RunResult { range, metrics }
    }

    fn rule_context(&self, context: &Context) -> RuleContext {
        let timezone = resolve_timezone(&context.timezone, self.config.default_timezone);
        let message_timestamp = timezone.from_utc_datetime(&context.message_timestamp.naive_utc());
        let message_day = message_timestamp.date_naive();
        let relative_base = context.context_date.unwrap_or_else(|| message_day.and_time(NaiveTime::MIN));

        RuleContext {
            message_timestamp,
            message_day,
            relative_base,
            timezone,
            am_pm_threshold: self.config.am_pm_threshold,
            exact_match: self.config.exact_match,
        }
    }
}

/// Parse an IANA identifier, substituting `default` for unknown names.
pub(crate) fn resolve_timezone(name: &str, default: Tz) -> Tz {
    name.parse::<Tz>().unwrap_or_else(|_| {
        debug!("unknown timezone {:?}, using {}", name, default.name());
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn context() -> Context {
        let sent = Tz::US__Eastern.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
        Context::new(sent, "US/Eastern")
    }

    #[test]
    fn unknown_timezone_falls_back_to_default() {
        assert_eq!(resolve_timezone("Mars/Olympus_Mons", Tz::US__Eastern), Tz::US__Eastern);
        assert_eq!(resolve_timezone("America/Denver", Tz::US__Eastern), Tz::America__Denver);
    }

    #[test]
    fn message_day_is_taken_in_the_target_zone() {
        // 02:00 UTC on the 11th is still the evening of the 10th in New York.
        let sent = Utc.with_ymd_and_hms(2024, 1, 11, 2, 0, 0).unwrap();
        let converter = Converter::appointment();
        let ctx = converter.rule_context(&Context::new(sent, "US/Eastern"));
        assert_eq!(ctx.message_day, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(ctx.relative_base, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap().and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn context_date_overrides_relative_base() {
        let base = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let converter = Converter::appointment();
        let ctx = converter.rule_context(&context().with_context_date(base));
        assert_eq!(ctx.relative_base, base);
        assert_eq!(ctx.message_day, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    }

    #[test]
    fn run_reports_matching_rule_and_skips() {
        let run = Converter::appointment().run("this weekend", &context());
        assert_eq!(run.metrics.matched_rule, Some("this weekend"));
        assert!(run.metrics.rules_skipped.contains(&"<hour>"));
        assert!(run.range.is_some());
        assert!(run.metrics.raw.is_some_and(|raw| raw.timezone().is_none()));
    }

    #[test]
    fn run_without_match_is_empty() {
        let run = Converter::appointment().run("whenever works for you", &context());
        assert_eq!(run.range, None);
        assert_eq!(run.metrics.matched_rule, None);
        assert!(run.metrics.rules_considered > 0);
    }

    #[test]
    fn out_of_range_clock_is_recorded_as_rule_error() {
        let run = Converter::appointment().run("tomorrow at 27", &context());
        assert!(run.metrics.rule_errors.iter().any(|(name, _)| name.starts_with("tomorrow")));
    }

    #[test]
    fn convert_many_drops_failures_and_strips_zone() {
        let ranges = Converter::appointment().convert_many(&["this weekend", "no idea", "asap"], &context());
        assert_eq!(ranges.len(), 2);
        assert!(ranges.iter().all(|range| range.timezone().is_none()));
    }

    #[test]
    fn move_in_rule_list_has_no_clock_rules() {
        let names = Converter::move_in().rule_names();
        assert!(!names.contains(&"<hour>"));
        assert!(!names.contains(&"<time> to <time>"));
        assert_eq!(names.first(), Some(&"this week"));
    }
}
