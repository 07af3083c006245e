//! Month-name rules: "march 5th", "feb", "jun 2 morning", "oct 2 morning and afternoon"

use once_cell::sync::Lazy;
use regex::Regex;

use crate::engine::BucketMask;
use crate::range::DateTimeRange;
use crate::rules::helpers::*;
use crate::rules::lexicon::{MONTH_ALTERNATION, month_number};
use crate::{Rule, RuleContext, RuleResult};

static MONTH_AND_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b(?P<month>{}) *(?P<day>[0-9]*)(?:\b|th|rd|nd|st)", *MONTH_ALTERNATION)).unwrap()
});

static MONTH_AND_DAY_EXACT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(?P<month>{}) *(?P<day>[0-9]*)(?:\b|th|rd|nd|st)$", *MONTH_ALTERNATION)).unwrap()
});

/// A month name with an optional day; the earliest mention wins when several
/// are present. A month already behind the message month means next year.
pub fn rule_month_and_day() -> Rule {
    rule! {
        name: "<month> <day>",
        buckets: BucketMask::MONTHISH.bits(),
        prod: |phrase, ctx| {
            month_and_day(phrase, ctx)
        }
    }
}

fn month_and_day(phrase: &str, ctx: &RuleContext) -> RuleResult {
    let lower = phrase.to_lowercase();
    let text: String = lower.chars().map(|c| if c.is_ascii_punctuation() { ' ' } else { c }).collect();

    let pattern: &Regex = if ctx.exact_match { &MONTH_AND_DAY_EXACT } else { &MONTH_AND_DAY };

    let mut earliest: Option<(u32, u32)> = None;
    for caps in pattern.captures_iter(&text) {
        let Some(month) = caps.name("month").and_then(|m| month_number(m.as_str())) else {
            continue;
        };
        let day = match caps.name("day").map(|m| m.as_str()).filter(|d| !d.is_empty()) {
            Some(digits) => digits.parse::<u32>()?,
            None => 1,
        };
        if earliest.is_none_or(|current| (month, day) < current) {
            earliest = Some((month, day));
        }
    }

    let Some((month, day)) = earliest else {
        return Ok(None);
    };

    let date = clamped_date(upcoming_year(ctx.message_day, month), month, day)?;

    let range = if text.contains("morning") && text.contains("afternoon") {
        DateTimeRange::morning_and_afternoon(date)
    } else if text.contains("morning") {
        DateTimeRange::morning(date)
    } else if text.contains("afternoon") {
        DateTimeRange::afternoon(date)
    } else {
        DateTimeRange::whole_day(date)
    };
    Ok(Some(range))
}
