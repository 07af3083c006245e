//! Month and month-part related rules (MONTHISH bucket)

use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::engine::BucketMask;
use crate::range::DateTimeRange;
use crate::rules::helpers::*;
use crate::rules::lexicon::{MONTH_ABBREVIATIONS, MONTH_ALTERNATION, month_number};
use crate::Rule;

static PART_OF_MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)(?P<first>early|mid)?/?(?P<second>early|mid|late)-?\s*(?P<month>{})",
        *MONTH_ALTERNATION
    ))
    .unwrap()
});

static QUALIFIED_MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^(?P<part>beginning|middle|end) of (?P<month>{})", MONTH_ABBREVIATIONS)).unwrap()
});

/// "early March", "mid-april", "late may", "early/mid june".
///
/// Early is the 1st, mid the 15th and late the last day of the month. A month
/// that has already passed this year refers to next year.
pub fn rule_part_of_month() -> Rule {
    rule! {
        name: "early|mid|late <month>",
        buckets: BucketMask::MONTHISH.bits(),
        prod: |phrase, ctx| {
            let Some(caps) = PART_OF_MONTH.captures(phrase) else {
                return Ok(None);
            };
            let Some(month) = group(&caps, "month").and_then(|m| month_number(&m)) else {
                return Ok(None);
            };
            let Some(part) = group(&caps, "first").or_else(|| group(&caps, "second")) else {
                return Ok(None);
            };

            let year = upcoming_year(ctx.message_day, month);
            let day = match part.as_str() {
                "early" => 1,
                "mid" => 15,
                _ => days_in_month(year, month),
            };

            Ok(Some(DateTimeRange::whole_day(ymd(year, month, day)?)))
        }
    }
}

/// "end of month": last day of the message's month.
pub fn rule_end_of_month() -> Rule {
    rule! {
        name: "end of month",
        prod: |phrase, ctx| {
            if !phrase.to_lowercase().contains("end of month") {
                return Ok(None);
            }

            let day = last_day_of_month(ctx.message_day.year(), ctx.message_day.month())?;
            Ok(Some(DateTimeRange::whole_day(day)))
        }
    }
}

/// "beginning of may", "middle of june", "end of april" (message year).
pub fn rule_qualified_month() -> Rule {
    rule! {
        name: "beginning|middle|end of <month>",
        buckets: BucketMask::MONTHISH.bits(),
        prod: |phrase, ctx| {
            let Some(caps) = QUALIFIED_MONTH.captures(phrase) else {
                return Ok(None);
            };
            let (Some(part), Some(month)) = (group(&caps, "part"), group(&caps, "month").and_then(|m| month_number(&m)))
            else {
                return Ok(None);
            };

            let year = ctx.message_day.year();
            let day = match part.as_str() {
                "beginning" => ymd(year, month, 1)?,
                "middle" => ymd(year, month, 15)?,
                _ => last_day_of_month(year, month)?,
            };

            Ok(Some(DateTimeRange::whole_day(day)))
        }
    }
}
