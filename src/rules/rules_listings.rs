//! Listing-site slot lists: "3pm -4pm - Sep 11", "10am Oct 2"

use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::engine::BucketMask;
use crate::range::DateTimeRange;
use crate::rules::helpers::*;
use crate::rules::lexicon::{MONTH_ALTERNATION, month_number};
use crate::Rule;

static SLOT_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)(?P<hour>[0-9]+)(?P<marker>pm|am)[\s\-]*[0-9]*(?:pm|am)?[\s\-]*(?P<month>{})\s*(?P<day>[0-9]+)",
        *MONTH_ALTERNATION
    ))
    .unwrap()
});

/// The first hour of a listing slot on the listed date (message year).
pub fn rule_listing_slot() -> Rule {
    rule! {
        name: "<hour>am|pm [- <hour>am|pm] - <month> <day>",
        buckets: (BucketMask::HAS_DIGITS | BucketMask::MONTHISH).bits(),
        prod: |phrase, ctx| {
            let Some(caps) = SLOT_LIST.captures(phrase) else {
                return Ok(None);
            };
            let Some(month) = caps.name("month").and_then(|m| month_number(m.as_str())) else {
                return Ok(None);
            };

            let hour: u32 = caps["hour"].parse()?;
            let marker = group(&caps, "marker");
            let hour = resolve_hour(hour, ctx.am_pm_threshold, marker.as_deref());
            let day: u32 = caps["day"].parse()?;

            let date = ymd(ctx.message_day.year(), month, day)?;
            Ok(Some(DateTimeRange::instant(at_time(date, hour, 0)?)))
        }
    }
}
