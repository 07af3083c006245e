//! Clock-time intervals: "1pm to 3pm on feb 3", "after 5pm tomorrow", "7 or later"

use chrono::{Datelike, NaiveDate};
use regex::Captures;

use crate::engine::BucketMask;
use crate::range::DateTimeRange;
use crate::rules::helpers::*;
use crate::rules::lexicon::{MONTH_DAY_REGEX, month_number};
use crate::{Rule, RuleContext};

/// "1pm to 3pm on Feb 3", "5pm - 6pm tomorrow", "8:00AM to 10:00AM"
///
/// The day comes from a "<month> <day>" mention if present, else from a
/// today/tomorrow/weekday mention, else the message day. An end before the
/// start still claims the phrase, with an unset range.
pub fn rule_time_range_between() -> Rule {
    rule! {
        name: "<time> to <time>",
        buckets: BucketMask::HAS_DIGITS.bits(),
        prod: |phrase, ctx| {
            let pattern = regex!(
                r"(?i)(?P<start>[0-9]{1,2}:?[0-9]{0,2})\s*(?P<start_marker>am|pm)?\s*(?:to|-)\s*(?P<end>[0-9]{1,2}:?[0-9]{0,2})\s*(?P<end_marker>am|pm)?"
            );
            let Some(caps) = pattern.captures(phrase) else {
                return Ok(None);
            };

            let (start_hour, start_minute) = clock(&caps, "start", "start_marker", ctx)?;
            let (end_hour, end_minute) = clock(&caps, "end", "end_marker", ctx)?;

            let day = match MONTH_DAY_REGEX.captures(phrase) {
                Some(date_caps) => {
                    let Some(month) = date_caps.name("month").and_then(|m| month_number(m.as_str())) else {
                        return Ok(None);
                    };
                    let day: u32 = date_caps["day"].parse()?;
                    ymd(ctx.message_day.year(), month, day)?
                }
                None => day_or_message_day(phrase, ctx),
            };

            Ok(Some(DateTimeRange::between(
                at_time(day, start_hour, start_minute)?,
                at_time(day, end_hour, end_minute)?,
                true,
            )))
        }
    }
}

/// "before 3pm today", "after 5pm tomorrow", "7pm or later", "12 and earlier"
pub fn rule_open_time_range() -> Rule {
    rule! {
        name: "before|after <time>, <time> or later|earlier",
        buckets: BucketMask::HAS_DIGITS.bits(),
        prod: |phrase, ctx| {
            let pattern = regex!(
                r"(?i)\s*(?P<pre>before|after)?\s*(?P<hm>[0-9]{1,2}:?[0-9]{0,2})\s*(?P<marker>am|pm)?\s*(?P<post>(?:or|and)\s*(?:later|earlier))?"
            );
            let Some(caps) = pattern.captures(phrase) else {
                return Ok(None);
            };
            let pre = group(&caps, "pre").unwrap_or_default();
            let post = group(&caps, "post").unwrap_or_default();
            if pre.is_empty() && post.is_empty() {
                return Ok(None);
            }

            let (hour, minute) = clock(&caps, "hm", "marker", ctx)?;
            let at = at_time(day_or_message_day(phrase, ctx), hour, minute)?;

            if pre == "before" || post.contains("earlier") {
                return Ok(Some(DateTimeRange::before(at)));
            }
            if pre == "after" || post.contains("later") {
                return Ok(Some(DateTimeRange::after(at)));
            }
            Ok(None)
        }
    }
}

fn clock(caps: &Captures<'_>, time: &str, marker: &str, ctx: &RuleContext) -> crate::error::Result<(u32, u32)> {
    let token = caps.name(time).map(|m| m.as_str()).unwrap_or_default();
    let (hour, minute) = parse_hour_minute(token)?;
    let marker = group(caps, marker);
    Ok((resolve_hour(hour, ctx.am_pm_threshold, marker.as_deref()), minute))
}

fn day_or_message_day(phrase: &str, ctx: &RuleContext) -> NaiveDate {
    match_day_specifier(phrase, ctx.message_day).unwrap_or(ctx.message_day)
}
