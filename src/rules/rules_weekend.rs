//! Week and weekend phrases relative to the message day

use chrono::{Datelike, Duration};

use crate::range::DateTimeRange;
use crate::Rule;

/// "this weekend": the coming Saturday, or the message day itself on a weekend.
pub fn rule_this_weekend() -> Rule {
    rule! {
        name: "this weekend",
        prod: |phrase, ctx| {
            if !regex!(r"(?i)\bthis weekend\b").is_match(phrase) {
                return Ok(None);
            }

            let days_to_saturday = match ctx.message_day.weekday().num_days_from_monday() {
                weekday @ 0..=4 => 5 - weekday as i64,
                _ => 0,
            };

            Ok(Some(DateTimeRange::whole_day(ctx.message_day + Duration::days(days_to_saturday))))
        }
    }
}

/// "this week": tomorrow when sent Monday to Wednesday, otherwise the next Monday.
pub fn rule_this_week() -> Rule {
    rule! {
        name: "this week",
        prod: |phrase, ctx| {
            if !regex!(r"(?i)\bthis week\b").is_match(phrase) {
                return Ok(None);
            }

            let weekday = ctx.message_day.weekday().num_days_from_monday() as i64;
            let offset = if weekday < 3 { 1 } else { 7 - weekday };

            Ok(Some(DateTimeRange::whole_day(ctx.message_day + Duration::days(offset))))
        }
    }
}
