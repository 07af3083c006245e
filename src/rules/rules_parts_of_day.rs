//! Part-of-day phrases anchored on today or tomorrow

use chrono::Duration;

use crate::range::DateTimeRange;
use crate::rules::helpers::group;
use crate::Rule;

/// "tomorrow morning", "today - morning or afternoon", "afternoon tomorrow".
///
/// Evening has no bucket and is not claimed.
pub fn rule_part_of_day() -> Rule {
    rule! {
        name: "today|tomorrow <part of day> [or <part of day>]",
        prod: |phrase, ctx| {
            let pattern = regex!(
                r"(?i)(?P<pre>today|tomorrow)?\s*-*\s*(?P<first>morning|afternoon|evening)\s*(?:or)?\s*(?P<second>morning|afternoon|evening)?\s*(?P<post>today|tomorrow)?"
            );
            let Some(caps) = pattern.captures(phrase) else {
                return Ok(None);
            };
            let (pre, post) = (group(&caps, "pre"), group(&caps, "post"));
            if pre.is_none() && post.is_none() {
                return Ok(None);
            }

            let mut parts: Vec<String> = [group(&caps, "first"), group(&caps, "second")].into_iter().flatten().collect();
            parts.sort();
            parts.dedup();

            let mut day = ctx.message_day;
            if pre.as_deref() == Some("tomorrow") || post.as_deref() == Some("tomorrow") {
                day += Duration::days(1);
            }

            let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
            let range = match parts.as_slice() {
                ["morning"] => Some(DateTimeRange::morning(day)),
                ["afternoon"] => Some(DateTimeRange::afternoon(day)),
                ["afternoon", "morning"] => Some(DateTimeRange::morning_and_afternoon(day)),
                _ => None,
            };
            Ok(range)
        }
    }
}
