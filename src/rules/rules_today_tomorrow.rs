//! "today at 3", "tomorrow around 5pm or later"

use chrono::{Duration, NaiveDate};
use regex::Regex;

use crate::engine::BucketMask;
use crate::range::DateTimeRange;
use crate::rules::helpers::*;
use crate::{Rule, RuleContext, RuleResult};

/// "tomorrow at 3", "tomorrow ~4:30pm", "5 tomorrow", "tomorrow 2 or later"
pub fn rule_tomorrow_at_time() -> Rule {
    rule! {
        name: "tomorrow <time> [or later|earlier]",
        buckets: BucketMask::HAS_DIGITS.bits(),
        prod: |phrase, ctx| {
            let pattern = regex!(
                r"(?i)(?P<pre>tomorrow\s*(?:at|around|@)?(?:\s*|~))?(?P<hm>[0-9]{1,2}:?[0-9]{0,2})\s*(?P<marker>am|pm)?(?P<post>tomorrow)?\s*(?P<prep>(?:or|and)\s*(?:later|earlier))?"
            );
            qualified_time(phrase, ctx, pattern, ctx.message_day + Duration::days(1))
        }
    }
}

/// "today at 3", "today @ 11am", "4 today or earlier"
pub fn rule_today_at_time() -> Rule {
    rule! {
        name: "today <time> [or later|earlier]",
        buckets: BucketMask::HAS_DIGITS.bits(),
        prod: |phrase, ctx| {
            let pattern = regex!(
                r"(?i)(?P<pre>today\s*(?:at|around|@)?(?:\s*|~))?(?P<hm>[0-9]{1,2}:?[0-9]{0,2})\s*(?P<marker>am|pm)?(?P<post>today)?\s*(?P<prep>(?:or|and)\s*(?:later|earlier))?"
            );
            qualified_time(phrase, ctx, pattern, ctx.message_day)
        }
    }
}

fn qualified_time(phrase: &str, ctx: &RuleContext, pattern: &Regex, day: NaiveDate) -> RuleResult {
    let Some(caps) = pattern.captures(phrase) else {
        return Ok(None);
    };
    if caps.name("pre").is_none() && caps.name("post").is_none() {
        return Ok(None);
    }
    let Some(hm) = caps.name("hm") else {
        return Ok(None);
    };

    let (hour, minute) = parse_hour_minute(hm.as_str())?;
    let marker = group(&caps, "marker");
    let at = at_time(day, resolve_hour(hour, ctx.am_pm_threshold, marker.as_deref()), minute)?;

    let range = match group(&caps, "prep") {
        Some(prep) if prep.contains("later") => DateTimeRange::after(at),
        Some(prep) if prep.contains("earlier") => DateTimeRange::before(at),
        _ => DateTimeRange::instant(at),
    };
    Ok(Some(range))
}
