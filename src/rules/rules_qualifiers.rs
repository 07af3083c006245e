//! "this ..." / "next ..." qualified phrases

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::range::DateTimeRange;
use crate::rules::helpers::general::{WeekdayAnchor, resolve_phrase};
use crate::{Rule, RuleContext};

/// "next tuesday at 3", "this friday".
///
/// "next <day>" is the day in the current Monday-based week pushed one week
/// out; "this <day>" is the upcoming occurrence.
pub fn rule_time_qualifier() -> Rule {
    rule! {
        name: "this|next <day>",
        prod: |phrase, ctx| {
            Ok(qualified(phrase, ctx)?.map(day_or_instant))
        }
    }
}

/// Same as `rule_time_qualifier`, also accepting "<day> around <time>".
pub fn rule_time_qualifier_around() -> Rule {
    rule! {
        name: "this|next <day>, <day> around <time>",
        prod: |phrase, ctx| {
            if let Some(resolved) = qualified(phrase, ctx)? {
                return Ok(Some(day_or_instant(resolved)));
            }

            let lower = phrase.to_lowercase();
            if !lower.contains("around") {
                return Ok(None);
            }
            let rewritten = lower.replace("around", "at");
            let resolved = resolve_phrase(rewritten.trim(), ctx.relative_base, ctx.timezone, WeekdayAnchor::Upcoming)?;
            Ok(resolved.map(day_or_instant))
        }
    }
}

fn qualified(phrase: &str, ctx: &RuleContext) -> crate::error::Result<Option<NaiveDateTime>> {
    let lower = phrase.to_lowercase();

    if lower.contains("next") {
        let rest = lower.replace("next", "");
        let resolved = resolve_phrase(rest.trim(), ctx.relative_base, ctx.timezone, WeekdayAnchor::CurrentWeek)?;
        return Ok(resolved.map(|dt| dt + Duration::days(7)));
    }

    if lower.contains("this") {
        let rest = lower.replace("this", "");
        return resolve_phrase(rest.trim(), ctx.relative_base, ctx.timezone, WeekdayAnchor::Upcoming);
    }

    Ok(None)
}

/// Midnight means no clock time was given.
pub(crate) fn day_or_instant(resolved: NaiveDateTime) -> DateTimeRange {
    if resolved.time() == NaiveTime::MIN {
        DateTimeRange::whole_day(resolved.date())
    } else {
        DateTimeRange::instant(resolved)
    }
}
