//! General-purpose resolution of "<day> [at <time>]" phrases.
//!
//! Weekday and today/tomorrow phrases are resolved here directly so that the
//! meaning of a bare weekday is pinned down; anything else is handed to
//! `chrono-english`, anchored on the relative base in the target zone.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use chrono_english::{Dialect, parse_date_string};
use chrono_tz::Tz;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ConvertError, Result};
use crate::range::localize_naive;
use crate::rules::helpers::calendar::clamped_date;
use crate::rules::helpers::clock::{at_time, parse_hour_minute};
use crate::rules::lexicon::{WEEKDAY_PATTERN, mentions_asap, mentions_part_of_day, weekday_from_name};

/// How a bare weekday name is placed relative to the anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdayAnchor {
    /// The weekday inside the anchor's Monday-based week (may be in the past).
    CurrentWeek,
    /// The next occurrence on or after the anchor.
    Upcoming,
}

static DAY_AND_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^\s*(?P<day>today|tomorrow|{})\s*(?:(?:at|around|@)\s*)?(?:(?P<hm>[0-9]{{1,2}}(?::[0-9]{{2}})?)\s*(?P<marker>am|pm)?)?\s*$",
        WEEKDAY_PATTERN
    ))
    .unwrap()
});

static AT_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\bat\b|@)").unwrap());

static WEEKDAY_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(&format!(r"(?i)\b(?:{})\b", WEEKDAY_PATTERN)).unwrap());

static EXPLICIT_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[0-9]{4}\b|\b[0-9]{1,2}/[0-9]{1,2}/[0-9]{2}\b").unwrap());

static PAST_WORDING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:last|yesterday|ago|previous)\b").unwrap());

/// Resolve `text` to a wall-clock datetime, or `None` when neither the
/// day/time grammar nor the fallback parser understands it. A result at
/// midnight means no clock time was given.
pub fn resolve_phrase(text: &str, base: NaiveDateTime, tz: Tz, anchor: WeekdayAnchor) -> Result<Option<NaiveDateTime>> {
    if let Some(resolved) = resolve_day_and_time(text, base.date(), anchor)? {
        return Ok(Some(resolved));
    }

    match parse_with_fallback_parser(text, base, tz) {
        Ok(dt) => Ok(Some(dt)),
        Err(err) => {
            trace!("fallback parser declined {:?}: {}", text, err);
            Ok(None)
        }
    }
}

pub fn resolve_day_and_time(text: &str, base: NaiveDate, anchor: WeekdayAnchor) -> Result<Option<NaiveDateTime>> {
    let Some(caps) = DAY_AND_TIME.captures(text) else {
        return Ok(None);
    };

    let Some(day_token) = caps.name("day").map(|m| m.as_str().to_lowercase()) else {
        return Ok(None);
    };
    let date = match day_token.as_str() {
        "today" => base,
        "tomorrow" => base + Duration::days(1),
        name => match weekday_from_name(name) {
            Some(weekday) => weekday_date(base, weekday, anchor),
            None => return Ok(None),
        },
    };

    let (mut hour, minute) = match caps.name("hm") {
        Some(hm) => parse_hour_minute(hm.as_str())?,
        None => (0, 0),
    };
    match caps.name("marker").map(|m| m.as_str().to_lowercase()).as_deref() {
        Some("pm") if hour < 12 => hour += 12,
        Some("am") if hour == 12 => hour = 0,
        _ => {}
    }

    at_time(date, hour, minute).map(Some)
}

fn weekday_date(base: NaiveDate, weekday: chrono::Weekday, anchor: WeekdayAnchor) -> NaiveDate {
    let current = base.weekday().num_days_from_monday() as i64;
    let target = weekday.num_days_from_monday() as i64;
    match anchor {
        WeekdayAnchor::CurrentWeek => base + Duration::days(target - current),
        WeekdayAnchor::Upcoming => base + Duration::days((target - current).rem_euclid(7)),
    }
}

/// Run the general-purpose `chrono-english` parser, anchored at `base` in `tz`.
///
/// Phrases naming a part of day, the weekend or urgency are refused: the
/// general parser drops those words and would answer with a bare date.
pub fn parse_with_fallback_parser(text: &str, base: NaiveDateTime, tz: Tz) -> Result<NaiveDateTime> {
    if mentions_part_of_day(text) || mentions_asap(text) || text.to_lowercase().contains("weekend") {
        return Err(ConvertError::Fallback(format!("reserved wording in {:?}", text)));
    }

    let now = localize_naive(tz, base);
    let normalized = AT_WORD.replace_all(text, " ");
    let normalized = normalized.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return Err(ConvertError::Fallback("empty phrase".to_string()));
    }

    let parsed = parse_date_string(&normalized, now, Dialect::Us)
        .map(|dt| dt.naive_local())
        .map_err(|err| ConvertError::Fallback(err.to_string()))?;
    prefer_future(parsed, base, &normalized)
}

/// Move a yearless date that `chrono-english` placed before `base` forward:
/// by whole weeks for weekday phrases, to the next year otherwise. Explicit
/// years and backward-looking wording are left alone.
fn prefer_future(parsed: NaiveDateTime, base: NaiveDateTime, text: &str) -> Result<NaiveDateTime> {
    let today = base.date();
    if parsed.date() >= today || EXPLICIT_YEAR.is_match(text) || PAST_WORDING.is_match(text) {
        return Ok(parsed);
    }

    let date = if WEEKDAY_WORD.is_match(text) {
        let weeks = ((today - parsed.date()).num_days() + 6) / 7;
        parsed.date() + Duration::weeks(weeks)
    } else {
        let mut year = parsed.year() + 1;
        let mut date = clamped_date(year, parsed.month(), parsed.day())?;
        while date < today {
            year += 1;
            date = clamped_date(year, parsed.month(), parsed.day())?;
        }
        date
    };
    trace!("moved {:?} from {} to {}", text, parsed.date(), date);
    Ok(date.and_time(parsed.time()))
}
