//! Day specifiers used as boundaries by the range rules.

use chrono::{Datelike, Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules::lexicon::{WEEKDAY_PATTERN, weekday_from_name};

static DAY_SPECIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)\b(?P<day>today|tomorrow|{})\b", WEEKDAY_PATTERN)).unwrap());

/// Find the first "today", "tomorrow" or weekday token in `phrase` and map it
/// to its next occurrence on or after `message_day`.
pub fn match_day_specifier(phrase: &str, message_day: NaiveDate) -> Option<NaiveDate> {
    let caps = DAY_SPECIFIER.captures(phrase)?;
    let token = caps.name("day")?.as_str().to_lowercase();

    let current = message_day.weekday().num_days_from_monday() as i64;
    let target = match token.as_str() {
        "today" => current,
        "tomorrow" => current + 1,
        name => weekday_from_name(name)?.num_days_from_monday() as i64,
    };

    Some(message_day + Duration::days((target - current).rem_euclid(7)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn relative_words() {
        assert_eq!(match_day_specifier("5pm - 6pm today", wednesday()), Some(wednesday()));
        assert_eq!(match_day_specifier("5pm - 6pm tomorrow", wednesday()), NaiveDate::from_ymd_opt(2024, 1, 11));
    }

    #[test]
    fn weekdays_resolve_forward() {
        assert_eq!(match_day_specifier("after 3 on fri", wednesday()), NaiveDate::from_ymd_opt(2024, 1, 12));
        assert_eq!(match_day_specifier("monday 1-3", wednesday()), NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(match_day_specifier("Wednesday", wednesday()), Some(wednesday()));
    }

    #[test]
    fn tomorrow_from_sunday_is_monday() {
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
        assert_eq!(match_day_specifier("tomorrow", sunday), NaiveDate::from_ymd_opt(2024, 1, 15));
    }

    #[test]
    fn words_containing_day_names_do_not_count() {
        assert_eq!(match_day_specifier("end of the month", wednesday()), None);
        assert_eq!(match_day_specifier("sunny", wednesday()), None);
    }
}
