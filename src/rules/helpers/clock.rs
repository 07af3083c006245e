//! Clock-time parsing shared by the appointment rules.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{ConvertError, Result};

/// Split an hour/minute token into its parts.
///
/// Accepts `9`, `12`, `9:30`, `930` (9:30) and `1130` (11:30). A malformed
/// token such as `3:` is an error rather than a guess.
pub fn parse_hour_minute(token: &str) -> Result<(u32, u32)> {
    if let Some((hour, minute)) = token.split_once(':') {
        return Ok((hour.parse()?, minute.parse()?));
    }

    let part = |range: std::ops::Range<usize>| token.get(range).unwrap_or("").parse::<u32>();
    match token.len() {
        0..=2 => Ok((token.parse()?, 0)),
        3 => Ok((part(0..1)?, part(1..3)?)),
        _ => Ok((part(0..2)?, part(2..4)?)),
    }
}

/// Resolve a 12-hour clock hour against an optional `am`/`pm` marker and the
/// AM/PM threshold: an explicit "pm" adds twelve hours, and any hour still
/// below the threshold is read as afternoon too.
pub fn resolve_hour(hour: u32, threshold: u32, marker: Option<&str>) -> u32 {
    if marker.is_some_and(|m| m.eq_ignore_ascii_case("pm")) && hour < 12 {
        return hour + 12;
    }

    if hour < threshold { hour + 12 } else { hour }
}

/// `date` at `hour:minute`, or an error when the clock values are out of range.
pub fn at_time(date: NaiveDate, hour: u32, minute: u32) -> Result<NaiveDateTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
        .map(|time| date.and_time(time))
        .ok_or(ConvertError::InvalidTime { hour, minute })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_minute_forms() {
        assert_eq!(parse_hour_minute("9").unwrap(), (9, 0));
        assert_eq!(parse_hour_minute("12").unwrap(), (12, 0));
        assert_eq!(parse_hour_minute("3:45").unwrap(), (3, 45));
        assert_eq!(parse_hour_minute("130").unwrap(), (1, 30));
        assert_eq!(parse_hour_minute("1045").unwrap(), (10, 45));
    }

    #[test]
    fn dangling_colon_is_an_error() {
        assert!(matches!(parse_hour_minute("3:"), Err(ConvertError::InvalidNumber(_))));
    }

    #[test]
    fn threshold_and_marker_resolution() {
        assert_eq!(resolve_hour(3, 9, Some("pm")), 15);
        assert_eq!(resolve_hour(12, 9, Some("pm")), 12);
        assert_eq!(resolve_hour(5, 9, None), 17);
        assert_eq!(resolve_hour(10, 9, None), 10);
        // Morning hours under the threshold are still pushed, marker or not.
        assert_eq!(resolve_hour(8, 9, Some("am")), 20);
        assert_eq!(resolve_hour(8, 8, Some("am")), 8);
    }

    #[test]
    fn at_time_rejects_impossible_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert!(at_time(date, 25, 0).is_err());
        assert_eq!(at_time(date, 15, 30).unwrap(), date.and_hms_opt(15, 30, 0).unwrap());
    }
}
