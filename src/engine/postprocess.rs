//! Variant-specific postprocessing of a matched range.

use crate::range::DateTimeRange;
use crate::RuleContext;

/// Localize, read hours below the threshold as afternoon, then roll anything
/// already behind the message forward a day.
pub(crate) fn appointment(range: DateTimeRange, ctx: &RuleContext) -> DateTimeRange {
    range
        .localize(ctx.timezone)
        .push_hours_below_threshold(ctx.am_pm_threshold)
        .push_to_next_day_if_stale(&ctx.message_timestamp)
}

/// Move-in dates are days: localize and drop any clock time.
pub(crate) fn move_in(range: DateTimeRange, ctx: &RuleContext) -> DateTimeRange {
    range.localize(ctx.timezone).to_whole_day()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, TimeZone};
    use chrono_tz::Tz;

    fn context(hour: u32) -> RuleContext {
        let tz = Tz::US__Eastern;
        let message_timestamp = tz.with_ymd_and_hms(2024, 1, 10, hour, 0, 0).unwrap();
        let message_day = message_timestamp.date_naive();
        RuleContext {
            message_timestamp,
            message_day,
            relative_base: message_day.and_hms_opt(0, 0, 0).unwrap(),
            timezone: tz,
            am_pm_threshold: 9,
            exact_match: false,
        }
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn appointment_pushes_small_hours_to_afternoon() {
        let out = appointment(DateTimeRange::instant(at(11, 3, 0)), &context(9));
        assert_eq!(out.min(), Some(at(11, 15, 0)));
        assert_eq!(out.timezone(), Some(Tz::US__Eastern));
    }

    #[test]
    fn appointment_rolls_stale_instant_to_next_day() {
        let out = appointment(DateTimeRange::instant(at(10, 10, 0)), &context(11));
        assert_eq!(out.min(), Some(at(11, 10, 0)));
    }

    #[test]
    fn appointment_keeps_tagged_zone() {
        let tagged = DateTimeRange::instant(at(11, 10, 0)).localize(Tz::America__Chicago);
        let out = appointment(tagged, &context(9));
        assert_eq!(out.timezone(), Some(Tz::America__Chicago));
    }

    #[test]
    fn move_in_collapses_to_whole_day() {
        let out = move_in(DateTimeRange::instant(at(12, 15, 30)), &context(9));
        assert!(out.is_whole_day());
        assert_eq!(out.min(), Some(at(12, 0, 0)));
        assert_eq!(out.timezone(), Some(Tz::US__Eastern));
    }
}
