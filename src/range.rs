//! The date/time range value produced by every rule.
//!
//! A [`DateTimeRange`] is a `(min, max)` pair of optional wall-clock bounds plus
//! an "is exact" flag. The combination of which bounds are set, and where they
//! sit inside their days, encodes one of five shapes:
//!
//! ```text
//! min == max                                 -> exact instant
//! min = D 00:00:00, max = D 23:59:59         -> whole day D
//! min only                                   -> after min
//! max only                                   -> before max
//! min < max, not a whole-day pair            -> between (exact or fuzzy)
//! neither                                    -> unset (parse failed)
//! ```
//!
//! Bounds are kept as `NaiveDateTime`s in local wall-clock time together with an
//! optional timezone tag. Tagging never converts the bounds; it only records
//! which zone the wall-clock values belong to.

use std::fmt;

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Timelike};
use chrono_tz::Tz;

pub(crate) fn start_of_day() -> NaiveTime {
    NaiveTime::MIN
}

pub(crate) fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
}

pub(crate) fn end_of_morning() -> NaiveTime {
    NaiveTime::from_hms_opt(11, 59, 59).unwrap_or(NaiveTime::MIN)
}

pub(crate) fn start_of_afternoon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN)
}

pub(crate) fn end_of_afternoon() -> NaiveTime {
    NaiveTime::from_hms_opt(16, 59, 59).unwrap_or(NaiveTime::MIN)
}

/// Which ambiguity case a [`DateTimeRange`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    WholeDay,
    ExactInstant,
    After,
    Before,
    /// `exact` is false for fuzzy buckets such as "tomorrow morning".
    Between { exact: bool },
}

/// Canonical instants for a range: one for days, instants and open ranges,
/// two for between ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeTuple {
    Single(NaiveDateTime),
    Pair(NaiveDateTime, NaiveDateTime),
}

impl RangeTuple {
    pub fn first(&self) -> NaiveDateTime {
        match self {
            RangeTuple::Single(dt) | RangeTuple::Pair(dt, _) => *dt,
        }
    }

    /// Number of instants carried: 1 or 2.
    pub fn arity(&self) -> usize {
        match self {
            RangeTuple::Single(_) => 1,
            RangeTuple::Pair(..) => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeRange {
    min: Option<NaiveDateTime>,
    max: Option<NaiveDateTime>,
    exact: bool,
    tz: Option<Tz>,
}

impl Default for DateTimeRange {
    fn default() -> Self {
        Self::unset()
    }
}

impl DateTimeRange {
    /// A value with neither bound set.
    pub fn unset() -> Self {
        Self { min: None, max: None, exact: true, tz: None }
    }

    /// A date without a specific time: `00:00:00..=23:59:59` of `date`.
    pub fn whole_day(date: NaiveDate) -> Self {
        Self { min: Some(date.and_time(start_of_day())), max: Some(date.and_time(end_of_day())), ..Self::unset() }
    }

    pub fn instant(at: NaiveDateTime) -> Self {
        Self { min: Some(at), max: Some(at), ..Self::unset() }
    }

    /// Open range: "after 3pm on 12/5".
    pub fn after(at: NaiveDateTime) -> Self {
        Self { min: Some(at), ..Self::unset() }
    }

    /// Open range: "before 3pm on 12/5".
    pub fn before(at: NaiveDateTime) -> Self {
        Self { max: Some(at), ..Self::unset() }
    }

    /// Bounded range. Stays unset when `start` is not strictly before `end`, or
    /// when the pair would read as a whole day.
    pub fn between(start: NaiveDateTime, end: NaiveDateTime, exact: bool) -> Self {
        if start < end && !has_day_bounds(start, end) {
            Self { min: Some(start), max: Some(end), exact, tz: None }
        } else {
            Self::unset()
        }
    }

    pub fn morning(date: NaiveDate) -> Self {
        Self::bucket(date, start_of_day(), end_of_morning())
    }

    pub fn afternoon(date: NaiveDate) -> Self {
        Self::bucket(date, start_of_afternoon(), end_of_afternoon())
    }

    pub fn morning_and_afternoon(date: NaiveDate) -> Self {
        Self::bucket(date, start_of_day(), end_of_afternoon())
    }

    fn bucket(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self { min: Some(date.and_time(start)), max: Some(date.and_time(end)), exact: false, tz: None }
    }

    pub fn min(&self) -> Option<NaiveDateTime> {
        self.min
    }

    pub fn max(&self) -> Option<NaiveDateTime> {
        self.max
    }

    pub fn is_exact_range(&self) -> bool {
        self.exact
    }

    pub fn timezone(&self) -> Option<Tz> {
        self.tz
    }

    pub fn is_set(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    pub fn is_whole_day(&self) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => has_day_bounds(min, max) && min.date() == max.date(),
            _ => false,
        }
    }

    pub fn is_exact_instant(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min == max)
    }

    pub fn is_after(&self) -> bool {
        self.min.is_some() && self.max.is_none()
    }

    pub fn is_before(&self) -> bool {
        self.min.is_none() && self.max.is_some()
    }

    pub fn is_between(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min < max && !has_day_bounds(min, max))
    }

    pub fn shape(&self) -> Option<Shape> {
        if self.is_whole_day() {
            Some(Shape::WholeDay)
        } else if self.is_exact_instant() {
            Some(Shape::ExactInstant)
        } else if self.is_after() {
            Some(Shape::After)
        } else if self.is_before() {
            Some(Shape::Before)
        } else if self.is_between() {
            Some(Shape::Between { exact: self.exact })
        } else {
            None
        }
    }

    /// Reduce to the canonical instant(s) for the shape, or `None` when the
    /// value does not represent any of them.
    pub fn to_tuple(&self) -> Option<RangeTuple> {
        match self.shape()? {
            Shape::WholeDay | Shape::ExactInstant | Shape::After => self.min.map(RangeTuple::Single),
            Shape::Before => self.max.map(RangeTuple::Single),
            Shape::Between { .. } => Some(RangeTuple::Pair(self.min?, self.max?)),
        }
    }

    /// Tag the bounds with `tz` unless they already carry a zone.
    pub fn localize(self, tz: Tz) -> Self {
        if self.tz.is_some() { self } else { Self { tz: Some(tz), ..self } }
    }

    /// Force (or with `None`, strip) the zone tag. Wall-clock bounds are kept.
    pub fn replace_timezone(self, tz: Option<Tz>) -> Self {
        Self { tz, ..self }
    }

    pub fn min_instant(&self) -> Option<DateTime<Tz>> {
        Some(localize_naive(self.tz?, self.min?))
    }

    pub fn max_instant(&self) -> Option<DateTime<Tz>> {
        Some(localize_naive(self.tz?, self.max?))
    }

    /// Add twelve hours to every bound whose hour lies in `[1, threshold)`.
    ///
    /// Used for scheduling phrases where a bare "3" means 3pm.
    pub fn push_hours_below_threshold(self, threshold: u32) -> Self {
        let push = |bound: Option<NaiveDateTime>| {
            bound.map(|dt| if (1..threshold).contains(&dt.hour()) { dt + Duration::hours(12) } else { dt })
        };
        Self { min: push(self.min), max: push(self.max), ..self }
    }

    /// Roll stale bounds forward one day.
    ///
    /// Bounds are compared as wall-clock time in the value's zone (or the
    /// reference's own zone when the value is untagged). Fuzzy between ranges
    /// are left alone, and a whole day only rolls once it has fully elapsed.
    pub fn push_to_next_day_if_stale<Z: TimeZone>(self, reference: &DateTime<Z>) -> Self {
        let reference = match self.tz {
            Some(tz) => reference.with_timezone(&tz).naive_local(),
            None => reference.naive_local(),
        };
        let day = Duration::days(1);

        if self.is_between() {
            if !self.exact {
                return self;
            }
            return match (self.min, self.max) {
                (Some(min), Some(max)) if min < reference => {
                    Self { min: Some(min + day), max: Some(max + day), ..self }
                }
                _ => self,
            };
        }

        if self.is_whole_day() {
            return match (self.min, self.max) {
                (Some(min), Some(max)) if max < reference => {
                    Self { min: Some(min + day), max: Some(max + day), ..self }
                }
                _ => self,
            };
        }

        let roll = |bound: Option<NaiveDateTime>| bound.map(|dt| if dt < reference { dt + day } else { dt });
        Self { min: roll(self.min), max: roll(self.max), ..self }
    }

    /// Collapse to the whole day of the first available bound.
    pub fn to_whole_day(self) -> Self {
        match self.min.or(self.max) {
            Some(anchor) => Self { tz: self.tz, ..Self::whole_day(anchor.date()) },
            None => self,
        }
    }
}

impl fmt::Display for DateTimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FMT: &str = "%Y-%m-%d %H:%M:%S";
        let zone = self.tz.map(|tz| format!(" ({})", tz.name())).unwrap_or_default();
        match (self.shape(), self.min, self.max) {
            (Some(Shape::WholeDay), Some(min), _) => write!(f, "day {}{}", min.format("%Y-%m-%d"), zone),
            (Some(Shape::ExactInstant), Some(min), _) => write!(f, "at {}{}", min.format(FMT), zone),
            (Some(Shape::After), Some(min), _) => write!(f, "after {}{}", min.format(FMT), zone),
            (Some(Shape::Before), _, Some(max)) => write!(f, "before {}{}", max.format(FMT), zone),
            (Some(Shape::Between { exact }), Some(min), Some(max)) => {
                let kind = if exact { "between" } else { "roughly between" };
                write!(f, "{} {} and {}{}", kind, min.format(FMT), max.format(FMT), zone)
            }
            _ => write!(f, "unset"),
        }
    }
}

fn has_day_bounds(min: NaiveDateTime, max: NaiveDateTime) -> bool {
    min.time() == start_of_day() && max.time() == end_of_day()
}

/// Attach `tz` to a wall-clock value. Ambiguous times take the earlier
/// instant; times skipped by a DST jump are read with the standard offset.
pub(crate) fn localize_naive(tz: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let offset = tz.offset_from_utc_datetime(&naive).fix();
            tz.from_utc_datetime(&(naive - Duration::seconds(offset.local_minus_utc() as i64)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn whole_day_spans_midnight_to_last_second() {
        let range = DateTimeRange::whole_day(day(2024, 3, 15));
        assert!(range.is_whole_day());
        assert!(!range.is_between());
        assert_eq!(range.min(), Some(at(2024, 3, 15, 0, 0, 0)));
        assert_eq!(range.max(), Some(at(2024, 3, 15, 23, 59, 59)));
        assert_eq!(range.to_tuple(), Some(RangeTuple::Single(at(2024, 3, 15, 0, 0, 0))));
    }

    #[test]
    fn between_rejects_inverted_and_day_shaped_pairs() {
        assert!(!DateTimeRange::between(at(2024, 1, 1, 15, 0, 0), at(2024, 1, 1, 13, 0, 0), true).is_set());
        assert!(!DateTimeRange::between(at(2024, 1, 1, 13, 0, 0), at(2024, 1, 1, 13, 0, 0), true).is_set());
        assert!(!DateTimeRange::between(at(2024, 1, 1, 0, 0, 0), at(2024, 1, 3, 23, 59, 59), true).is_set());

        let range = DateTimeRange::between(at(2024, 1, 1, 13, 0, 0), at(2024, 1, 1, 15, 0, 0), true);
        assert_eq!(range.shape(), Some(Shape::Between { exact: true }));
        assert_eq!(range.to_tuple(), Some(RangeTuple::Pair(at(2024, 1, 1, 13, 0, 0), at(2024, 1, 1, 15, 0, 0))));
        assert_eq!(range.to_tuple().map(|tuple| tuple.arity()), Some(2));
    }

    #[test]
    fn open_ranges_reduce_to_their_single_bound() {
        let after = DateTimeRange::after(at(2024, 1, 1, 17, 0, 0));
        let before = DateTimeRange::before(at(2024, 1, 1, 15, 0, 0));
        assert_eq!(after.shape(), Some(Shape::After));
        assert_eq!(before.shape(), Some(Shape::Before));
        assert_eq!(before.to_tuple(), Some(RangeTuple::Single(at(2024, 1, 1, 15, 0, 0))));
        assert_eq!(before.to_tuple().map(|tuple| tuple.arity()), Some(1));
        assert_eq!(DateTimeRange::unset().to_tuple(), None);
    }

    #[test]
    fn day_parts_are_fuzzy_buckets() {
        let morning = DateTimeRange::morning(day(2024, 1, 11));
        assert_eq!(morning.shape(), Some(Shape::Between { exact: false }));
        assert_eq!(morning.max(), Some(at(2024, 1, 11, 11, 59, 59)));

        let afternoon = DateTimeRange::afternoon(day(2024, 1, 11));
        assert_eq!(afternoon.min(), Some(at(2024, 1, 11, 12, 0, 0)));
        assert_eq!(afternoon.max(), Some(at(2024, 1, 11, 16, 59, 59)));

        let both = DateTimeRange::morning_and_afternoon(day(2024, 1, 11));
        assert_eq!(both.min(), Some(at(2024, 1, 11, 0, 0, 0)));
        assert_eq!(both.max(), Some(at(2024, 1, 11, 16, 59, 59)));
    }

    #[test]
    fn localize_only_tags_untagged_values() {
        let range = DateTimeRange::instant(at(2024, 1, 10, 9, 0, 0)).localize(Tz::US__Eastern);
        assert_eq!(range.timezone(), Some(Tz::US__Eastern));

        let again = range.localize(Tz::Europe__London);
        assert_eq!(again, range);

        let stripped = range.replace_timezone(None);
        assert_eq!(stripped.timezone(), None);
        assert_eq!(stripped.min(), range.min());
    }

    #[test]
    fn min_instant_reads_wall_clock_in_zone() {
        let range = DateTimeRange::instant(at(2024, 1, 10, 9, 0, 0)).localize(Tz::US__Eastern);
        let utc = range.min_instant().unwrap().naive_utc();
        assert_eq!(utc, at(2024, 1, 10, 14, 0, 0));
    }

    #[test]
    fn threshold_push_moves_small_hours_to_afternoon() {
        let range = DateTimeRange::between(at(2024, 1, 1, 3, 0, 0), at(2024, 1, 1, 10, 0, 0), true);
        let pushed = range.push_hours_below_threshold(9);
        assert_eq!(pushed.min(), Some(at(2024, 1, 1, 15, 0, 0)));
        assert_eq!(pushed.max(), Some(at(2024, 1, 1, 10, 0, 0)));

        let midnight = DateTimeRange::instant(at(2024, 1, 1, 0, 0, 0)).push_hours_below_threshold(9);
        assert_eq!(midnight.min(), Some(at(2024, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn stale_instant_rolls_forward_one_day() {
        let reference = Tz::US__Eastern.from_local_datetime(&at(2024, 1, 10, 9, 0, 0)).unwrap();
        let range = DateTimeRange::instant(at(2024, 1, 10, 8, 0, 0)).localize(Tz::US__Eastern);
        let rolled = range.push_to_next_day_if_stale(&reference);
        assert_eq!(rolled.min(), Some(at(2024, 1, 11, 8, 0, 0)));
        assert!(rolled.is_exact_instant());
    }

    #[test]
    fn fuzzy_between_and_current_day_are_not_rolled() {
        let reference = Tz::US__Eastern.from_local_datetime(&at(2024, 1, 10, 13, 0, 0)).unwrap();
        let morning = DateTimeRange::morning(day(2024, 1, 10)).localize(Tz::US__Eastern);
        assert_eq!(morning.push_to_next_day_if_stale(&reference), morning);

        let today = DateTimeRange::whole_day(day(2024, 1, 10)).localize(Tz::US__Eastern);
        assert_eq!(today.push_to_next_day_if_stale(&reference), today);

        let yesterday = DateTimeRange::whole_day(day(2024, 1, 9)).localize(Tz::US__Eastern);
        let rolled = yesterday.push_to_next_day_if_stale(&reference);
        assert!(rolled.is_whole_day());
        assert_eq!(rolled.min(), Some(at(2024, 1, 10, 0, 0, 0)));
    }

    #[test]
    fn to_whole_day_keeps_zone() {
        let range = DateTimeRange::before(at(2024, 5, 2, 15, 0, 0)).localize(Tz::US__Pacific).to_whole_day();
        assert!(range.is_whole_day());
        assert_eq!(range.min(), Some(at(2024, 5, 2, 0, 0, 0)));
        assert_eq!(range.timezone(), Some(Tz::US__Pacific));
    }

    #[test]
    fn display_names_the_shape() {
        assert_eq!(DateTimeRange::whole_day(day(2024, 3, 15)).to_string(), "day 2024-03-15");
        assert_eq!(
            DateTimeRange::instant(at(2024, 1, 15, 15, 0, 0)).localize(Tz::US__Eastern).to_string(),
            "at 2024-01-15 15:00:00 (US/Eastern)"
        );
    }

    fn arb_datetime() -> impl Strategy<Value = NaiveDateTime> {
        (0i64..(3 * 365 * 24 * 3600)).prop_map(|secs| at(2023, 1, 1, 0, 0, 0) + Duration::seconds(secs))
    }

    proptest! {
        #[test]
        fn whole_day_is_one_day_minus_one_second(dt in arb_datetime()) {
            let range = DateTimeRange::whole_day(dt.date());
            let (min, max) = (range.min().unwrap(), range.max().unwrap());
            prop_assert_eq!(max - min, Duration::days(1) - Duration::seconds(1));
            prop_assert_eq!(min.date(), max.date());
        }

        #[test]
        fn instants_have_equal_bounds(dt in arb_datetime()) {
            let range = DateTimeRange::instant(dt);
            prop_assert!(range.is_exact_instant());
            prop_assert_eq!(range.min(), range.max());
        }

        #[test]
        fn set_betweens_are_strictly_ordered(a in arb_datetime(), b in arb_datetime(), exact in any::<bool>()) {
            let range = DateTimeRange::between(a, b, exact);
            if range.is_set() {
                prop_assert!(range.min().unwrap() < range.max().unwrap());
            }
        }

        #[test]
        fn localize_is_idempotent(dt in arb_datetime()) {
            let once = DateTimeRange::instant(dt).localize(Tz::US__Eastern);
            prop_assert_eq!(once.localize(Tz::US__Eastern), once);
            prop_assert_eq!(once.localize(Tz::Asia__Tokyo), once);
        }

        #[test]
        fn forward_roll_never_moves_bounds_back(a in arb_datetime(), b in arb_datetime(), reference in arb_datetime()) {
            let reference = Tz::UTC.from_utc_datetime(&reference);
            for range in [
                DateTimeRange::instant(a),
                DateTimeRange::after(a),
                DateTimeRange::before(a),
                DateTimeRange::whole_day(a.date()),
                DateTimeRange::between(a, b, true),
            ] {
                let rolled = range.localize(Tz::UTC).push_to_next_day_if_stale(&reference);
                prop_assert!(rolled.min() >= range.min());
                prop_assert!(rolled.max() >= range.max());
            }
        }

        #[test]
        fn forward_roll_leaves_fuzzy_betweens(a in arb_datetime(), b in arb_datetime(), reference in arb_datetime()) {
            let reference = Tz::UTC.from_utc_datetime(&reference);
            let range = DateTimeRange::between(a, b, false).localize(Tz::UTC);
            prop_assert_eq!(range.push_to_next_day_if_stale(&reference), range);
        }
    }
}
