use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{ConvertError, Result};

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first_next| (first_next - Duration::days(1)).day())
        .unwrap_or(28)
}

pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ConvertError::InvalidDate { year, month, day })
}

/// Like [`ymd`], but with `day` clamped into `1..=days_in_month`.
pub fn clamped_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    ymd(year, month, day.clamp(1, days_in_month(year, month)))
}

pub fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    ymd(year, month, days_in_month(year, month))
}

/// Year in which `month` next occurs, counting the current month as upcoming.
pub fn upcoming_year(reference: NaiveDate, month: u32) -> i32 {
    if month < reference.month() { reference.year() + 1 } else { reference.year() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths_follow_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn clamped_date_pulls_day_into_range() {
        assert_eq!(clamped_date(2024, 4, 31).unwrap(), NaiveDate::from_ymd_opt(2024, 4, 30).unwrap());
        assert_eq!(clamped_date(2024, 4, 0).unwrap(), NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert!(ymd(2024, 2, 30).is_err());
    }

    #[test]
    fn passed_months_roll_into_next_year() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(upcoming_year(reference, 3), 2025);
        assert_eq!(upcoming_year(reference, 6), 2024);
    }
}
