//! Month-granular date helpers shared by the predicate and the calculator.

use chrono::{Datelike, Duration, NaiveDate};

/// Day on which a month-based cycle lands in the given month: the anchor day
/// clamped to the month's last valid day.
pub(crate) fn anchor_day(year: i32, month: u32, day: u32) -> u32 {
    day.min(days_in_month(year, month))
}

/// Date at the anchor day of the given month.
pub(crate) fn anchored_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, anchor_day(year, month, day))
        .expect("clamped day is always valid")
}

/// Whole-month delta between two dates, ignoring days.
pub(crate) fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32)
}

/// Shifts `from` forward by a number of months, keeping its day anchored.
pub(crate) fn shift_months_anchored(from: NaiveDate, months: i32) -> NaiveDate {
    let mut year = from.year();
    let mut month = from.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    anchored_date(year, month as u32, from.day())
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}
