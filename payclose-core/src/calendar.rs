//! Calendar math for statement cycles: fixed day-of-month events recurring
//! over real months.

use chrono::{Datelike, Months, NaiveDate};

/// Next occurrence of `day_of_month`, strictly after `today`.
///
/// A day past the end of the month clamps to the month's last day (31 in
/// February means Feb 28/29). A hit on `today` itself rolls to the
/// following month: the consumer always wants a date it can still act on,
/// so a zero-day countdown is never reported.
///
/// Total for any `day_of_month` in 1-31; out-of-range input is the
/// caller's responsibility.
pub fn next_occurrence(day_of_month: u32, today: NaiveDate) -> NaiveDate {
    let candidate = clamp_to_month(today, day_of_month);
    if candidate > today {
        return candidate;
    }
    clamp_to_month(add_months(today, 1), day_of_month)
}

/// Whole days from `today` to `date` (positive when `date` is ahead).
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// Month addition with end-of-month clamping (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

/// Month subtraction with the same clamping (Mar 31 - 1 month = Feb 28/29).
pub fn sub_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months)).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).unwrap_or(date);
    add_months(first, 1).pred_opt().unwrap_or(date)
}

/// `day_of_month` within `date`'s month, clamped to the month's last day.
fn clamp_to_month(date: NaiveDate, day_of_month: u32) -> NaiveDate {
    date.with_day(day_of_month)
        .unwrap_or_else(|| last_day_of_month(date))
}
