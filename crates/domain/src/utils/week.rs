//! Week and month arithmetic on `NaiveDate`.
//!
//! Weeks are parameterised by a first day of week and by the minimal number
//! of days week 1 must have in the new year, the same two knobs locale
//! calendars expose (ISO 8601 uses Monday/4, the US uses Sunday/1).
//!
//! Functions that step across dates return `Option` and yield `None` only at
//! the edges of chrono's representable range.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::constants::DAYS_PER_WEEK;

/// Number of days `day` lies after `first` within a week starting on `first`.
pub fn days_from(first: Weekday, day: Weekday) -> u32 {
    (day.num_days_from_monday() + 7 - first.num_days_from_monday()) % 7
}

/// Weekdays from `first` to `last` inclusive, wrapping past the end of the
/// week if needed.
pub fn weekday_run(first: Weekday, last: Weekday) -> Vec<Weekday> {
    let len = days_from(first, last) + 1;
    let mut days = Vec::with_capacity(len as usize);
    let mut day = first;
    for _ in 0..len {
        days.push(day);
        day = day.succ();
    }
    days
}

/// First day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, first_day: Weekday) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(days_from(first_day, date.weekday()))))
}

/// Last day of the week containing `date`.
pub fn end_of_week(date: NaiveDate, first_day: Weekday) -> Option<NaiveDate> {
    start_of_week(date, first_day)?.checked_add_days(Days::new(u64::from(DAYS_PER_WEEK - 1)))
}

/// Week-of-year number of `date`.
///
/// A week belongs to the year holding its `(7 - minimal_days)`-th day, so
/// the last days of December can be in week 1 and the first days of January
/// in week 52 or 53. `minimal_days` must be in `1..=7`.
pub fn week_of_year(date: NaiveDate, first_day: Weekday, minimal_days: u8) -> Option<u32> {
    let minimal_days = minimal_days.clamp(1, DAYS_PER_WEEK);
    let week_start = start_of_week(date, first_day)?;
    let anchor =
        week_start.checked_add_days(Days::new(u64::from(DAYS_PER_WEEK - minimal_days)))?;

    let first_week_start = start_of_week(
        NaiveDate::from_ymd_opt(anchor.year(), 1, u32::from(minimal_days))?,
        first_day,
    )?;

    let weeks = (week_start - first_week_start).num_days() / 7 + 1;
    u32::try_from(weeks).ok()
}

/// The 1st of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
}

/// The 1st of the month after the one containing `date`.
pub fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year().checked_add(1)?, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
}

/// True when the next day rolls over to the 1st.
pub fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.succ_opt().map_or(true, |next| next.day() == 1)
}

/// Calendar days strictly between `after` and `before`, ascending.
///
/// Empty when the two dates are equal, adjacent, or out of order.
pub fn days_strictly_between(after: NaiveDate, before: NaiveDate) -> Option<Vec<NaiveDate>> {
    let mut days = Vec::new();
    let mut day = after.succ_opt()?;
    while day < before {
        days.push(day);
        day = day.succ_opt()?;
    }
    Some(days)
}
