//! Fixtures for the printing unit tests

use calprint_domain::utils::week;
use calprint_domain::{Appointment, Result};
use chrono::{NaiveDate, NaiveDateTime, Weekday};

use super::transitions::out_of_range;
use crate::calendar_ports::CalendarArithmetic;

/// Calendar backed directly by the domain week helpers.
pub(crate) struct TestCalendar {
    first_day: Weekday,
    minimal_days: u8,
    work_week: Vec<Weekday>,
}

impl TestCalendar {
    /// Monday weeks, ISO numbering, Monday-Friday work week.
    pub(crate) fn iso() -> Self {
        Self {
            first_day: Weekday::Mon,
            minimal_days: 4,
            work_week: week::weekday_run(Weekday::Mon, Weekday::Fri),
        }
    }

    /// Sunday weeks, week 1 holds January 1st.
    pub(crate) fn us() -> Self {
        Self { first_day: Weekday::Sun, minimal_days: 1, ..Self::iso() }
    }
}

impl CalendarArithmetic for TestCalendar {
    fn first_day_of_week(&self) -> Weekday {
        self.first_day
    }

    fn week_of_year(&self, date: NaiveDate) -> Result<u32> {
        week::week_of_year(date, self.first_day, self.minimal_days).ok_or_else(|| out_of_range(date))
    }

    fn start_of_week(&self, date: NaiveDate) -> Result<NaiveDate> {
        week::start_of_week(date, self.first_day).ok_or_else(|| out_of_range(date))
    }

    fn end_of_week(&self, date: NaiveDate) -> Result<NaiveDate> {
        week::end_of_week(date, self.first_day).ok_or_else(|| out_of_range(date))
    }

    fn work_week_weekdays(&self) -> Vec<Weekday> {
        self.work_week.clone()
    }
}

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at((y, m, d, h, min): (i32, u32, u32, u32, u32)) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

/// Appointment from `(year, month, day, hour, minute)` tuples.
pub(crate) fn appt(
    id: &str,
    start: (i32, u32, u32, u32, u32),
    end: (i32, u32, u32, u32, u32),
) -> Appointment {
    Appointment::new(id, format!("Appointment {id}"), at(start), at(end))
}
