use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use calprint_core::CalendarArithmetic;
use calprint_domain::utils::week;
use calprint_domain::{CalPrintError, Result as DomainResult};
use chrono::{NaiveDate, Weekday};

/// In-memory mock for `CalendarArithmetic`.
///
/// Week rules come from the constructor. Dates registered with
/// [`MockCalendar::failing_on`] make `week_of_year` fail, and every
/// `week_of_year` call is counted.
#[derive(Clone)]
pub struct MockCalendar {
    first_day: Weekday,
    minimal_days: u8,
    work_week: Vec<Weekday>,
    failing: Arc<Mutex<Vec<NaiveDate>>>,
    week_lookups: Arc<AtomicUsize>,
}

impl MockCalendar {
    pub fn new(first_day: Weekday, minimal_days: u8) -> Self {
        Self {
            first_day,
            minimal_days,
            work_week: week::weekday_run(Weekday::Mon, Weekday::Fri),
            failing: Arc::new(Mutex::new(Vec::new())),
            week_lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Monday weeks with ISO 8601 numbering.
    pub fn iso() -> Self {
        Self::new(Weekday::Mon, 4)
    }

    /// Sunday weeks, week 1 holds January 1st.
    pub fn us() -> Self {
        Self::new(Weekday::Sun, 1)
    }

    pub fn with_work_week(mut self, first: Weekday, last: Weekday) -> Self {
        self.work_week = week::weekday_run(first, last);
        self
    }

    /// Make `week_of_year` fail for `date`.
    pub fn failing_on(self, date: NaiveDate) -> Self {
        self.failing.lock().unwrap().push(date);
        self
    }

    pub fn week_lookups(&self) -> usize {
        self.week_lookups.load(Ordering::SeqCst)
    }
}

impl CalendarArithmetic for MockCalendar {
    fn first_day_of_week(&self) -> Weekday {
        self.first_day
    }

    fn week_of_year(&self, date: NaiveDate) -> DomainResult<u32> {
        self.week_lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing.lock().unwrap().contains(&date) {
            return Err(CalPrintError::Calendar(format!("no week number for {date}")));
        }
        week::week_of_year(date, self.first_day, self.minimal_days)
            .ok_or_else(|| CalPrintError::Calendar(format!("week of {date} out of range")))
    }

    fn start_of_week(&self, date: NaiveDate) -> DomainResult<NaiveDate> {
        week::start_of_week(date, self.first_day)
            .ok_or_else(|| CalPrintError::Calendar(format!("week of {date} out of range")))
    }

    fn end_of_week(&self, date: NaiveDate) -> DomainResult<NaiveDate> {
        week::end_of_week(date, self.first_day)
            .ok_or_else(|| CalPrintError::Calendar(format!("week of {date} out of range")))
    }

    fn work_week_weekdays(&self) -> Vec<Weekday> {
        self.work_week.clone()
    }
}
