//! Calendar port interfaces
//!
//! The partitioning strategies never compute week numbers or week bounds
//! themselves. They go through [`CalendarArithmetic`], which an adapter
//! implements from the user's locale settings, and receive their input
//! ordered by an [`AppointmentSorter`].

use calprint_domain::{Appointment, Result};
use chrono::{Datelike, NaiveDate, Weekday};

/// Locale- and configuration-aware calendar arithmetic
///
/// Implementations are read-only once built, so one instance can serve any
/// number of concurrent partition calls.
pub trait CalendarArithmetic: Send + Sync {
    /// Configured first day of the week.
    fn first_day_of_week(&self) -> Weekday;

    /// Week-of-year number under the configured week rules.
    fn week_of_year(&self, date: NaiveDate) -> Result<u32>;

    /// First day of the week containing `date`.
    fn start_of_week(&self, date: NaiveDate) -> Result<NaiveDate>;

    /// Last day of the week containing `date`.
    fn end_of_week(&self, date: NaiveDate) -> Result<NaiveDate>;

    /// Weekdays making up the configured work week.
    fn work_week_weekdays(&self) -> Vec<Weekday>;

    fn day_of_year(&self, date: NaiveDate) -> u32 {
        date.ordinal()
    }

    fn month(&self, date: NaiveDate) -> u32 {
        date.month()
    }

    fn year(&self, date: NaiveDate) -> i32 {
        date.year()
    }

    fn last_day_of_week(&self) -> Weekday {
        self.first_day_of_week().pred()
    }

    fn is_first_day_of_week(&self, date: NaiveDate) -> bool {
        date.weekday() == self.first_day_of_week()
    }

    fn is_last_day_of_week(&self, date: NaiveDate) -> bool {
        date.weekday() == self.last_day_of_week()
    }

    fn is_work_day(&self, date: NaiveDate) -> bool {
        self.work_week_weekdays().contains(&date.weekday())
    }
}

/// Orders appointments before a partitioning pass
pub trait AppointmentSorter: Send + Sync {
    /// Return references to `appointments` ascending by start instant.
    /// Appointments with equal starts keep their input order.
    fn sort_by_start<'a>(&self, appointments: &'a [Appointment]) -> Result<Vec<&'a Appointment>>;
}
