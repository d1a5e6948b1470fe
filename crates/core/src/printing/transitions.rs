//! Transition detection and the ordered break emission pipeline
//!
//! A [`TransitionState`] lives for exactly one partitioning pass. It remembers
//! the last day, week, month and year a marker was emitted for, so that the
//! several independent checks which detect the same boundary produce a
//! single marker.
//!
//! Weeks are identified by their first day rather than by their number, so a
//! week running across New Year stays one week.

use calprint_domain::{Appointment, CalPrintError, Partition, Result};
use chrono::NaiveDate;

use crate::calendar_ports::CalendarArithmetic;

/// Calendar keys of one date. The week key is the first day of its week;
/// day and month numbers are paired with the calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateKeys {
    pub day: (u32, i32),
    pub week: NaiveDate,
    pub month: (u32, i32),
}

impl DateKeys {
    pub(crate) fn of(calendar: &dyn CalendarArithmetic, date: NaiveDate) -> Result<Self> {
        let year = calendar.year(date);
        Ok(Self {
            day: (calendar.day_of_year(date), year),
            week: calendar.start_of_week(date)?,
            month: (calendar.month(date), year),
        })
    }
}

/// Which granularities changed between two points in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Signals {
    pub day: bool,
    pub week: bool,
    pub month: bool,
}

impl Signals {
    const ALL: Self = Self { day: true, week: true, month: true };

    /// Transitions from `previous` to `current`, compared start-to-start and
    /// end-to-end. Without a previous appointment everything is new.
    pub(crate) fn between(
        calendar: &dyn CalendarArithmetic,
        previous: Option<&Appointment>,
        current: &Appointment,
    ) -> Result<Self> {
        let Some(previous) = previous else {
            return Ok(Self::ALL);
        };

        let starts = Self::of_dates(calendar, previous.start_date(), current.start_date())?;
        let ends = Self::of_dates(calendar, previous.last_date(), current.last_date())?;
        Ok(Self {
            day: starts.day || ends.day,
            week: starts.week || ends.week,
            month: starts.month || ends.month,
        })
    }

    /// Boundaries crossed inside a single appointment, start to last day.
    pub(crate) fn within(
        calendar: &dyn CalendarArithmetic,
        appointment: &Appointment,
    ) -> Result<Self> {
        Self::of_dates(calendar, appointment.start_date(), appointment.last_date())
    }

    fn of_dates(calendar: &dyn CalendarArithmetic, a: NaiveDate, b: NaiveDate) -> Result<Self> {
        if a == b {
            return Ok(Self::default());
        }
        let a = DateKeys::of(calendar, a)?;
        let b = DateKeys::of(calendar, b)?;
        Ok(Self { day: a.day != b.day, week: a.week != b.week, month: a.month != b.month })
    }
}

/// Granularities requested from, or emitted by, the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Boundaries {
    pub year: bool,
    pub month: bool,
    pub week: bool,
    pub day: bool,
}

impl Boundaries {
    pub const NONE: Self = Self { year: false, month: false, week: false, day: false };
}

/// Last emitted value per granularity for one pass.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TransitionState {
    last_day: Option<(u32, i32)>,
    last_week: Option<NaiveDate>,
    last_month: Option<(u32, i32)>,
    last_year: Option<i32>,
}

impl TransitionState {
    /// Emit the requested markers for `date` at `pointer`, always in the
    /// order year, month, week, day. Each marker is skipped when its value
    /// equals the last one emitted for that granularity, except that a new
    /// month always reopens its week.
    pub(crate) fn emit(
        &mut self,
        calendar: &dyn CalendarArithmetic,
        partition: &mut Partition<'_>,
        pointer: usize,
        date: NaiveDate,
        wanted: Boundaries,
    ) -> Result<Boundaries> {
        let mut emitted = Boundaries::NONE;
        if wanted.year {
            emitted.year = self.emit_year_break(calendar, partition, pointer, date);
        }
        if wanted.month {
            emitted.month = self.emit_month_break(calendar, partition, pointer, date);
            if emitted.month {
                self.last_week = None;
            }
        }
        if wanted.week {
            emitted.week = self.emit_week_break(calendar, partition, pointer, date)?;
        }
        if wanted.day {
            emitted.day = self.emit_day_break(calendar, partition, pointer, date);
        }
        Ok(emitted)
    }

    fn emit_year_break(
        &mut self,
        calendar: &dyn CalendarArithmetic,
        partition: &mut Partition<'_>,
        pointer: usize,
        date: NaiveDate,
    ) -> bool {
        let year = calendar.year(date);
        if self.last_year == Some(year) {
            return false;
        }
        partition.add_year_break(pointer, year);
        self.last_year = Some(year);
        true
    }

    // Month breaks carry the full date rather than the month number.
    fn emit_month_break(
        &mut self,
        calendar: &dyn CalendarArithmetic,
        partition: &mut Partition<'_>,
        pointer: usize,
        date: NaiveDate,
    ) -> bool {
        let key = (calendar.month(date), calendar.year(date));
        if self.last_month == Some(key) {
            return false;
        }
        partition.add_month_break(pointer, date);
        self.last_month = Some(key);
        true
    }

    fn emit_week_break(
        &mut self,
        calendar: &dyn CalendarArithmetic,
        partition: &mut Partition<'_>,
        pointer: usize,
        date: NaiveDate,
    ) -> Result<bool> {
        let key = calendar.start_of_week(date)?;
        if self.last_week == Some(key) {
            return Ok(false);
        }
        partition.add_week_break(pointer, calendar.week_of_year(date)?);
        self.last_week = Some(key);
        Ok(true)
    }

    fn emit_day_break(
        &mut self,
        calendar: &dyn CalendarArithmetic,
        partition: &mut Partition<'_>,
        pointer: usize,
        date: NaiveDate,
    ) -> bool {
        let key = (calendar.day_of_year(date), calendar.year(date));
        if self.last_day == Some(key) {
            return false;
        }
        partition.add_day_break(pointer, key.0);
        self.last_day = Some(key);
        true
    }
}

/// Calendar days strictly between two dates.
pub(crate) fn days_between(after: NaiveDate, before: NaiveDate) -> Result<Vec<NaiveDate>> {
    calprint_domain::utils::week::days_strictly_between(after, before)
        .ok_or_else(|| out_of_range(after))
}

pub(crate) fn out_of_range(date: NaiveDate) -> CalPrintError {
    CalPrintError::Calendar(format!("date arithmetic out of range near {date}"))
}
