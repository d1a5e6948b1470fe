//! Gap-filling partitioner shared by the Week and Month views
//!
//! One pass over the sorted appointments. Before each appointment the days
//! missing since the previous one are synthesized as filler days; after the
//! last appointment the remainder of its week or month is filled. Every
//! synthesized day and every appointment start goes through the same
//! ordered emission pipeline, so markers nest year, month, week, day.

use calprint_domain::utils::week::{first_of_month, first_of_next_month, is_last_day_of_month};
use calprint_domain::{Appointment, Partition, Result};
use chrono::NaiveDate;
use tracing::debug;

use super::strategy::PartitionContext;
use super::transitions::{days_between, out_of_range, Boundaries, Signals, TransitionState};
use crate::calendar_ports::CalendarArithmetic;

/// Calendar range a ranged view covers per grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeUnit {
    Week,
    Month,
}

impl RangeUnit {
    /// Exclusive lower bound of the leading fill before the first
    /// appointment.
    ///
    /// The week bound is the configured first day of week itself; the month
    /// bound is the last day of the previous month, so that month grids
    /// always start on the 1st.
    pub fn leading_bound(self, calendar: &dyn CalendarArithmetic, date: NaiveDate) -> Result<NaiveDate> {
        match self {
            Self::Week => calendar.start_of_week(date),
            Self::Month => first_of_month(date)
                .and_then(|first| first.pred_opt())
                .ok_or_else(|| out_of_range(date)),
        }
    }

    /// Exclusive upper bound of the trailing fill after the last appointment.
    pub fn trailing_bound(self, calendar: &dyn CalendarArithmetic, date: NaiveDate) -> Result<NaiveDate> {
        match self {
            Self::Week => calendar
                .end_of_week(date)?
                .succ_opt()
                .ok_or_else(|| out_of_range(date)),
            Self::Month => first_of_next_month(date).ok_or_else(|| out_of_range(date)),
        }
    }

    /// True when `date` is the last day of its unit, leaving nothing to fill.
    pub fn is_on_trailing_edge(self, calendar: &dyn CalendarArithmetic, date: NaiveDate) -> bool {
        match self {
            Self::Week => calendar.is_last_day_of_week(date),
            Self::Month => is_last_day_of_month(date),
        }
    }

    /// Whether an appointment needs a second entry for its continuation
    /// cells.
    pub fn spans_multiple_units(
        self,
        calendar: &dyn CalendarArithmetic,
        appointment: &Appointment,
    ) -> Result<bool> {
        let span = Signals::within(calendar, appointment)?;
        Ok(match self {
            Self::Week => span.day || span.week,
            Self::Month => span.day || span.week || span.month,
        })
    }

    /// Post-processing hook run once the pass is complete.
    pub fn cleanup(self, _partition: &mut Partition<'_>) {
        match self {
            Self::Week | Self::Month => {}
        }
    }

    fn filler_boundaries(self) -> Boundaries {
        match self {
            Self::Week => Boundaries { week: true, day: true, ..Boundaries::NONE },
            Self::Month => Boundaries { year: true, month: true, week: true, day: true },
        }
    }

    fn appointment_boundaries(self, signals: Signals) -> Boundaries {
        match self {
            Self::Week => Boundaries { week: signals.week, day: signals.day, ..Boundaries::NONE },
            Self::Month => Boundaries {
                year: signals.month,
                month: signals.month,
                week: signals.week,
                day: signals.day,
            },
        }
    }
}

/// Run the ranged pass over appointments already sorted by start.
pub(crate) fn partition_ranged<'a>(
    unit: RangeUnit,
    ctx: &PartitionContext<'_>,
    sorted: &[&'a Appointment],
) -> Result<Partition<'a>> {
    let calendar = ctx.calendar;
    let mut pass = RangedPass { unit, ctx, state: TransitionState::default(), filler_days: 0 };
    let mut partition = Partition::new();

    for (index, &current) in sorted.iter().enumerate() {
        let previous = index.checked_sub(1).and_then(|i| sorted.get(i)).copied();
        let pointer = partition.cursor();
        let start = current.start_date();

        let lower = match previous {
            Some(previous) => previous.start_date(),
            None => unit.leading_bound(calendar, start)?,
        };
        for day in days_between(lower, start)? {
            pass.fill(&mut partition, pointer, day)?;
        }

        let signals = Signals::between(calendar, previous, current)?;
        pass.state.emit(
            calendar,
            &mut partition,
            pointer,
            start,
            unit.appointment_boundaries(signals),
        )?;

        partition.push(current);
        if unit.spans_multiple_units(calendar, current)? {
            partition.push(current);
        }

        if index + 1 == sorted.len() && !unit.is_on_trailing_edge(calendar, start) {
            let pointer = partition.cursor();
            let upper = unit.trailing_bound(calendar, start)?;
            for day in days_between(start, upper)? {
                pass.fill(&mut partition, pointer, day)?;
            }
        }
    }

    unit.cleanup(&mut partition);

    debug!(
        unit = ?unit,
        appointments = partition.appointment_count(),
        markers = partition.breaks.len(),
        filler_days = pass.filler_days,
        "Ranged partition complete"
    );
    Ok(partition)
}

struct RangedPass<'p, 'c> {
    unit: RangeUnit,
    ctx: &'p PartitionContext<'c>,
    state: TransitionState,
    filler_days: usize,
}

impl RangedPass<'_, '_> {
    fn fill(&mut self, partition: &mut Partition<'_>, pointer: usize, day: NaiveDate) -> Result<()> {
        let emitted = self.state.emit(
            self.ctx.calendar,
            partition,
            pointer,
            day,
            self.unit.filler_boundaries(),
        )?;
        if emitted.day && self.ctx.fill_day_markers {
            partition.add_fill_day(pointer, day);
        }
        self.filler_days += 1;
        Ok(())
    }
}
