//! The partitioning strategy family
//!
//! A strategy is a plain tag; the work is done by free functions that keep
//! all pass state on the stack. The same strategy value can therefore be
//! used from any number of threads at once.

use calprint_domain::constants::{META_FIRST_DAY_OF_WEEK, META_VIEW};
use calprint_domain::{Appointment, CalPrintError, Partition, Result, ViewKind};
use tracing::debug;

use super::day::partition_day;
use super::ranged::{partition_ranged, RangeUnit};
use super::work_week::partition_work_week;
use crate::calendar_ports::{AppointmentSorter, CalendarArithmetic};

/// Collaborators a partitioning pass reads from.
#[derive(Clone, Copy)]
pub struct PartitionContext<'c> {
    pub calendar: &'c dyn CalendarArithmetic,
    pub sorter: &'c dyn AppointmentSorter,
    /// Record a `FillDay` marker for every synthesized day.
    pub fill_day_markers: bool,
}

impl<'c> PartitionContext<'c> {
    pub fn new(calendar: &'c dyn CalendarArithmetic, sorter: &'c dyn AppointmentSorter) -> Self {
        Self { calendar, sorter, fill_day_markers: false }
    }

    pub fn with_fill_day_markers(mut self, enabled: bool) -> Self {
        self.fill_day_markers = enabled;
        self
    }
}

/// One partitioning algorithm per print view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitioningStrategy {
    Day,
    WorkWeek,
    Week,
    Month,
}

impl PartitioningStrategy {
    pub const ALL: [Self; 4] = [Self::Day, Self::WorkWeek, Self::Week, Self::Month];

    pub fn for_view(view: ViewKind) -> Self {
        match view {
            ViewKind::Day => Self::Day,
            ViewKind::WorkWeek => Self::WorkWeek,
            ViewKind::Week => Self::Week,
            ViewKind::Month => Self::Month,
        }
    }

    pub fn view_kind(self) -> ViewKind {
        match self {
            Self::Day => ViewKind::Day,
            Self::WorkWeek => ViewKind::WorkWeek,
            Self::Week => ViewKind::Week,
            Self::Month => ViewKind::Month,
        }
    }

    /// Whether this strategy renders `view`.
    pub fn supports(self, view: ViewKind) -> bool {
        self.view_kind() == view
    }

    /// Partition `appointments` for this strategy's view.
    ///
    /// Every appointment is validated before anything is emitted, so an
    /// error never leaves a half-built partition behind. An empty input
    /// yields an empty partition.
    ///
    /// # Errors
    ///
    /// Returns [`CalPrintError::InvalidAppointment`] for an appointment that
    /// ends before it starts, and propagates calendar and sorter failures.
    pub fn partition<'a>(
        self,
        ctx: &PartitionContext<'_>,
        appointments: &'a [Appointment],
    ) -> Result<Partition<'a>> {
        for appointment in appointments {
            appointment.validate()?;
        }
        if appointments.is_empty() {
            return Ok(Partition::new());
        }

        let sorted = ctx.sorter.sort_by_start(appointments)?;
        if sorted.len() != appointments.len() {
            return Err(CalPrintError::Sorting(format!(
                "sorter returned {} of {} appointments",
                sorted.len(),
                appointments.len()
            )));
        }

        let mut partition = match self {
            Self::Day => partition_day(ctx, &sorted)?,
            Self::WorkWeek => partition_work_week(ctx, &sorted)?,
            Self::Week => partition_ranged(RangeUnit::Week, ctx, &sorted)?,
            Self::Month => partition_ranged(RangeUnit::Month, ctx, &sorted)?,
        };

        partition.set_metadata(META_VIEW, self.view_kind().to_string());
        if self != Self::Day {
            partition.set_metadata(
                META_FIRST_DAY_OF_WEEK,
                ctx.calendar.first_day_of_week().to_string(),
            );
        }

        debug!(
            strategy = ?self,
            input = appointments.len(),
            output = partition.appointment_count(),
            "Partitioned appointments"
        );
        Ok(partition)
    }
}

#[cfg(test)]
mod tests {
    use calprint_domain::BreakKind;

    use super::*;
    use crate::printing::sort::StableStartSorter;
    use crate::printing::testing::{appt, TestCalendar};

    #[test]
    fn test_supports_only_own_view() {
        for strategy in PartitioningStrategy::ALL {
            for view in ViewKind::all() {
                assert_eq!(strategy.supports(view), PartitioningStrategy::for_view(view) == strategy);
            }
        }
    }

    #[test]
    fn test_empty_input_yields_empty_partition_for_every_strategy() {
        let calendar = TestCalendar::iso();
        let sorter = StableStartSorter;
        let ctx = PartitionContext::new(&calendar, &sorter);

        for strategy in PartitioningStrategy::ALL {
            let partition = strategy.partition(&ctx, &[]).unwrap();
            assert!(partition.appointments.is_empty());
            assert!(partition.breaks.is_empty());
        }
    }

    #[test]
    fn test_invalid_appointment_fails_before_partitioning() {
        let calendar = TestCalendar::iso();
        let sorter = StableStartSorter;
        let ctx = PartitionContext::new(&calendar, &sorter);
        let appointments = vec![
            appt("ok", (2026, 10, 20, 9, 0), (2026, 10, 20, 10, 0)),
            appt("bad", (2026, 10, 21, 11, 0), (2026, 10, 21, 10, 0)),
        ];

        let err = PartitioningStrategy::Week.partition(&ctx, &appointments).unwrap_err();
        assert!(matches!(err, CalPrintError::InvalidAppointment(_)));
    }

    #[test]
    fn test_unsorted_input_matches_presorted_input() {
        let calendar = TestCalendar::iso();
        let sorter = StableStartSorter;
        let ctx = PartitionContext::new(&calendar, &sorter);
        let shuffled = vec![
            appt("c", (2026, 10, 28, 9, 0), (2026, 10, 28, 10, 0)),
            appt("a", (2026, 10, 5, 9, 0), (2026, 10, 5, 10, 0)),
            appt("d", (2026, 10, 30, 22, 0), (2026, 11, 2, 1, 0)),
            appt("b", (2026, 10, 13, 9, 0), (2026, 10, 14, 10, 0)),
        ];
        let mut presorted = shuffled.clone();
        presorted.sort_by_key(|a| a.start);

        for strategy in PartitioningStrategy::ALL {
            let from_shuffled = strategy.partition(&ctx, &shuffled).unwrap();
            let from_sorted = strategy.partition(&ctx, &presorted).unwrap();
            assert_eq!(from_shuffled, from_sorted, "{strategy:?}");
        }
    }

    #[test]
    fn test_metadata_records_view_and_first_day() {
        let calendar = TestCalendar::us();
        let sorter = StableStartSorter;
        let ctx = PartitionContext::new(&calendar, &sorter);
        let appointments = vec![appt("a", (2026, 10, 20, 9, 0), (2026, 10, 20, 10, 0))];

        let week = PartitioningStrategy::Week.partition(&ctx, &appointments).unwrap();
        assert_eq!(week.metadata(META_VIEW), Some("week"));
        assert_eq!(week.metadata(META_FIRST_DAY_OF_WEEK), Some("Sun"));

        let day = PartitioningStrategy::Day.partition(&ctx, &appointments).unwrap();
        assert_eq!(day.metadata(META_VIEW), Some("day"));
        assert_eq!(day.metadata(META_FIRST_DAY_OF_WEEK), None);
        assert_eq!(day.breaks_of(BreakKind::DayName).count(), 1);
    }

    struct LossySorter;

    impl AppointmentSorter for LossySorter {
        fn sort_by_start<'a>(&self, appointments: &'a [Appointment]) -> Result<Vec<&'a Appointment>> {
            Ok(appointments.iter().skip(1).collect())
        }
    }

    #[test]
    fn test_sorter_dropping_appointments_is_sorting_error() {
        let calendar = TestCalendar::iso();
        let ctx = PartitionContext::new(&calendar, &LossySorter);
        let appointments = vec![
            appt("a", (2026, 10, 20, 9, 0), (2026, 10, 20, 10, 0)),
            appt("b", (2026, 10, 21, 9, 0), (2026, 10, 21, 10, 0)),
        ];

        let err = PartitioningStrategy::Month.partition(&ctx, &appointments).unwrap_err();
        assert!(matches!(err, CalPrintError::Sorting(_)));
    }
}
