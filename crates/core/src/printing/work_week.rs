//! Work-week view
//!
//! No filling: only appointments starting on a configured work day are kept,
//! but every appointment, kept or not, still opens the days and weeks it
//! signals.

use calprint_domain::{Appointment, Partition, Result};
use tracing::debug;

use super::ranged::RangeUnit;
use super::strategy::PartitionContext;
use super::transitions::{Boundaries, Signals, TransitionState};

pub(crate) fn partition_work_week<'a>(
    ctx: &PartitionContext<'_>,
    sorted: &[&'a Appointment],
) -> Result<Partition<'a>> {
    let calendar = ctx.calendar;
    let mut state = TransitionState::default();
    let mut partition = Partition::new();
    let mut dropped = 0usize;

    for (index, &current) in sorted.iter().enumerate() {
        let previous = index.checked_sub(1).and_then(|i| sorted.get(i)).copied();
        let pointer = partition.cursor();
        let start = current.start_date();

        let signals = Signals::between(calendar, previous, current)?;
        let wanted = Boundaries { week: signals.week, day: signals.day, ..Boundaries::NONE };
        state.emit(calendar, &mut partition, pointer, start, wanted)?;

        if !calendar.is_work_day(start) {
            dropped += 1;
            continue;
        }
        partition.push(current);
        if RangeUnit::Week.spans_multiple_units(calendar, current)? {
            partition.push(current);
        }
    }

    if dropped > 0 {
        debug!(dropped, "Skipped appointments outside the work week");
    }
    Ok(partition)
}
