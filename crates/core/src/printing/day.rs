//! Day view: one bucket per calendar day, no filling

use calprint_domain::{Appointment, Partition, Result};

use super::strategy::PartitionContext;
use super::transitions::{Boundaries, TransitionState};

pub(crate) fn partition_day<'a>(
    ctx: &PartitionContext<'_>,
    sorted: &[&'a Appointment],
) -> Result<Partition<'a>> {
    let mut state = TransitionState::default();
    let mut partition = Partition::new();
    let day = Boundaries { day: true, ..Boundaries::NONE };

    for &appointment in sorted {
        let pointer = partition.cursor();
        let start = appointment.start_date();
        if state.emit(ctx.calendar, &mut partition, pointer, start, day)?.day {
            partition.add_day_name(pointer, start);
        }
        partition.push(appointment);
    }

    Ok(partition)
}
