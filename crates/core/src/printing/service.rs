//! Print partition service - entry point for the action layer

use std::sync::Arc;

use calprint_domain::{Appointment, Partition, PrintConfig, Result, ViewKind};
use tracing::{info, warn};

use super::selector::StrategySelector;
use super::strategy::{PartitionContext, PartitioningStrategy};
use crate::calendar_ports::{AppointmentSorter, CalendarArithmetic};

/// Partitions appointments for a requested print view
///
/// The service holds no per-call state. One instance can serve concurrent
/// requests.
pub struct PrintPartitionService {
    calendar: Arc<dyn CalendarArithmetic>,
    sorter: Arc<dyn AppointmentSorter>,
    selector: StrategySelector,
    fill_day_markers: bool,
}

impl PrintPartitionService {
    /// Create a new service offering the views enabled in `print`
    pub fn new(
        calendar: Arc<dyn CalendarArithmetic>,
        sorter: Arc<dyn AppointmentSorter>,
        print: &PrintConfig,
    ) -> Self {
        Self {
            calendar,
            sorter,
            selector: StrategySelector::for_views(&print.enabled_views),
            fill_day_markers: print.fill_day_markers,
        }
    }

    /// Replace the strategy selector
    pub fn with_selector(mut self, selector: StrategySelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn supported_views(&self) -> Vec<ViewKind> {
        self.selector.supported_views()
    }

    pub fn select_strategy(&self, view: ViewKind) -> Result<PartitioningStrategy> {
        self.selector.select(view)
    }

    /// Partition `appointments` for `view`
    ///
    /// # Errors
    ///
    /// Fails with `UnsupportedViewKind` when the view is not enabled, with
    /// `InvalidAppointment` for malformed input, and propagates calendar and
    /// sorting failures unchanged.
    pub fn partition<'a>(
        &self,
        view: ViewKind,
        appointments: &'a [Appointment],
    ) -> Result<Partition<'a>> {
        let strategy = self.selector.select(view).inspect_err(|err| {
            warn!(view = %view, error = %err, "No partitioning strategy for view");
        })?;
        self.run(strategy, appointments)
    }

    /// Partition for a textual view identifier such as `"workweek"`.
    pub fn partition_named<'a>(
        &self,
        name: &str,
        appointments: &'a [Appointment],
    ) -> Result<Partition<'a>> {
        let strategy = self.selector.select_by_name(name).inspect_err(|err| {
            warn!(view = name, error = %err, "No partitioning strategy for view");
        })?;
        self.run(strategy, appointments)
    }

    fn run<'a>(
        &self,
        strategy: PartitioningStrategy,
        appointments: &'a [Appointment],
    ) -> Result<Partition<'a>> {
        let ctx = PartitionContext::new(self.calendar.as_ref(), self.sorter.as_ref())
            .with_fill_day_markers(self.fill_day_markers);

        let partition = strategy.partition(&ctx, appointments).inspect_err(|err| {
            warn!(view = %strategy.view_kind(), error = %err, "Partitioning failed");
        })?;

        info!(
            view = %strategy.view_kind(),
            appointments = appointments.len(),
            entries = partition.appointment_count(),
            markers = partition.breaks.len(),
            "Partitioned appointments for print"
        );
        Ok(partition)
    }
}
