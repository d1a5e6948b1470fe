//! Default appointment sorter

use calprint_domain::{Appointment, Result};

use crate::calendar_ports::AppointmentSorter;

/// Stable ascending sort by start instant.
#[derive(Debug, Clone, Copy, Default)]
pub struct StableStartSorter;

impl AppointmentSorter for StableStartSorter {
    fn sort_by_start<'a>(&self, appointments: &'a [Appointment]) -> Result<Vec<&'a Appointment>> {
        let mut sorted: Vec<&Appointment> = appointments.iter().collect();
        sorted.sort_by_key(|appointment| appointment.start);
        Ok(sorted)
    }
}
