//! Partition output: the appointment sequence plus layout break markers
//!
//! Markers annotate positions in the appointment sequence; they are not grid
//! cells of their own. A marker at position `p` sits immediately before the
//! appointment at index `p` (or after the last one when `p == len`), and any
//! number of markers may share a position.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::appointment::Appointment;
use crate::impl_domain_enum_conversions;

/// Kind of layout boundary a marker describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum BreakKind {
    DayBreak,
    WeekBreak,
    MonthBreak,
    YearBreak,
    DayName,
    FillDay,
}

impl_domain_enum_conversions!(BreakKind {
    DayBreak => "day_break",
    WeekBreak => "week_break",
    MonthBreak => "month_break",
    YearBreak => "year_break",
    DayName => "day_name",
    FillDay => "fill_day",
});

/// Marker payload; which variant a kind carries is fixed:
///
/// | kind         | payload                 |
/// |--------------|-------------------------|
/// | `DayBreak`   | `Index(day_of_year)`    |
/// | `WeekBreak`  | `Index(week_of_year)`   |
/// | `MonthBreak` | `Date(date)`            |
/// | `YearBreak`  | `Year(year)`            |
/// | `DayName`    | `Date(date)`            |
/// | `FillDay`    | `Date(date)`            |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum BreakPayload {
    Index(u32),
    Year(i32),
    Date(NaiveDate),
}

/// One layout boundary at a position of the appointment sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct BreakMarker {
    pub position: usize,
    pub kind: BreakKind,
    pub payload: BreakPayload,
}

impl BreakMarker {
    pub fn new(position: usize, kind: BreakKind, payload: BreakPayload) -> Self {
        Self { position, kind, payload }
    }

    /// Numeric payload of day and week breaks.
    pub fn index(&self) -> Option<u32> {
        match self.payload {
            BreakPayload::Index(value) => Some(value),
            _ => None,
        }
    }

    /// Date payload of month breaks, day names and fill days.
    pub fn date(&self) -> Option<NaiveDate> {
        match self.payload {
            BreakPayload::Date(date) => Some(date),
            _ => None,
        }
    }
}

/// Result of partitioning one print view
///
/// Appointments are borrowed from the caller's input and may appear twice
/// when they span several grid cells. The partition only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Partition<'a> {
    pub appointments: Vec<&'a Appointment>,
    pub breaks: Vec<BreakMarker>,
    pub metadata: BTreeMap<String, String>,
}

impl<'a> Partition<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position the next appended appointment will take.
    pub fn cursor(&self) -> usize {
        self.appointments.len()
    }

    pub fn push(&mut self, appointment: &'a Appointment) {
        self.appointments.push(appointment);
    }

    /// Record a marker. Positions never run ahead of the appointment
    /// sequence.
    pub fn add_break(&mut self, marker: BreakMarker) {
        debug_assert!(
            marker.position <= self.appointments.len(),
            "break position {} beyond {} appointments",
            marker.position,
            self.appointments.len()
        );
        self.breaks.push(marker);
    }

    pub fn add_day_break(&mut self, position: usize, day_of_year: u32) {
        self.add_break(BreakMarker::new(
            position,
            BreakKind::DayBreak,
            BreakPayload::Index(day_of_year),
        ));
    }

    pub fn add_week_break(&mut self, position: usize, week_of_year: u32) {
        self.add_break(BreakMarker::new(
            position,
            BreakKind::WeekBreak,
            BreakPayload::Index(week_of_year),
        ));
    }

    pub fn add_month_break(&mut self, position: usize, date: NaiveDate) {
        self.add_break(BreakMarker::new(position, BreakKind::MonthBreak, BreakPayload::Date(date)));
    }

    pub fn add_year_break(&mut self, position: usize, year: i32) {
        self.add_break(BreakMarker::new(position, BreakKind::YearBreak, BreakPayload::Year(year)));
    }

    pub fn add_day_name(&mut self, position: usize, date: NaiveDate) {
        self.add_break(BreakMarker::new(position, BreakKind::DayName, BreakPayload::Date(date)));
    }

    pub fn add_fill_day(&mut self, position: usize, date: NaiveDate) {
        self.add_break(BreakMarker::new(position, BreakKind::FillDay, BreakPayload::Date(date)));
    }

    /// Markers of one kind, in emission order.
    pub fn breaks_of(&self, kind: BreakKind) -> impl Iterator<Item = &BreakMarker> + '_ {
        self.breaks.iter().filter(move |marker| marker.kind == kind)
    }

    /// Markers recorded at `position`, in emission order.
    pub fn breaks_at(&self, position: usize) -> impl Iterator<Item = &BreakMarker> + '_ {
        self.breaks.iter().filter(move |marker| marker.position == position)
    }

    pub fn appointment_count(&self) -> usize {
        self.appointments.len()
    }

    /// No appointments and no markers.
    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty() && self.breaks.is_empty()
    }

    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}
