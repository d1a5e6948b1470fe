//! Appointments as the partitioning engine sees them
//!
//! Appointments arrive already expanded (no recurrences) and already
//! normalised to the calendar's zone, hence the naive timestamps.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::errors::{CalPrintError, Result};

/// A concrete occurrence covering the half-open interval `[start, end)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Appointment {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub full_time: bool,
}

impl Appointment {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self { id: id.into(), title: title.into(), start, end, location: None, full_time: false }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn full_time(mut self) -> Self {
        self.full_time = true;
        self
    }

    /// Reject appointments that end before they start.
    pub fn validate(&self) -> Result<()> {
        if self.end < self.start {
            return Err(CalPrintError::InvalidAppointment(format!(
                "appointment '{}' ends at {} before it starts at {}",
                self.id, self.end, self.start
            )));
        }
        Ok(())
    }

    /// Calendar day the appointment starts on.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Last calendar day the appointment occupies.
    ///
    /// The end instant is exclusive: an appointment ending exactly at
    /// midnight does not occupy the day that midnight opens.
    pub fn last_date(&self) -> NaiveDate {
        let end_date = self.end.date();
        if self.end > self.start && self.end.time() == NaiveTime::MIN {
            end_date.pred_opt().unwrap_or(end_date)
        } else {
            end_date
        }
    }
}
