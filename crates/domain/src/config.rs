//! Configuration structures
//!
//! Loading lives in `calprint-infra`; this module only defines the shape,
//! defaults and validation.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DAYS_PER_WEEK, DEFAULT_FIRST_DAY_OF_WEEK, DEFAULT_MINIMAL_DAYS_IN_FIRST_WEEK,
    DEFAULT_WORK_WEEK_FIRST_DAY, DEFAULT_WORK_WEEK_LAST_DAY,
};
use crate::errors::{CalPrintError, Result};
use crate::types::ViewKind;
use crate::utils::week::weekday_run;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub print: PrintConfig,
}

impl Config {
    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.calendar.validate()?;
        self.print.validate()
    }
}

/// Locale settings consumed by the calendar arithmetic adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub first_day_of_week: Weekday,
    /// Days of the new year that week 1 must contain (4 = ISO 8601, 1 = US).
    #[serde(default = "default_minimal_days")]
    pub minimal_days_in_first_week: u8,
    #[serde(default = "default_work_week_first_day")]
    pub work_week_first_day: Weekday,
    #[serde(default = "default_work_week_last_day")]
    pub work_week_last_day: Weekday,
}

impl CalendarConfig {
    pub fn validate(&self) -> Result<()> {
        if !(1..=DAYS_PER_WEEK).contains(&self.minimal_days_in_first_week) {
            return Err(CalPrintError::Config(format!(
                "minimal_days_in_first_week must be between 1 and {DAYS_PER_WEEK}, got {}",
                self.minimal_days_in_first_week
            )));
        }
        Ok(())
    }

    /// Weekdays of the configured work week, in order, wrapping around the
    /// end of the week when the last day precedes the first.
    pub fn work_week_weekdays(&self) -> Vec<Weekday> {
        weekday_run(self.work_week_first_day, self.work_week_last_day)
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            first_day_of_week: DEFAULT_FIRST_DAY_OF_WEEK,
            minimal_days_in_first_week: DEFAULT_MINIMAL_DAYS_IN_FIRST_WEEK,
            work_week_first_day: DEFAULT_WORK_WEEK_FIRST_DAY,
            work_week_last_day: DEFAULT_WORK_WEEK_LAST_DAY,
        }
    }
}

fn default_minimal_days() -> u8 {
    DEFAULT_MINIMAL_DAYS_IN_FIRST_WEEK
}

fn default_work_week_first_day() -> Weekday {
    DEFAULT_WORK_WEEK_FIRST_DAY
}

fn default_work_week_last_day() -> Weekday {
    DEFAULT_WORK_WEEK_LAST_DAY
}

/// Print pipeline options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintConfig {
    /// Views the selector offers; anything else is `UnsupportedViewKind`.
    #[serde(default = "ViewKind::all")]
    pub enabled_views: Vec<ViewKind>,
    /// Record a `FillDay` marker next to the `DayBreak` of every synthesized
    /// filler day.
    #[serde(default)]
    pub fill_day_markers: bool,
}

impl PrintConfig {
    pub fn validate(&self) -> Result<()> {
        if self.enabled_views.is_empty() {
            return Err(CalPrintError::Config("enabled_views must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self { enabled_views: ViewKind::all(), fill_day_markers: false }
    }
}
