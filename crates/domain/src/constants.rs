//! Domain constants
//!
//! Metadata keys and configuration defaults shared by the strategies and the
//! configuration loader.

use chrono::Weekday;

// Partition metadata keys
pub const META_VIEW: &str = "view";
pub const META_FIRST_DAY_OF_WEEK: &str = "first_day_of_week";

// Calendar defaults (ISO 8601 weeks, Monday-Friday work week)
pub const DEFAULT_FIRST_DAY_OF_WEEK: Weekday = Weekday::Mon;
pub const DEFAULT_MINIMAL_DAYS_IN_FIRST_WEEK: u8 = 4;
pub const DEFAULT_WORK_WEEK_FIRST_DAY: Weekday = Weekday::Mon;
pub const DEFAULT_WORK_WEEK_LAST_DAY: Weekday = Weekday::Fri;

pub const DAYS_PER_WEEK: u8 = 7;
