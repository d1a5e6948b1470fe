//! Calendar arithmetic driven by `CalendarConfig`

use calprint_core::CalendarArithmetic;
use calprint_domain::utils::week;
use calprint_domain::{CalendarConfig, CalPrintError, Result};
use chrono::{NaiveDate, Weekday};

/// Chrono-backed [`CalendarArithmetic`] for one locale configuration
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredCalendar {
    config: CalendarConfig,
    work_week: Vec<Weekday>,
}

impl ConfiguredCalendar {
    /// # Errors
    /// Returns `CalPrintError::Config` when the configuration is invalid.
    pub fn new(config: CalendarConfig) -> Result<Self> {
        config.validate()?;
        let work_week = config.work_week_weekdays();
        tracing::debug!(
            first_day_of_week = %config.first_day_of_week,
            minimal_days = config.minimal_days_in_first_week,
            work_days = work_week.len(),
            "Calendar configured"
        );
        Ok(Self { config, work_week })
    }

    /// Monday weeks, ISO 8601 numbering, Monday to Friday work week.
    pub fn iso() -> Self {
        let config = CalendarConfig::default();
        let work_week = config.work_week_weekdays();
        Self { config, work_week }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }
}

impl CalendarArithmetic for ConfiguredCalendar {
    fn first_day_of_week(&self) -> Weekday {
        self.config.first_day_of_week
    }

    fn week_of_year(&self, date: NaiveDate) -> Result<u32> {
        week::week_of_year(
            date,
            self.config.first_day_of_week,
            self.config.minimal_days_in_first_week,
        )
        .ok_or_else(|| out_of_range("week of year", date))
    }

    fn start_of_week(&self, date: NaiveDate) -> Result<NaiveDate> {
        week::start_of_week(date, self.config.first_day_of_week)
            .ok_or_else(|| out_of_range("start of week", date))
    }

    fn end_of_week(&self, date: NaiveDate) -> Result<NaiveDate> {
        week::end_of_week(date, self.config.first_day_of_week)
            .ok_or_else(|| out_of_range("end of week", date))
    }

    fn work_week_weekdays(&self) -> Vec<Weekday> {
        self.work_week.clone()
    }
}

fn out_of_range(what: &str, date: NaiveDate) -> CalPrintError {
    CalPrintError::Calendar(format!("{what} for {date} is out of range"))
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn us() -> ConfiguredCalendar {
        ConfiguredCalendar::new(CalendarConfig {
            first_day_of_week: Weekday::Sun,
            minimal_days_in_first_week: 1,
            ..CalendarConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_iso_matches_default_config() {
        assert_eq!(ConfiguredCalendar::iso(), ConfiguredCalendar::new(CalendarConfig::default()).unwrap());
    }

    #[test]
    fn test_iso_week_numbers() {
        let calendar = ConfiguredCalendar::iso();

        // 2027-01-01 is a Friday and still belongs to week 53 of 2026
        assert_eq!(calendar.week_of_year(date(2027, 1, 1)).unwrap(), 53);
        assert_eq!(calendar.week_of_year(date(2027, 1, 4)).unwrap(), 1);
        assert_eq!(calendar.week_of_year(date(2026, 10, 20)).unwrap(), 43);
    }

    #[test]
    fn test_us_week_numbers_and_bounds() {
        let calendar = us();

        assert_eq!(calendar.week_of_year(date(2027, 1, 1)).unwrap(), 1);
        assert_eq!(calendar.start_of_week(date(2026, 10, 20)).unwrap(), date(2026, 10, 18));
        assert_eq!(calendar.end_of_week(date(2026, 10, 20)).unwrap(), date(2026, 10, 24));
        assert_eq!(calendar.last_day_of_week(), Weekday::Sat);
        assert!(calendar.is_first_day_of_week(date(2026, 10, 18)));
        assert!(calendar.is_last_day_of_week(date(2026, 10, 24)));
    }

    #[test]
    fn test_wrapping_work_week() {
        let calendar = ConfiguredCalendar::new(CalendarConfig {
            work_week_first_day: Weekday::Sun,
            work_week_last_day: Weekday::Thu,
            ..CalendarConfig::default()
        })
        .unwrap();

        assert_eq!(calendar.work_week_weekdays().len(), 5);
        assert!(calendar.is_work_day(date(2026, 10, 18)));
        assert!(!calendar.is_work_day(date(2026, 10, 23)));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = ConfiguredCalendar::new(CalendarConfig {
            minimal_days_in_first_week: 0,
            ..CalendarConfig::default()
        })
        .unwrap_err();

        assert!(matches!(err, CalPrintError::Config(_)));
    }

    #[test]
    fn test_overflow_is_calendar_error() {
        // A week starting on the last representable date cannot end
        let calendar = ConfiguredCalendar::new(CalendarConfig {
            first_day_of_week: NaiveDate::MAX.weekday(),
            ..CalendarConfig::default()
        })
        .unwrap();

        let err = calendar.end_of_week(NaiveDate::MAX).unwrap_err();
        assert!(matches!(err, CalPrintError::Calendar(_)));
    }
}
