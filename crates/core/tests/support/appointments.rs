use calprint_domain::{Appointment, Partition};
use chrono::{NaiveDate, NaiveDateTime};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

/// One-hour appointment starting at `h:00` on the given day.
pub fn hour(id: &str, y: i32, m: u32, d: u32, h: u32) -> Appointment {
    Appointment::new(id, format!("Meeting {id}"), at(y, m, d, h, 0), at(y, m, d, h + 1, 0))
}

pub fn between(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> Appointment {
    Appointment::new(id, format!("Meeting {id}"), start, end)
}

pub fn ids<'a>(partition: &'a Partition<'_>) -> Vec<&'a str> {
    partition.appointments.iter().map(|a| a.id.as_str()).collect()
}

/// Every marker position must address the appointment sequence.
pub fn assert_positions_in_range(partition: &Partition<'_>) {
    for marker in &partition.breaks {
        assert!(
            marker.position <= partition.appointment_count(),
            "marker {marker:?} beyond {} appointments",
            partition.appointment_count()
        );
    }
}
