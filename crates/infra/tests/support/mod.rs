//! Shared helpers for `calprint-infra` integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use calprint_domain::Appointment;
use chrono::NaiveDate;

/// Write `contents` to `dir/name` and return the path.
pub fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("config file should be written");
    path
}

/// Appointment from `h:m` to `h2:m2` on one day.
pub fn meeting(id: &str, day: (i32, u32, u32), from: (u32, u32), to: (u32, u32)) -> Appointment {
    let date = NaiveDate::from_ymd_opt(day.0, day.1, day.2).expect("valid date");
    Appointment::new(
        id,
        format!("Meeting {id}"),
        date.and_hms_opt(from.0, from.1, 0).expect("valid start"),
        date.and_hms_opt(to.0, to.1, 0).expect("valid end"),
    )
}
