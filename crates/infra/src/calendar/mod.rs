//! Calendar arithmetic adapters

pub mod configured;

pub use configured::ConfiguredCalendar;
