//! # CalPrint Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - `ConfiguredCalendar`, the chrono-backed calendar arithmetic adapter
//! - Configuration loading from environment variables and files
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `calprint-core`
//! - Contains all "impure" code (environment, file system, global logging)

pub mod calendar;
pub mod config;
pub mod observability;

use std::sync::Arc;

use calprint_core::{PrintPartitionService, StableStartSorter};
use calprint_domain::{Config, Result};

// Re-export commonly used items
pub use calendar::ConfiguredCalendar;

/// Wire a [`PrintPartitionService`] from a loaded configuration.
///
/// # Errors
/// Returns `CalPrintError::Config` when the configuration is invalid.
pub fn build_service(config: &Config) -> Result<PrintPartitionService> {
    config.validate()?;
    let calendar = ConfiguredCalendar::new(config.calendar.clone())?;
    Ok(PrintPartitionService::new(Arc::new(calendar), Arc::new(StableStartSorter), &config.print))
}
