//! Error types used throughout the partitioning engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for CalPrint
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CalPrintError {
    /// No partitioning strategy is registered for the requested view.
    #[error("Unsupported view kind: {0}")]
    UnsupportedViewKind(String),

    /// An appointment violates `start <= end`.
    #[error("Invalid appointment: {0}")]
    InvalidAppointment(String),

    /// Calendar arithmetic could not produce a date (out of range, etc.).
    #[error("Calendar error: {0}")]
    Calendar(String),

    #[error("Sorting error: {0}")]
    Sorting(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CalPrintError {
    /// Whether the failure was caused by the request rather than by the
    /// engine or its collaborators.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::UnsupportedViewKind(_) | Self::InvalidAppointment(_))
    }
}

/// Result type alias for CalPrint operations
pub type Result<T> = std::result::Result<T, CalPrintError>;
