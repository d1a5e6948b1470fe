//! # CalPrint Domain
//!
//! Data model for the calendar print partitioning engine.
//!
//! This crate contains:
//! - Appointments, view kinds, break markers and the `Partition` output
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Pure week arithmetic helpers
//!
//! ## Architecture
//! - No dependencies on other CalPrint crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
