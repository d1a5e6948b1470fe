//! # CalPrint Core
//!
//! Partitioning logic for calendar printing - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces for calendar arithmetic and appointment sorting
//! - The Day, WorkWeek, Week and Month partitioning strategies
//! - Strategy selection and the print partition service
//!
//! ## Architecture Principles
//! - Only depends on `calprint-domain`
//! - Locale rules reach the strategies through [`CalendarArithmetic`]
//! - Pass state is local to each call, so everything here is reentrant

pub mod calendar_ports;
pub mod printing;

pub use calendar_ports::{AppointmentSorter, CalendarArithmetic};
pub use printing::{
    PartitionContext, PartitioningStrategy, PrintPartitionService, RangeUnit, StableStartSorter,
    StrategySelector,
};
