//! Calendar print partitioning
//!
//! Turns an unordered set of appointments into a [`Partition`] for one print
//! view: the appointments in grid order plus the day, week, month and year
//! markers a renderer needs, including markers for empty days.
//!
//! [`Partition`]: calprint_domain::Partition

pub mod ranged;
pub mod selector;
pub mod service;
pub mod sort;
pub mod strategy;

mod day;
mod transitions;
mod work_week;

#[cfg(test)]
pub(crate) mod testing;

pub use ranged::RangeUnit;
pub use selector::StrategySelector;
pub use service::PrintPartitionService;
pub use sort::StableStartSorter;
pub use strategy::{PartitionContext, PartitioningStrategy};
