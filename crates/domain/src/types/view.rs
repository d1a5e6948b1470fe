//! Print view identifiers

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_enum_conversions;

/// Print view a caller can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum ViewKind {
    Day,
    WorkWeek,
    Week,
    Month,
}

impl ViewKind {
    /// Every view kind, narrowest first.
    pub fn all() -> Vec<Self> {
        vec![Self::Day, Self::WorkWeek, Self::Week, Self::Month]
    }
}

impl_domain_enum_conversions!(ViewKind {
    Day => "day",
    WorkWeek => "workweek" | "work_week" | "work-week",
    Week => "week",
    Month => "month",
});
