//! Domain types and models

pub mod appointment;
pub mod partition;
pub mod view;

pub use appointment::Appointment;
pub use partition::{BreakKind, BreakMarker, BreakPayload, Partition};
pub use view::ViewKind;
