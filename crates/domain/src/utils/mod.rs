//! Pure helpers shared by the domain and the calendar adapters

pub mod week;
