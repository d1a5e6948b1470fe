//! Shared test helpers for `calprint-core` integration tests.
//!
//! A scriptable calendar and appointment builders so that the strategy
//! tests can focus on markers instead of setup.

#![allow(dead_code)]

pub mod appointments;
pub mod calendar;
