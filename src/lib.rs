//! ThermoTrack controller library.
//!
//! Thermal-camera pan/tilt tracker with a mode-selectable cooling fan.
//! Exposes the pure-logic core for integration testing; hardware is
//! reached only through the port traits in [`app::ports`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod sensors;
