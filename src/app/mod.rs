//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the control loop for the tracker: frame
//! reduction, aim mapping, cooling response and mode cycling, orchestrated
//! once per frame. All interaction with hardware happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable without
//! real peripherals.

pub mod context;
pub mod events;
pub mod ports;
pub mod service;
