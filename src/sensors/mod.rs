//! Sensor subsystem: the thermal frame type and frame sources.
//!
//! Real hardware delivers calibrated frames through a
//! [`SensorPort`](crate::app::ports::SensorPort) implementation supplied by
//! the board bring-up; [`scene::SimulatedScene`] stands in for it on the
//! host.

pub mod frame;
pub mod scene;

pub use frame::{Celsius, Coordinate, ThermalImage};
