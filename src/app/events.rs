//! Outbound application events.
//!
//! The [`TrackerService`](super::service::TrackerService) emits these
//! through the [`EventSink`](super::ports::EventSink) port. Adapters on
//! the other side decide what to do with them.

use crate::control::aim::AimCommand;
use crate::control::mode::ControlMode;
use crate::error::SensorError;
use crate::sensors::frame::{Celsius, Coordinate};

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The service has started (carries the initial mode).
    Started { mode: ControlMode },

    /// Both servos were driven to the neutral pose.
    Homed { neutral_us: u16 },

    /// The mode button advanced the response profile.
    ModeChanged { from: ControlMode, to: ControlMode },

    /// A frame could not be acquired; no actuator was commanded this cycle.
    FrameDropped(SensorError),

    /// Periodic telemetry snapshot.
    Telemetry(CycleTelemetry),
}

/// What one control cycle saw and commanded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleTelemetry {
    pub cycle: u64,
    pub min_c: Celsius,
    pub max_c: Celsius,
    pub ambient_c: Celsius,
    /// Hottest cell, or `None` when the centre hold applied.
    pub hotspot: Option<Coordinate>,
    pub aim: AimCommand,
    pub cooling_percent: u8,
    pub cooling_duty: u16,
    pub mode: ControlMode,
}
