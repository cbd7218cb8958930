//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ TrackerService (domain)
//! ```
//!
//! Driven adapters (thermal sensor, servos, fan, trigger, event sinks,
//! config sources) implement these traits. The
//! [`TrackerService`](super::service::TrackerService) consumes them via
//! generics, so the control loop never touches hardware directly.

use crate::config::ControllerConfig;
use crate::control::aim::Axis;
use crate::error::SensorError;
use crate::sensors::frame::{Celsius, ThermalImage};

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain thermal frames.
///
/// Implementations deliver calibrated, bad-pixel-corrected temperatures.
pub trait SensorPort {
    /// Overwrite `frame` with the next acquired frame.
    fn acquire_frame(&mut self, frame: &mut ThermalImage) -> Result<(), SensorError>;

    /// Ambient (reflected) temperature from the last acquisition.
    fn ambient_temperature(&mut self) -> Celsius;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
pub trait ActuatorPort {
    /// Set a servo pulse width in microseconds (1000–2000).
    fn set_axis_position(&mut self, axis: Axis, pulse_width_us: u16);

    /// Set the fan duty in timer counts (0–16000).
    fn set_cooling_duty(&mut self, duty: u16);
}

// ───────────────────────────────────────────────────────────────
// Trigger port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// The mode button, sampled once per cycle.
pub trait TriggerPort {
    /// Current level: `true` while pressed.
    fn read_trigger(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: config source → domain)
// ───────────────────────────────────────────────────────────────

/// Loads controller configuration at boot.
///
/// Implementations MUST validate before returning; invalid ranges are
/// rejected with [`ConfigError::ValidationFailed`], not silently clamped.
pub trait ConfigPort {
    fn load(&self) -> Result<ControllerConfig, ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No config found at the source.
    NotFound,
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the source.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}
