//! Controller configuration parameters
//!
//! All tunable parameters for the tracker: target temperature, loop
//! cadence, servo calibration tables and fan response profiles.
//! Loaded through a [`ConfigPort`](crate::app::ports::ConfigPort) at boot;
//! nothing is persisted back.

use serde::{Deserialize, Serialize};

use crate::control::aim::AimCalibration;
use crate::control::cooling::{CoolingProfiles, default_profiles};

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    // --- Cooling ---
    /// Temperature (Celsius) the fan regulates the hottest cell toward
    pub target_temperature_c: i16,
    /// Selectable fan response curves, in mode order
    pub cooling: CoolingProfiles,
    /// Mode active at power-on
    pub initial_mode: u8,

    // --- Aim ---
    /// Servo lookup tables and neutral pose
    pub aim: AimCalibration,

    // --- Timing ---
    /// Delay between control cycles (milliseconds)
    pub frame_interval_ms: u32,
    /// Wait after driving the servos to neutral at boot (milliseconds)
    pub home_settle_ms: u32,
    /// Telemetry report interval (control cycles)
    pub telemetry_interval_cycles: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            // Cooling
            target_temperature_c: 33,
            cooling: default_profiles(),
            initial_mode: 0,

            // Aim
            aim: AimCalibration::default(),

            // Timing
            frame_interval_ms: 1000, // 1 Hz
            home_settle_ms: 1000,
            telemetry_interval_cycles: 10,
        }
    }
}

impl ControllerConfig {
    /// Range-check every field. Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.cooling.is_empty() {
            return Err("cooling: at least one profile required");
        }
        for profile in &self.cooling {
            profile.validate()?;
        }
        if usize::from(self.initial_mode) >= self.cooling.len() {
            return Err("initial_mode: no such profile");
        }
        if !(-40..=125).contains(&self.target_temperature_c) {
            return Err("target_temperature_c: outside sensor range");
        }
        self.aim.validate()?;
        if self.frame_interval_ms == 0 {
            return Err("frame_interval_ms: must be non-zero");
        }
        if self.telemetry_interval_cycles == 0 {
            return Err("telemetry_interval_cycles: must be non-zero");
        }
        Ok(())
    }

    /// Encode as a compact postcard blob.
    pub fn to_blob(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_allocvec(self)
    }

    /// Decode a postcard blob produced by [`to_blob`](Self::to_blob).
    pub fn from_blob(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}
