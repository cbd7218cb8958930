//! Fan response curves.
//!
//! The cooling intensity is a table lookup, not a formula: each
//! [`ResponseProfile`] maps the whole-degree error above target (1..=8)
//! to a fan percentage. Errors above 8 saturate at the last entry; at or
//! below target the fan is off regardless of profile.

use heapless::Vec;
use serde::{Deserialize, Serialize};

use super::mode::ControlMode;
use crate::pins::FAN_DUTY_PER_PERCENT;
use crate::sensors::frame::Celsius;

/// Entries per response profile.
pub const PROFILE_LEN: usize = 8;
/// Upper bound on configured profiles.
pub const MAX_PROFILES: usize = 8;

/// Eight fan percentages indexed by error magnitude 1..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseProfile(pub [u8; PROFILE_LEN]);

impl ResponseProfile {
    /// Gentle ramp, full fan from 7 °C over target.
    pub const GENTLE: Self = Self([10, 10, 25, 30, 50, 75, 100, 100]);
    /// Capped at half speed.
    pub const AGGRESSIVE: Self = Self([5, 10, 20, 25, 30, 40, 45, 50]);
    /// Steep ramp, full fan from 5 °C over target.
    pub const MAXIMUM: Self = Self([20, 30, 50, 80, 100, 100, 100, 100]);

    /// Percentage for an error magnitude already clamped into 1..=8.
    pub fn level(&self, magnitude: u8) -> u8 {
        let index = magnitude.clamp(1, PROFILE_LEN as u8) as usize - 1;
        self.0[index]
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.0.iter().any(|&p| p > 100) {
            return Err("cooling profile entry above 100%");
        }
        Ok(())
    }
}

/// Ordered set of selectable profiles. The mode index selects one.
pub type CoolingProfiles = Vec<ResponseProfile, MAX_PROFILES>;

/// The three profiles shipped by default, in mode order.
pub fn default_profiles() -> CoolingProfiles {
    [
        ResponseProfile::GENTLE,
        ResponseProfile::AGGRESSIVE,
        ResponseProfile::MAXIMUM,
    ]
    .into_iter()
    .collect()
}

/// Whole-degree error above target, or `None` at/below target.
///
/// The observed temperature is truncated toward zero before subtracting,
/// so 33.9 °C against a 33 °C target is still "at target".
pub fn error_magnitude(target_c: i16, current_c: Celsius) -> Option<u8> {
    let error = (current_c as i32).saturating_sub(i32::from(target_c));
    (error > 0).then(|| error.min(PROFILE_LEN as i32) as u8)
}

/// Fan percentage to timer duty counts.
pub fn duty_for_percent(percent: u8) -> u16 {
    u16::from(percent.min(100)) * FAN_DUTY_PER_PERCENT
}

/// Computes cooling intensity from a temperature error.
#[derive(Debug, Clone)]
pub struct CoolingCurve {
    profiles: CoolingProfiles,
}

impl CoolingCurve {
    /// `profiles` must be non-empty (enforced by config validation).
    pub fn new(profiles: CoolingProfiles) -> Self {
        debug_assert!(!profiles.is_empty(), "cooling curve needs a profile");
        Self { profiles }
    }

    /// Number of selectable profiles (the mode count).
    pub fn profile_count(&self) -> u8 {
        self.profiles.len() as u8
    }

    pub fn profile(&self, mode: ControlMode) -> Option<&ResponseProfile> {
        self.profiles.get(mode.index())
    }

    /// Fan percentage (0..=100) for the given temperatures and mode.
    pub fn intensity(&self, target_c: i16, current_c: Celsius, mode: ControlMode) -> u8 {
        let Some(magnitude) = error_magnitude(target_c, current_c) else {
            return 0;
        };
        match self.profile(mode) {
            Some(profile) => profile.level(magnitude),
            None => {
                debug_assert!(false, "mode {} has no profile", mode.index());
                self.profiles.first().map_or(0, |p| p.level(magnitude))
            }
        }
    }
}
