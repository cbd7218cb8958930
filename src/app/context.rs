//! Mutable state carried from one control cycle to the next.
//!
//! `ControlContext` is the single struct the control loop owns across
//! cycles: the frame buffer the sensor overwrites, the mode selector with
//! its debounce flag, whether the servos have been homed, and the last
//! command sent to them. Nothing else survives a cycle.

use crate::control::aim::AimCommand;
use crate::control::mode::{ControlMode, ModeSelector};
use crate::sensors::frame::ThermalImage;

/// The control-loop context.
pub struct ControlContext {
    // -- Frame --
    /// Overwritten in place by the sensor every cycle.
    pub frame: ThermalImage,

    // -- Mode --
    /// Active profile plus trigger debounce state.
    pub selector: ModeSelector,

    // -- Aim --
    /// Set once both servos have been driven to neutral.
    pub homed: bool,
    /// Last command written to the servos.
    pub last_aim: Option<AimCommand>,

    // -- Counters --
    /// Completed cycles (successful or dropped).
    pub cycle_count: u64,
    /// Cycles skipped because the sensor failed.
    pub frames_dropped: u64,
}

impl ControlContext {
    pub fn new(initial_mode: u8, profile_count: u8) -> Self {
        Self {
            frame: ThermalImage::default(),
            selector: ModeSelector::new(initial_mode, profile_count),
            homed: false,
            last_aim: None,
            cycle_count: 0,
            frames_dropped: 0,
        }
    }

    pub fn mode(&self) -> ControlMode {
        self.selector.mode()
    }
}
