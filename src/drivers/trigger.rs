//! Mode button input.
//!
//! Samples a digital input once per control cycle and reports whether the
//! button is pressed. Edge detection and debounce live in the domain
//! ([`ModeSelector`](crate::control::mode::ModeSelector)); this driver
//! only handles polarity and read failures.

use embedded_hal::digital::InputPin;
use log::warn;

use crate::error::ActuatorError;

/// Electrical level that means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveLevel {
    High,
    Low,
}

pub struct TriggerInput<I> {
    pin: I,
    active: ActiveLevel,
    last: bool,
}

impl<I: InputPin> TriggerInput<I> {
    pub fn new(pin: I, active: ActiveLevel) -> Self {
        Self {
            pin,
            active,
            last: false,
        }
    }

    /// Read the pin once.
    pub fn read(&mut self) -> Result<bool, ActuatorError> {
        let high = self
            .pin
            .is_high()
            .map_err(|_| ActuatorError::GpioReadFailed)?;
        Ok(match self.active {
            ActiveLevel::High => high,
            ActiveLevel::Low => !high,
        })
    }

    /// Pressed state; a failed read repeats the previous sample.
    pub fn level(&mut self) -> bool {
        match self.read() {
            Ok(pressed) => self.last = pressed,
            Err(e) => warn!("Trigger read failed ({}), holding last level", e),
        }
        self.last
    }

    pub fn pin(&self) -> &I {
        &self.pin
    }
}
