//! Simulated peripherals for host runs.
//!
//! [`SimPwm`] records the last duty written; [`ScriptedTrigger`] presses
//! the mode button on a fixed schedule. Both implement the `embedded-hal`
//! traits the real drivers are written against.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType as DigitalErrorType, InputPin};
use embedded_hal::pwm::{ErrorType as PwmErrorType, SetDutyCycle};

/// In-memory PWM channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimPwm {
    max: u16,
    duty: u16,
}

impl SimPwm {
    /// A channel counting `max` ticks per period.
    pub fn new(max: u16) -> Self {
        Self { max, duty: 0 }
    }

    pub fn duty(&self) -> u16 {
        self.duty
    }
}

impl PwmErrorType for SimPwm {
    type Error = Infallible;
}

impl SetDutyCycle for SimPwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty.min(self.max);
        Ok(())
    }
}

/// Button that reads pressed for `hold_polls` samples every `every_polls`.
/// `every_polls == 0` never presses.
#[derive(Debug, Clone, Copy)]
pub struct ScriptedTrigger {
    every_polls: u32,
    hold_polls: u32,
    polls: u32,
}

impl ScriptedTrigger {
    pub fn new(every_polls: u32, hold_polls: u32) -> Self {
        Self {
            every_polls,
            hold_polls: hold_polls.max(1),
            polls: 0,
        }
    }

    pub fn never() -> Self {
        Self::new(0, 1)
    }
}

impl DigitalErrorType for ScriptedTrigger {
    type Error = Infallible;
}

impl InputPin for ScriptedTrigger {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.polls = self.polls.wrapping_add(1);
        if self.every_polls == 0 {
            return Ok(false);
        }
        let phase = self.polls % self.every_polls;
        Ok(phase < self.hold_polls && self.polls >= self.every_polls)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|h| !h)
    }
}
