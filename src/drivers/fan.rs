//! Cooling fan driver over an `embedded-hal` PWM channel.
//!
//! The control loop speaks the fan timer's native range (0–16000 counts);
//! this driver rescales that onto whatever resolution the channel has.

use embedded_hal::pwm::SetDutyCycle;

use crate::error::ActuatorError;
use crate::pins::FAN_DUTY_MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanState {
    Stopped,
    Running { duty: u16 },
}

pub struct FanDriver<P> {
    pwm: P,
    state: FanState,
}

impl<P: SetDutyCycle> FanDriver<P> {
    pub fn new(pwm: P) -> Self {
        Self {
            pwm,
            state: FanState::Stopped,
        }
    }

    /// Set duty in native counts; anything above full scale runs flat out.
    pub fn set_duty(&mut self, duty: u16) -> Result<(), ActuatorError> {
        let duty = duty.min(FAN_DUTY_MAX);
        self.pwm
            .set_duty_cycle_fraction(duty, FAN_DUTY_MAX)
            .map_err(|_| ActuatorError::PwmWriteFailed)?;
        self.state = if duty == 0 {
            FanState::Stopped
        } else {
            FanState::Running { duty }
        };
        Ok(())
    }

    pub fn state(&self) -> FanState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.state, FanState::Stopped)
    }

    pub fn channel(&self) -> &P {
        &self.pwm
    }
}
