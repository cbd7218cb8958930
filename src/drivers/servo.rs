//! Hobby servo driver over an `embedded-hal` PWM channel.
//!
//! The channel is expected to run at a 20 ms frame; the pulse width in
//! microseconds is converted to a duty fraction of that period. Pulses are
//! clamped to 1000–2000 µs so a bad table entry cannot drive the horn past
//! its end stops.

use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::error::ActuatorError;
use crate::pins::{SERVO_MAX_PULSE_US, SERVO_MIN_PULSE_US, SERVO_PERIOD_US};

pub struct ServoDriver<P> {
    pwm: P,
    pulse_us: Option<u16>,
}

impl<P: SetDutyCycle> ServoDriver<P> {
    pub fn new(pwm: P) -> Self {
        Self {
            pwm,
            pulse_us: None,
        }
    }

    /// Command a pulse width. Values outside the servo travel are clamped.
    pub fn set_pulse_width(&mut self, pulse_us: u16) -> Result<(), ActuatorError> {
        let clamped = pulse_us.clamp(SERVO_MIN_PULSE_US, SERVO_MAX_PULSE_US);
        if clamped != pulse_us {
            warn!("Servo pulse {}us clamped to {}us", pulse_us, clamped);
        }
        let duty = Self::duty_for(clamped, self.pwm.max_duty_cycle());
        self.pwm
            .set_duty_cycle(duty)
            .map_err(|_| ActuatorError::PwmWriteFailed)?;
        self.pulse_us = Some(clamped);
        Ok(())
    }

    /// Last successfully written pulse width.
    pub fn pulse_width(&self) -> Option<u16> {
        self.pulse_us
    }

    pub fn channel(&self) -> &P {
        &self.pwm
    }

    fn duty_for(pulse_us: u16, max_duty: u16) -> u16 {
        (u32::from(pulse_us) * u32::from(max_duty) / u32::from(SERVO_PERIOD_US)) as u16
    }
}
