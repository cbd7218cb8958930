//! Hardware adapter: bridges peripherals to domain port traits.
//!
//! Owns the thermal sensor and every actuator driver, exposing them
//! through [`SensorPort`], [`ActuatorPort`] and [`TriggerPort`]. Generic
//! over `embedded-hal` channels so the same adapter runs on the board or
//! against simulated peripherals.

use embedded_hal::digital::InputPin;
use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::app::ports::{ActuatorPort, SensorPort, TriggerPort};
use crate::control::aim::Axis;
use crate::drivers::fan::FanDriver;
use crate::drivers::servo::ServoDriver;
use crate::drivers::trigger::TriggerInput;
use crate::error::SensorError;
use crate::sensors::frame::{Celsius, ThermalImage};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<S, A, E, F, T> {
    sensor: S,
    azimuth: ServoDriver<A>,
    elevation: ServoDriver<E>,
    fan: FanDriver<F>,
    trigger: TriggerInput<T>,
}

impl<S, A, E, F, T> HardwareAdapter<S, A, E, F, T>
where
    S: SensorPort,
    A: SetDutyCycle,
    E: SetDutyCycle,
    F: SetDutyCycle,
    T: InputPin,
{
    pub fn new(
        sensor: S,
        azimuth: ServoDriver<A>,
        elevation: ServoDriver<E>,
        fan: FanDriver<F>,
        trigger: TriggerInput<T>,
    ) -> Self {
        Self {
            sensor,
            azimuth,
            elevation,
            fan,
            trigger,
        }
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn servo_pulse(&self, axis: Axis) -> Option<u16> {
        match axis {
            Axis::Azimuth => self.azimuth.pulse_width(),
            Axis::Elevation => self.elevation.pulse_width(),
        }
    }

    pub fn fan(&self) -> &FanDriver<F> {
        &self.fan
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<S, A, E, F, T> SensorPort for HardwareAdapter<S, A, E, F, T>
where
    S: SensorPort,
{
    fn acquire_frame(&mut self, frame: &mut ThermalImage) -> Result<(), SensorError> {
        self.sensor.acquire_frame(frame)
    }

    fn ambient_temperature(&mut self) -> Celsius {
        self.sensor.ambient_temperature()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<S, A, E, F, T> ActuatorPort for HardwareAdapter<S, A, E, F, T>
where
    A: SetDutyCycle,
    E: SetDutyCycle,
    F: SetDutyCycle,
{
    fn set_axis_position(&mut self, axis: Axis, pulse_width_us: u16) {
        let result = match axis {
            Axis::Azimuth => self.azimuth.set_pulse_width(pulse_width_us),
            Axis::Elevation => self.elevation.set_pulse_width(pulse_width_us),
        };
        if let Err(e) = result {
            warn!("{:?} servo write failed: {}", axis, e);
        }
    }

    fn set_cooling_duty(&mut self, duty: u16) {
        if let Err(e) = self.fan.set_duty(duty) {
            warn!("Fan write failed: {}", e);
        }
    }
}

// ── TriggerPort implementation ────────────────────────────────

impl<S, A, E, F, T> TriggerPort for HardwareAdapter<S, A, E, F, T>
where
    T: InputPin,
{
    fn read_trigger(&mut self) -> bool {
        self.trigger.level()
    }
}
