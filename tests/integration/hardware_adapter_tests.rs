//! HardwareAdapter wiring against mock `embedded-hal` peripherals.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType as DigitalErrorType, InputPin};
use embedded_hal::pwm::{self, SetDutyCycle};

use crate::mock_hw::{NoDelay, RecordingSink};

use thermotrack::adapters::hardware::HardwareAdapter;
use thermotrack::adapters::sim::{ScriptedTrigger, SimPwm};
use thermotrack::app::ports::{ActuatorPort, SensorPort, TriggerPort};
use thermotrack::app::service::TrackerService;
use thermotrack::config::ControllerConfig;
use thermotrack::control::aim::Axis;
use thermotrack::drivers::fan::{FanDriver, FanState};
use thermotrack::drivers::servo::ServoDriver;
use thermotrack::drivers::trigger::{ActiveLevel, TriggerInput};
use thermotrack::pins::{FAN_DUTY_MAX, SERVO_PERIOD_US};
use thermotrack::sensors::ThermalImage;
use thermotrack::sensors::scene::{SceneParams, SimulatedScene, SourcePath};

// ── Mock peripherals ──────────────────────────────────────────

#[derive(Debug)]
struct Stuck;

impl pwm::Error for Stuck {
    fn kind(&self) -> pwm::ErrorKind {
        pwm::ErrorKind::Other
    }
}

/// PWM channel whose writes always fail.
struct BrokenPwm;

impl pwm::ErrorType for BrokenPwm {
    type Error = Stuck;
}

impl SetDutyCycle for BrokenPwm {
    fn max_duty_cycle(&self) -> u16 {
        1000
    }

    fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Self::Error> {
        Err(Stuck)
    }
}

/// Input pin replaying a fixed list of electrical levels.
struct ScriptPin(Vec<bool>);

impl DigitalErrorType for ScriptPin {
    type Error = Infallible;
}

impl InputPin for ScriptPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(if self.0.is_empty() {
            true
        } else {
            self.0.remove(0)
        })
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|h| !h)
    }
}

fn fixed_scene(x: f32, y: f32) -> SimulatedScene {
    SimulatedScene::new(SceneParams {
        path: SourcePath::Fixed { x, y },
        ..SceneParams::default()
    })
}

fn sim_adapter(
    trigger: ScriptedTrigger,
) -> HardwareAdapter<SimulatedScene, SimPwm, SimPwm, SimPwm, ScriptedTrigger> {
    HardwareAdapter::new(
        fixed_scene(5.0, 2.0),
        ServoDriver::new(SimPwm::new(SERVO_PERIOD_US)),
        ServoDriver::new(SimPwm::new(SERVO_PERIOD_US)),
        FanDriver::new(SimPwm::new(FAN_DUTY_MAX)),
        TriggerInput::new(trigger, ActiveLevel::High),
    )
}

// ── Tests ─────────────────────────────────────────────────────

#[test]
fn servo_pulse_maps_to_duty_ticks() {
    let mut hw = sim_adapter(ScriptedTrigger::never());

    hw.set_axis_position(Axis::Azimuth, 1150);
    hw.set_axis_position(Axis::Elevation, 2500);

    assert_eq!(hw.servo_pulse(Axis::Azimuth), Some(1150));
    // Out-of-travel requests are clamped by the driver.
    assert_eq!(hw.servo_pulse(Axis::Elevation), Some(2000));
}

#[test]
fn fan_duty_rescales_onto_channel_resolution() {
    let mut hw = HardwareAdapter::new(
        fixed_scene(0.0, 0.0),
        ServoDriver::new(SimPwm::new(SERVO_PERIOD_US)),
        ServoDriver::new(SimPwm::new(SERVO_PERIOD_US)),
        FanDriver::new(SimPwm::new(1000)),
        TriggerInput::new(ScriptedTrigger::never(), ActiveLevel::High),
    );

    hw.set_cooling_duty(4000);

    assert_eq!(hw.fan().channel().duty(), 250);
    assert_eq!(hw.fan().state(), FanState::Running { duty: 4000 });

    hw.set_cooling_duty(0);
    assert!(!hw.fan().is_running());
}

#[test]
fn failed_pwm_write_is_absorbed() {
    let mut hw = HardwareAdapter::new(
        fixed_scene(0.0, 0.0),
        ServoDriver::new(BrokenPwm),
        ServoDriver::new(SimPwm::new(SERVO_PERIOD_US)),
        FanDriver::new(BrokenPwm),
        TriggerInput::new(ScriptedTrigger::never(), ActiveLevel::High),
    );

    hw.set_axis_position(Axis::Azimuth, 1500);
    hw.set_axis_position(Axis::Elevation, 1500);
    hw.set_cooling_duty(8000);

    assert_eq!(hw.servo_pulse(Axis::Azimuth), None);
    assert_eq!(hw.servo_pulse(Axis::Elevation), Some(1500));
    assert_eq!(hw.fan().state(), FanState::Stopped);
}

#[test]
fn active_low_button_reads_pressed_on_low() {
    let mut hw = HardwareAdapter::new(
        fixed_scene(0.0, 0.0),
        ServoDriver::new(SimPwm::new(SERVO_PERIOD_US)),
        ServoDriver::new(SimPwm::new(SERVO_PERIOD_US)),
        FanDriver::new(SimPwm::new(FAN_DUTY_MAX)),
        TriggerInput::new(ScriptPin(vec![true, false, true]), ActiveLevel::Low),
    );

    assert!(!hw.read_trigger());
    assert!(hw.read_trigger());
    assert!(!hw.read_trigger());
}

#[test]
fn sensor_calls_delegate_to_scene() {
    let mut hw = sim_adapter(ScriptedTrigger::never());
    let mut frame = ThermalImage::default();

    hw.acquire_frame(&mut frame).unwrap();

    assert_eq!(hw.sensor().frames(), 1);
    assert!((hw.ambient_temperature() - 24.0).abs() < f32::EPSILON);
}

#[test]
fn service_tracks_simulated_source_through_adapter() {
    let mut hw = sim_adapter(ScriptedTrigger::new(3, 1));
    let mut sink = RecordingSink::new();
    let mut delay = NoDelay::default();
    let mut svc = TrackerService::new(ControllerConfig::default());

    svc.run_for(&mut hw, &mut sink, &mut delay, 6);

    // Fixed source at (5, 2): default azimuth[5], elevation[2].
    assert_eq!(hw.servo_pulse(Axis::Azimuth), Some(1150));
    assert_eq!(hw.servo_pulse(Axis::Elevation), Some(1900));
    // Presses land on polls 3 and 6. The last fan write ran under the
    // aggressive profile: 41 °C is 8 over target, entry 8 = 50%.
    assert_eq!(sink.mode_changes(), [(0, 1), (1, 2)]);
    assert_eq!(hw.fan().channel().duty(), 8000);
}
