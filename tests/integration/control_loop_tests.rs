//! End-to-end control loop scenarios against mock hardware.

use crate::mock_hw::{ActuatorCall, MockHardware, NoDelay, RecordingSink};

use thermotrack::app::events::AppEvent;
use thermotrack::app::service::TrackerService;
use thermotrack::config::ControllerConfig;
use thermotrack::control::aim::Axis;
use thermotrack::control::cooling::{CoolingProfiles, ResponseProfile};
use thermotrack::error::{Error, SensorError};
use thermotrack::sensors::{Coordinate, ThermalImage};

fn hot_cell_frame() -> ThermalImage {
    let mut frame = ThermalImage::uniform(20.0);
    assert!(frame.set(5, 2, 50.0));
    frame
}

fn service() -> TrackerService {
    TrackerService::new(ControllerConfig::default())
}

#[test]
fn hot_cell_drives_both_axes_from_its_coordinate() {
    let mut hw = MockHardware::new().with_frame(hot_cell_frame());
    let mut sink = RecordingSink::new();
    let mut svc = service();

    let t = svc.cycle(&mut hw, &mut sink).unwrap();

    assert_eq!(t.max_c, 50.0);
    assert_eq!(t.min_c, 20.0);
    assert_eq!(t.hotspot, Coordinate::new(5, 2));
    // Default tables: azimuth[5], elevation[2].
    assert_eq!(t.aim.azimuth_us, 1150);
    assert_eq!(t.aim.elevation_us, 1900);
    assert_eq!(hw.last_axis(Axis::Azimuth), Some(1150));
    assert_eq!(hw.last_axis(Axis::Elevation), Some(1900));
    // 17 degrees over target saturates the gentle profile.
    assert_eq!(t.cooling_percent, 100);
    assert_eq!(hw.cooling_duties(), [16_000]);
}

#[test]
fn three_degrees_over_target_gives_quarter_fan() {
    let mut hw = MockHardware::new().with_frame(ThermalImage::uniform(36.0));
    let mut sink = RecordingSink::new();
    let mut svc = service();

    let t = svc.cycle(&mut hw, &mut sink).unwrap();

    assert_eq!(t.cooling_percent, 25);
    assert_eq!(t.cooling_duty, 25 * 160);
    // Uniform scene: centre is as hot as anything, so the head holds neutral.
    assert_eq!(t.hotspot, None);
    assert_eq!(t.aim.azimuth_us, 1500);
    assert_eq!(t.aim.elevation_us, 1500);
}

#[test]
fn at_or_below_target_fan_is_off() {
    let mut hw = MockHardware::new().with_frame(ThermalImage::uniform(33.0));
    let mut sink = RecordingSink::new();
    let mut svc = service();

    svc.cycle(&mut hw, &mut sink).unwrap();
    assert_eq!(hw.cooling_duties(), [0]);
}

#[test]
fn first_cycle_homes_before_any_tracking_command() {
    let mut hw = MockHardware::new().with_frame(hot_cell_frame());
    let mut sink = RecordingSink::new();
    let mut svc = service();

    svc.cycle(&mut hw, &mut sink).unwrap();
    svc.cycle(&mut hw, &mut sink).unwrap();

    assert_eq!(
        &hw.calls[..2],
        &[
            ActuatorCall::Axis {
                axis: Axis::Azimuth,
                pulse_us: 1500
            },
            ActuatorCall::Axis {
                axis: Axis::Elevation,
                pulse_us: 1500
            },
        ]
    );
    assert_eq!(hw.axis_commands(Axis::Azimuth), [1500, 1150, 1150]);
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::Homed { neutral_us: 1500 })),
        1
    );
    assert!(svc.is_homed());
}

#[test]
fn run_for_homes_then_settles_then_paces_cycles() {
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    let mut delay = NoDelay::default();
    let config = ControllerConfig {
        frame_interval_ms: 250,
        home_settle_ms: 700,
        ..ControllerConfig::default()
    };
    let mut svc = TrackerService::new(config);

    svc.run_for(&mut hw, &mut sink, &mut delay, 3);

    assert_eq!(delay.waits_ms, [700, 250, 250, 250]);
    assert_eq!(svc.cycle_count(), 3);
    assert_eq!(hw.axis_commands(Axis::Elevation)[0], 1500);
}

#[test]
fn dropped_frame_skips_actuators_but_polls_trigger() {
    let mut hw = MockHardware::new();
    hw.push_failure(SensorError::BusReadFailed);
    hw.script_trigger(&[true]);
    let mut sink = RecordingSink::new();
    let mut svc = service();

    let result = svc.cycle(&mut hw, &mut sink);

    assert_eq!(result, Err(Error::Sensor(SensorError::BusReadFailed)));
    assert!(hw.calls.is_empty());
    assert_eq!(hw.trigger_polls, 1);
    assert_eq!(svc.mode().index(), 1);
    assert_eq!(svc.frames_dropped(), 1);
    assert!(!svc.is_homed());
    assert_eq!(
        sink.count(|e| matches!(
            e,
            AppEvent::FrameDropped(SensorError::BusReadFailed)
        )),
        1
    );

    // The loop recovers on the next good frame and homes first.
    svc.cycle(&mut hw, &mut sink).unwrap();
    assert_eq!(hw.axis_commands(Axis::Azimuth)[0], 1500);
    assert_eq!(svc.cycle_count(), 2);
}

#[test]
fn frame_with_nan_is_dropped_as_out_of_range() {
    let mut bad = hot_cell_frame();
    assert!(bad.set(0, 0, f32::NAN));
    let mut hw = MockHardware::new();
    hw.push_frame(bad);
    hw.push_frame(hot_cell_frame());
    let mut sink = RecordingSink::new();
    let mut svc = service();

    let result = svc.cycle(&mut hw, &mut sink);

    assert_eq!(result, Err(Error::Sensor(SensorError::OutOfRange)));
    assert!(hw.calls.is_empty());
    assert_eq!(svc.frames_dropped(), 1);
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::FrameDropped(SensorError::OutOfRange))),
        1
    );

    let t = svc.cycle(&mut hw, &mut sink).unwrap();
    assert_eq!(t.hotspot, Coordinate::new(5, 2));
    assert_eq!(hw.last_axis(Axis::Azimuth), Some(1150));
    assert_eq!(hw.last_axis(Axis::Elevation), Some(1900));
}

#[test]
fn run_for_keeps_going_after_errors() {
    let mut hw = MockHardware::new();
    hw.push_failure(SensorError::FrameNotReady);
    hw.push_failure(SensorError::FrameNotReady);
    let mut sink = RecordingSink::new();
    let mut delay = NoDelay::default();
    let mut svc = service();

    svc.run_for(&mut hw, &mut sink, &mut delay, 4);

    assert_eq!(svc.cycle_count(), 4);
    assert_eq!(svc.frames_dropped(), 2);
    assert_eq!(hw.cooling_duties().len(), 2);
}

#[test]
fn held_button_advances_mode_once_across_cycles() {
    let mut hw = MockHardware::new();
    hw.script_trigger(&[true, true, true]);
    let mut sink = RecordingSink::new();
    let mut svc = service();

    for _ in 0..3 {
        svc.cycle(&mut hw, &mut sink).unwrap();
    }

    assert_eq!(sink.mode_changes(), [(0, 1)]);
    assert_eq!(svc.mode().index(), 1);
}

#[test]
fn three_presses_cycle_modes_and_wrap() {
    let mut hw = MockHardware::new();
    hw.script_trigger(&[true, false, true, false, true, false]);
    let mut sink = RecordingSink::new();
    let mut svc = service();

    for _ in 0..6 {
        svc.cycle(&mut hw, &mut sink).unwrap();
    }

    assert_eq!(sink.mode_changes(), [(0, 1), (1, 2), (2, 0)]);
}

#[test]
fn mode_change_takes_effect_next_cycle() {
    let mut hw = MockHardware::new().with_frame(ThermalImage::uniform(36.0));
    hw.script_trigger(&[true]);
    let mut sink = RecordingSink::new();
    let mut svc = service();

    let first = svc.cycle(&mut hw, &mut sink).unwrap();
    let second = svc.cycle(&mut hw, &mut sink).unwrap();

    assert_eq!(first.mode.index(), 0);
    assert_eq!(first.cooling_percent, 25);
    assert_eq!(second.mode.index(), 1);
    assert_eq!(second.cooling_percent, 20);
}

#[test]
fn mode_count_follows_configured_profiles() {
    let mut cooling = CoolingProfiles::new();
    cooling.push(ResponseProfile::GENTLE).unwrap();
    cooling.push(ResponseProfile::MAXIMUM).unwrap();
    let config = ControllerConfig {
        cooling,
        ..ControllerConfig::default()
    };
    let mut hw = MockHardware::new();
    hw.script_trigger(&[true, false, true, false]);
    let mut sink = RecordingSink::new();
    let mut svc = TrackerService::new(config);

    for _ in 0..4 {
        svc.cycle(&mut hw, &mut sink).unwrap();
    }

    assert_eq!(sink.mode_changes(), [(0, 1), (1, 0)]);
}

#[test]
fn telemetry_emitted_on_configured_cadence() {
    let config = ControllerConfig {
        telemetry_interval_cycles: 3,
        ..ControllerConfig::default()
    };
    let mut hw = MockHardware::new().with_frame(hot_cell_frame());
    hw.ambient_c = 21.5;
    let mut sink = RecordingSink::new();
    let mut svc = TrackerService::new(config);

    for _ in 0..7 {
        svc.cycle(&mut hw, &mut sink).unwrap();
    }

    assert_eq!(sink.telemetry_cycles(), [3, 6]);
    let last = sink.events.iter().rev().find_map(|e| match e {
        AppEvent::Telemetry(t) => Some(*t),
        _ => None,
    });
    let last = last.unwrap();
    assert_eq!(last.ambient_c, 21.5);
    assert_eq!(last.cooling_duty, 16_000);
}

#[test]
fn start_announces_initial_mode() {
    let config = ControllerConfig {
        initial_mode: 2,
        ..ControllerConfig::default()
    };
    let mut sink = RecordingSink::new();
    let mut svc = TrackerService::new(config);

    svc.start(&mut sink);

    assert!(matches!(
        sink.events.as_slice(),
        [AppEvent::Started { mode }] if mode.index() == 2
    ));
}

#[test]
fn frame_buffer_is_overwritten_each_cycle() {
    let mut hw = MockHardware::new();
    hw.push_frame(hot_cell_frame());
    hw.push_frame(ThermalImage::uniform(25.0));
    let mut sink = RecordingSink::new();
    let mut svc = service();

    svc.cycle(&mut hw, &mut sink).unwrap();
    assert_eq!(svc.frame().get(5, 2), Some(50.0));
    svc.cycle(&mut hw, &mut sink).unwrap();
    assert_eq!(svc.frame().get(5, 2), Some(25.0));
}
