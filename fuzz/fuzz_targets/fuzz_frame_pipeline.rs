//! Fuzz target: reduce → locate → aim → cooling
//!
//! Interprets arbitrary bytes as little-endian `f32` cells (NaN and
//! infinities included) and pushes the frame through every control stage.
//! Nothing may panic, the hotspot must hold the reduced maximum, and every
//! command must stay inside its actuator range.
//!
//! cargo fuzz run fuzz_frame_pipeline

#![no_main]

use libfuzzer_sys::fuzz_target;
use thermotrack::control::aim::AimMapper;
use thermotrack::control::cooling::{self, CoolingCurve, default_profiles};
use thermotrack::control::mode::ControlMode;
use thermotrack::control::{hotspot, reducer};
use thermotrack::sensors::ThermalImage;

fuzz_target!(|data: &[u8]| {
    let mut frame = ThermalImage::uniform(0.0);
    for (cell, chunk) in frame.as_mut_slice().iter_mut().zip(data.chunks_exact(4)) {
        *cell = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let stats = reducer::reduce(&frame);
    let hot = hotspot::locate(&frame);
    assert!(frame.get(hot.x(), hot.y()).is_some());
    if frame.as_slice().iter().any(|c| c.is_finite()) {
        // Locator and reducer must agree on the hottest reading.
        assert_eq!(frame.at(hot), stats.max);
    }

    let decision = AimMapper::new(Default::default()).aim(&frame, stats.max);
    assert!((1000..=2000).contains(&decision.command.azimuth_us));
    assert!((1000..=2000).contains(&decision.command.elevation_us));

    let curve = CoolingCurve::new(default_profiles());
    let target = data.first().map_or(33, |&b| i16::from(b as i8));
    for index in 0..curve.profile_count() {
        let Some(mode) = ControlMode::new(index, curve.profile_count()) else {
            continue;
        };
        let percent = curve.intensity(target, stats.max, mode);
        assert!(percent <= 100);
        assert!(cooling::duty_for_percent(percent) <= 16_000);
    }
});
