//! Frame reduction to summary statistics.

use crate::sensors::frame::{Celsius, ThermalImage};

/// Minimum and maximum temperature of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub min: Celsius,
    pub max: Celsius,
}

/// Scan a buffer for its minimum and maximum. Non-finite values are skipped.
///
/// # Panics
///
/// Panics on an empty buffer. A frame is never empty, so an empty input
/// is a caller bug and is not papered over with a default.
pub fn min_max(values: &[Celsius]) -> FrameStats {
    assert!(!values.is_empty(), "min_max: empty temperature buffer");

    let mut stats = FrameStats {
        min: Celsius::MAX,
        max: Celsius::MIN,
    };
    for &v in values.iter().filter(|v| v.is_finite()) {
        if v > stats.max {
            stats.max = v;
        }
        if v < stats.min {
            stats.min = v;
        }
    }
    stats
}

/// Reduce a full frame. Infallible: the grid always has every cell.
pub fn reduce(image: &ThermalImage) -> FrameStats {
    min_max(image.as_slice())
}
