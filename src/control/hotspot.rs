//! Hotspot location.
//!
//! Strict greater-than comparison means the first cell in row-major order
//! wins a tie, so a static scene with equally hot cells always resolves to
//! the same coordinate and the aim does not jitter between them. Non-finite
//! cells are skipped, matching the reducer.

use crate::sensors::frame::{Coordinate, ThermalImage};

/// Coordinate of the hottest cell (first occurrence on ties).
///
/// A frame with no finite cell resolves to [`Coordinate::CENTER`].
pub fn locate(image: &ThermalImage) -> Coordinate {
    let mut best: Option<(usize, f32)> = None;
    for (i, &v) in image.as_slice().iter().enumerate() {
        if !v.is_finite() {
            continue;
        }
        match best {
            Some((_, hottest)) if v <= hottest => {}
            _ => best = Some((i, v)),
        }
    }
    best.and_then(|(i, _)| Coordinate::from_index(i))
        .unwrap_or(Coordinate::CENTER)
}
