//! Synthetic thermal scene.
//!
//! Renders a uniform background with a single warm source whose intensity
//! falls off as a Gaussian. The source either stays put or sweeps a
//! Lissajous path across the field of view, one step per acquired frame.
//! Deterministic: the same parameters always produce the same frames.

use core::f32::consts::TAU;

use crate::app::ports::SensorPort;
use crate::error::SensorError;
use crate::sensors::frame::{Celsius, FRAME_HEIGHT, FRAME_WIDTH, ThermalImage};

/// Open-air offset subtracted from the die temperature to estimate the
/// reflected temperature.
pub const OPEN_AIR_TA_SHIFT_C: Celsius = 8.0;

/// How the warm source moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourcePath {
    Fixed { x: f32, y: f32 },
    /// Full horizontal sweep every `period_frames`, vertical at 2/3 that rate.
    Lissajous { period_frames: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    pub background_c: Celsius,
    pub source_peak_c: Celsius,
    /// Gaussian sigma in cells.
    pub source_radius: f32,
    /// Sensor die temperature.
    pub die_c: Celsius,
    pub path: SourcePath,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            background_c: 22.0,
            source_peak_c: 41.0,
            source_radius: 1.5,
            die_c: 32.0,
            path: SourcePath::Lissajous { period_frames: 40 },
        }
    }
}

pub struct SimulatedScene {
    params: SceneParams,
    frames: u64,
}

impl SimulatedScene {
    pub fn new(params: SceneParams) -> Self {
        Self { params, frames: 0 }
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Source centre for frame number `n`.
    pub fn source_position(&self, n: u64) -> (f32, f32) {
        let half_w = (FRAME_WIDTH - 1) as f32 / 2.0;
        let half_h = (FRAME_HEIGHT - 1) as f32 / 2.0;
        match self.params.path {
            SourcePath::Fixed { x, y } => (x, y),
            SourcePath::Lissajous { period_frames } => {
                let period = u64::from(period_frames.max(1));
                let t = (n % (period * 3)) as f32 / period as f32;
                let x = half_w * (1.0 + (TAU * t).sin());
                let y = half_h * (1.0 + (TAU * t * 2.0 / 3.0 + TAU / 4.0).sin());
                (x, y)
            }
        }
    }

    fn render(&self, n: u64, frame: &mut ThermalImage) {
        let (sx, sy) = self.source_position(n);
        let p = &self.params;
        let two_sigma_sq = 2.0 * p.source_radius * p.source_radius;
        let rise = p.source_peak_c - p.background_c;
        for (i, cell) in frame.as_mut_slice().iter_mut().enumerate() {
            let dx = (i % FRAME_WIDTH) as f32 - sx;
            let dy = (i / FRAME_WIDTH) as f32 - sy;
            *cell = p.background_c + rise * (-(dx * dx + dy * dy) / two_sigma_sq).exp();
        }
    }
}

impl SensorPort for SimulatedScene {
    fn acquire_frame(&mut self, frame: &mut ThermalImage) -> Result<(), SensorError> {
        self.render(self.frames, frame);
        self.frames += 1;
        Ok(())
    }

    fn ambient_temperature(&mut self) -> Celsius {
        self.params.die_c - OPEN_AIR_TA_SHIFT_C
    }
}
