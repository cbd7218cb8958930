//! Hotspot-to-servo mapping.
//!
//! Each axis has its own hand-tuned lookup table from grid position to
//! servo pulse width. The tables depend on how the sensor and the pan/tilt
//! head are mounted, so they are calibration data carried in
//! [`AimCalibration`] and injected from configuration.
//!
//! ```text
//!   hotspot (x, y) ──▶ azimuth[x]   ──▶ servo A
//!                  └─▶ elevation[y] ──▶ servo B
//! ```
//!
//! When the centre cell is already the hottest, both axes hold neutral.
//! That keeps the head still on a uniform or centred scene instead of
//! chasing whichever equal-temperature cell happens to scan first.

use serde::{Deserialize, Serialize};

use super::hotspot;
use crate::pins::{SERVO_MAX_PULSE_US, SERVO_MIN_PULSE_US, SERVO_NEUTRAL_PULSE_US};
use crate::sensors::frame::{Celsius, Coordinate, FRAME_HEIGHT, FRAME_WIDTH, ThermalImage};

/// Actuator axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Pan, driven by the hotspot column.
    Azimuth,
    /// Tilt, driven by the hotspot row.
    Elevation,
}

impl Axis {
    /// Number of grid positions along this axis.
    pub const fn extent(self) -> usize {
        match self {
            Self::Azimuth => FRAME_WIDTH,
            Self::Elevation => FRAME_HEIGHT,
        }
    }

    /// The component of `coord` that drives this axis.
    pub fn position(self, coord: Coordinate) -> usize {
        match self {
            Self::Azimuth => coord.x(),
            Self::Elevation => coord.y(),
        }
    }
}

/// Per-deployment servo lookup tables (pulse widths in microseconds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AimCalibration {
    /// Command for a centred or ambiguous scene.
    pub neutral_us: u16,
    /// Indexed by hotspot column.
    pub azimuth: [u16; FRAME_WIDTH],
    /// Indexed by hotspot row.
    pub elevation: [u16; FRAME_HEIGHT],
}

impl AimCalibration {
    fn table(&self, axis: Axis) -> &[u16] {
        match axis {
            Axis::Azimuth => &self.azimuth,
            Axis::Elevation => &self.elevation,
        }
    }

    /// Reject any command outside the servo's travel.
    pub fn validate(&self) -> Result<(), &'static str> {
        let in_range = |us: u16| (SERVO_MIN_PULSE_US..=SERVO_MAX_PULSE_US).contains(&us);
        if !in_range(self.neutral_us) {
            return Err("aim.neutral_us outside servo travel");
        }
        if !self.azimuth.iter().copied().all(in_range) {
            return Err("aim.azimuth entry outside servo travel");
        }
        if !self.elevation.iter().copied().all(in_range) {
            return Err("aim.elevation entry outside servo travel");
        }
        Ok(())
    }
}

impl Default for AimCalibration {
    fn default() -> Self {
        Self {
            neutral_us: SERVO_NEUTRAL_PULSE_US,
            azimuth: [
                1000, 1030, 1050, 1095, 1100, 1150, 1190, 1200, 1250, 1290, //
                1300, 1350, 1400, 1450, 1500, 1550, 1590, 1600, 1650, 1690, //
                1700, 1750, 1790, 1800, 1850, 1890, 1900, 1930, 1950, 1990, //
                2000, 2000,
            ],
            elevation: [
                2000, 1950, 1900, 1850, 1800, 1750, 1700, 1650, 1600, 1590, //
                1550, 1500, 1490, 1450, 1400, 1390, 1350, 1300, 1250, 1200, //
                1150, 1100, 1050, 1000,
            ],
        }
    }
}

/// Pulse widths for both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AimCommand {
    pub azimuth_us: u16,
    pub elevation_us: u16,
}

impl AimCommand {
    pub fn get(self, axis: Axis) -> u16 {
        match axis {
            Axis::Azimuth => self.azimuth_us,
            Axis::Elevation => self.elevation_us,
        }
    }
}

/// Result of mapping one frame: the command and the hotspot that drove it
/// (`None` when the centre hold applied).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AimDecision {
    pub command: AimCommand,
    pub hotspot: Option<Coordinate>,
}

/// Maps hotspot locations to servo commands.
#[derive(Debug, Clone)]
pub struct AimMapper {
    calibration: AimCalibration,
}

impl AimMapper {
    pub fn new(calibration: AimCalibration) -> Self {
        Self { calibration }
    }

    pub fn calibration(&self) -> &AimCalibration {
        &self.calibration
    }

    /// Both axes at neutral.
    pub fn neutral(&self) -> AimCommand {
        AimCommand {
            azimuth_us: self.calibration.neutral_us,
            elevation_us: self.calibration.neutral_us,
        }
    }

    /// Table lookup with the position clamped into the table.
    pub fn lookup(&self, axis: Axis, position: i32) -> u16 {
        let table = self.calibration.table(axis);
        debug_assert_eq!(table.len(), axis.extent());
        let last = table.len() - 1;
        let index = if position <= 0 {
            0
        } else if position as usize >= last {
            last
        } else {
            position as usize
        };
        table[index]
    }

    /// Command for a single axis.
    pub fn command(&self, image: &ThermalImage, global_max: Celsius, axis: Axis) -> u16 {
        if Self::center_is_hottest(image, global_max) {
            return self.calibration.neutral_us;
        }
        let hot = hotspot::locate(image);
        self.lookup(axis, axis.position(hot) as i32)
    }

    /// Commands for both axes from a single hotspot scan.
    pub fn aim(&self, image: &ThermalImage, global_max: Celsius) -> AimDecision {
        if Self::center_is_hottest(image, global_max) {
            return AimDecision {
                command: self.neutral(),
                hotspot: None,
            };
        }
        let hot = hotspot::locate(image);
        AimDecision {
            command: AimCommand {
                azimuth_us: self.lookup(Axis::Azimuth, hot.x() as i32),
                elevation_us: self.lookup(Axis::Elevation, hot.y() as i32),
            },
            hotspot: Some(hot),
        }
    }

    fn center_is_hottest(image: &ThermalImage, global_max: Celsius) -> bool {
        image.at(Coordinate::CENTER) >= global_max
    }
}
