//! Fixed-size thermal frame and grid coordinates.
//!
//! The thermal array delivers 32 columns × 24 rows of temperatures in
//! row-major order. [`ThermalImage`] wraps the flat buffer with
//! bounds-checked 2-D accessors so no caller does index arithmetic by hand.

use crate::error::SensorError;

/// Temperature in degrees Celsius.
pub type Celsius = f32;

/// Columns in a thermal frame.
pub const FRAME_WIDTH: usize = 32;
/// Rows in a thermal frame.
pub const FRAME_HEIGHT: usize = 24;
/// Total cells in a thermal frame.
pub const FRAME_CELLS: usize = FRAME_WIDTH * FRAME_HEIGHT;

// ---------------------------------------------------------------------------
// Coordinate
// ---------------------------------------------------------------------------

/// A cell position in the thermal grid. Always within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    x: u8,
    y: u8,
}

impl Coordinate {
    /// Geometric centre of the grid.
    pub const CENTER: Self = Self {
        x: (FRAME_WIDTH / 2) as u8,
        y: (FRAME_HEIGHT / 2) as u8,
    };

    /// Construct a coordinate, returning `None` when outside the grid.
    pub fn new(x: usize, y: usize) -> Option<Self> {
        (x < FRAME_WIDTH && y < FRAME_HEIGHT).then_some(Self {
            x: x as u8,
            y: y as u8,
        })
    }

    /// Coordinate of a row-major flat index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::new(index % FRAME_WIDTH, index / FRAME_WIDTH)
    }

    /// Row-major flat index.
    pub fn index(self) -> usize {
        self.y as usize * FRAME_WIDTH + self.x as usize
    }

    pub fn x(self) -> usize {
        self.x as usize
    }

    pub fn y(self) -> usize {
        self.y as usize
    }
}

// ---------------------------------------------------------------------------
// ThermalImage
// ---------------------------------------------------------------------------

/// One frame of calibrated temperatures.
///
/// The buffer is overwritten in place by the sensor each cycle; the control
/// loop never keeps references into it across cycles.
#[derive(Clone, PartialEq)]
pub struct ThermalImage {
    cells: [Celsius; FRAME_CELLS],
}

impl ThermalImage {
    /// A frame where every cell holds `celsius`.
    pub fn uniform(celsius: Celsius) -> Self {
        Self {
            cells: [celsius; FRAME_CELLS],
        }
    }

    /// Build a frame by evaluating `f(x, y)` for every cell.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> Celsius) -> Self {
        let mut image = Self::uniform(0.0);
        for (i, cell) in image.cells.iter_mut().enumerate() {
            *cell = f(i % FRAME_WIDTH, i / FRAME_WIDTH);
        }
        image
    }

    /// Build a frame from a row-major slice. `None` if the length is wrong.
    pub fn from_slice(values: &[Celsius]) -> Option<Self> {
        let cells: [Celsius; FRAME_CELLS] = values.try_into().ok()?;
        Some(Self { cells })
    }

    /// Temperature at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Celsius> {
        Coordinate::new(x, y).map(|c| self.at(c))
    }

    /// Temperature at a coordinate (always in bounds).
    pub fn at(&self, coord: Coordinate) -> Celsius {
        self.cells[coord.index()]
    }

    /// Overwrite the cell at `(x, y)`. Returns `false` outside the grid.
    pub fn set(&mut self, x: usize, y: usize, celsius: Celsius) -> bool {
        match Coordinate::new(x, y) {
            Some(c) => {
                self.cells[c.index()] = celsius;
                true
            }
            None => false,
        }
    }

    /// Row-major view of all cells.
    pub fn as_slice(&self) -> &[Celsius] {
        &self.cells
    }

    /// Mutable row-major view, for sensor drivers writing a frame in place.
    pub fn as_mut_slice(&mut self) -> &mut [Celsius] {
        &mut self.cells
    }

    /// Reject a frame carrying NaN or infinite readings.
    pub fn check_readings(&self) -> Result<(), SensorError> {
        if self.cells.iter().all(|c| c.is_finite()) {
            Ok(())
        } else {
            Err(SensorError::OutOfRange)
        }
    }
}

impl Default for ThermalImage {
    fn default() -> Self {
        Self::uniform(0.0)
    }
}

impl core::fmt::Debug for ThermalImage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ThermalImage")
            .field("width", &FRAME_WIDTH)
            .field("height", &FRAME_HEIGHT)
            .finish_non_exhaustive()
    }
}
