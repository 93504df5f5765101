//! Toroidal boolean grid with flat row-major storage.

use crate::error::GridError;
use glam::IVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The 8 relative offsets of a cell's Moore neighborhood.
pub const NEIGHBOR_OFFSETS: [IVec2; 8] = [
    IVec2::new(-1, -1),
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
];

/// A fixed-size toroidal grid of live/dead cells.
///
/// Both axes wrap, so any `IVec2` (including negative components) maps to a
/// cell. Cells are stored row-major in a flat `Vec<bool>`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Creates an all-dead board.
    ///
    /// Returns [`GridError::InvalidDimensions`] if either dimension is zero;
    /// a zero dimension would make the wrap modulus zero.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Returns an all-dead board with the same dimensions as this one.
    pub fn empty_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![false; self.width * self.height],
        }
    }

    /// Returns the board width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the board height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cells in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Wraps a coordinate onto the torus and maps it to its linear index.
    ///
    /// `rem_euclid` keeps the wrapped components in `[0, modulus)` even for
    /// negative inputs, so a `-1` offset at column 0 lands on the last column.
    fn index(&self, p: IVec2) -> usize {
        let x = p.x.rem_euclid(self.width as i32) as usize;
        let y = p.y.rem_euclid(self.height as i32) as usize;
        y * self.width + x
    }

    /// Returns the state of the cell at a coordinate, wrapping as needed.
    pub fn get(&self, p: IVec2) -> bool {
        self.cells[self.index(p)]
    }

    /// Marks the cell at a coordinate alive, wrapping as needed.
    pub fn set(&mut self, p: IVec2) {
        let index = self.index(p);
        self.cells[index] = true;
    }

    /// Counts live cells among the 8 toroidal neighbors of a coordinate.
    ///
    /// On a board with width or height 1 a cell wraps onto itself, so a live
    /// cell can contribute to its own count.
    pub fn count_neighbors(&self, p: IVec2) -> u8 {
        let mut count = 0;
        for offset in NEIGHBOR_OFFSETS {
            if self.get(p + offset) {
                count += 1;
            }
        }
        count
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Counts the live cells on the board.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Randomizes the cells with the given live density (0.0 to 1.0).
    ///
    /// Deterministic for a given seed.
    pub fn randomize(&mut self, seed: u64, density: f32) {
        let mut rng = SimpleRng::new(seed);
        for cell in &mut self.cells {
            *cell = rng.next_f32() < density;
        }
    }
}

/// Simple LCG for deterministic board seeding.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn next_f32(&mut self) -> f32 {
        (self.next_u64() as f64 / u64::MAX as f64) as f32
    }
}
