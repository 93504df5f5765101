//! Precomputed coordinate enumeration for the step loop.

use glam::IVec2;

/// Every coordinate of a board geometry, in row-major order.
///
/// Built once per geometry and reused for all steps. Entry `i` corresponds
/// to storage slot `i` of a board with the same dimensions, so iterating the
/// cache while writing a board's cells in order keeps the two aligned.
#[derive(Debug, Clone)]
pub struct IndexCache {
    coords: Vec<IVec2>,
}

impl IndexCache {
    /// Enumerates all `width * height` coordinates.
    pub fn new(width: usize, height: usize) -> Self {
        let mut coords = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                coords.push(IVec2::new(x as i32, y as i32));
            }
        }
        Self { coords }
    }

    /// Returns the number of cached coordinates.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns the coordinates in row-major order.
    pub fn coords(&self) -> &[IVec2] {
        &self.coords
    }
}
