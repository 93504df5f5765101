//! Double-buffered simulation driver.

use crate::board::Board;
use crate::cache::IndexCache;
use crate::rule::next_state;

/// Computes one generation, reading `current` and overwriting `next`.
///
/// Every cell of `next` is written, in cache order (which matches the
/// storage order of `next`). The two boards must be separate buffers with
/// the same dimensions: each output cell depends on its neighbors' previous
/// state, so updating in place would corrupt later reads within the step.
pub fn step(current: &Board, next: &mut Board, cache: &IndexCache) {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());
    debug_assert_eq!(cache.len(), next.cells().len());

    let cells = next.cells_mut();
    for (slot, &coord) in cache.coords().iter().enumerate() {
        let alive = current.get(coord);
        let neighbors = current.count_neighbors(coord);
        cells[slot] = next_state(alive, neighbors);
    }
}

/// Owns the two alternating boards and the shared coordinate cache.
///
/// The boards are allocated once and swap roles each step; the cache is
/// built once from the board geometry and never changes.
#[derive(Debug, Clone)]
pub struct Simulator {
    current: Board,
    next: Board,
    cache: IndexCache,
}

impl Simulator {
    /// Creates a simulator from an initial board.
    ///
    /// Allocates the scratch board and builds the coordinate cache.
    pub fn new(initial: Board) -> Self {
        let next = initial.empty_like();
        let cache = IndexCache::new(initial.width(), initial.height());
        Self {
            current: initial,
            next,
            cache,
        }
    }

    /// Advances the simulation by one generation.
    pub fn step(&mut self) {
        step(&self.current, &mut self.next, &self.cache);
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Advances the simulation by `n` generations. Zero is a no-op.
    pub fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Returns the board holding the current generation.
    pub fn board(&self) -> &Board {
        &self.current
    }

    /// Consumes the simulator, returning the current generation's board.
    pub fn into_board(self) -> Board {
        self.current
    }
}

/// Runs `iterations` generations from an initial board and returns the
/// final board. With zero iterations the board is returned unchanged.
pub fn run(initial: Board, iterations: usize) -> Board {
    let mut sim = Simulator::new(initial);
    sim.steps(iterations);
    sim.into_board()
}
