//! Conway's Game of Life on a toroidal grid.
//!
//! The grid wraps on both axes, so every coordinate lookup is valid: a
//! coordinate past an edge (or negative) lands on the opposite side of the
//! board. Stepping is double-buffered, with each generation written into a
//! scratch board while reading only from the previous one.
//!
//! # Example
//!
//! ```
//! use torus_life::{Board, Pattern, Simulator};
//! use glam::IVec2;
//!
//! let mut board = Board::new(20, 20).unwrap();
//! Pattern::Glider.apply(&mut board, IVec2::new(1, 3));
//!
//! let mut sim = Simulator::new(board);
//! sim.steps(4);
//!
//! // A glider translates one cell down-right every 4 generations.
//! assert!(sim.board().get(IVec2::new(2, 4)));
//! assert_eq!(sim.board().population(), 5);
//! ```

mod board;
mod cache;
mod error;
mod pattern;
mod rule;
mod sim;

pub use board::{Board, NEIGHBOR_OFFSETS};
pub use cache::IndexCache;
pub use error::GridError;
pub use glam;
pub use pattern::{Pattern, add_blinker, add_glider};
pub use rule::next_state;
pub use sim::{Simulator, run, step};
