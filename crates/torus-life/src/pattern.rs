//! Seed patterns placed relative to an anchor coordinate.
//!
//! <https://en.wikipedia.org/wiki/Conway%27s_Game_of_Life#Examples_of_patterns>

use crate::board::Board;
use glam::IVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const GLIDER_OFFSETS: [IVec2; 5] = [
    IVec2::new(0, 0),
    IVec2::new(1, 1),
    IVec2::new(2, 1),
    IVec2::new(0, 2),
    IVec2::new(1, 2),
];

const BLINKER_OFFSETS: [IVec2; 3] = [IVec2::new(0, 0), IVec2::new(1, 0), IVec2::new(2, 0)];

/// A well-known Life pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Pattern {
    /// 5-cell spaceship that translates (+1, +1) every 4 generations.
    Glider,
    /// Horizontal 3-cell line, a period-2 oscillator.
    Blinker,
}

impl Pattern {
    /// Returns the pattern's live cells as anchor-relative offsets.
    pub fn offsets(&self) -> &'static [IVec2] {
        match self {
            Pattern::Glider => &GLIDER_OFFSETS,
            Pattern::Blinker => &BLINKER_OFFSETS,
        }
    }

    /// Writes the pattern onto a board relative to an anchor.
    ///
    /// Any anchor is legal; cells past an edge wrap around the torus.
    pub fn apply(&self, board: &mut Board, anchor: IVec2) {
        for &offset in self.offsets() {
            board.set(anchor + offset);
        }
    }
}

/// Adds a glider at the given anchor.
pub fn add_glider(board: &mut Board, anchor: IVec2) {
    Pattern::Glider.apply(board, anchor);
}

/// Adds a blinker at the given anchor.
pub fn add_blinker(board: &mut Board, anchor: IVec2) {
    Pattern::Blinker.apply(board, anchor);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider_cells() {
        let mut board = Board::new(10, 10).unwrap();
        add_glider(&mut board, IVec2::new(1, 3));

        assert_eq!(board.population(), 5);
        assert!(board.get(IVec2::new(1, 3)));
        assert!(board.get(IVec2::new(2, 4)));
        assert!(board.get(IVec2::new(3, 4)));
        assert!(board.get(IVec2::new(1, 5)));
        assert!(board.get(IVec2::new(2, 5)));
    }

    #[test]
    fn test_blinker_cells() {
        let mut board = Board::new(7, 7).unwrap();
        add_blinker(&mut board, IVec2::new(2, 3));

        assert_eq!(board.population(), 3);
        assert!(board.get(IVec2::new(2, 3)));
        assert!(board.get(IVec2::new(3, 3)));
        assert!(board.get(IVec2::new(4, 3)));
    }

    #[test]
    fn test_anchor_wraps_past_edge() {
        // Anchored so part of the glider lands across the seam.
        let mut board = Board::new(5, 5).unwrap();
        add_glider(&mut board, IVec2::new(4, 4));

        assert_eq!(board.population(), 5);
        assert!(board.get(IVec2::new(4, 4)));
        assert!(board.get(IVec2::new(0, 0)));
        assert!(board.get(IVec2::new(1, 0)));
        assert!(board.get(IVec2::new(4, 1)));
        assert!(board.get(IVec2::new(0, 1)));
    }

    #[test]
    fn test_overlapping_patterns_stay_set() {
        // set() only marks cells alive, so overlap never erases anything.
        let mut board = Board::new(10, 10).unwrap();
        add_blinker(&mut board, IVec2::new(1, 1));
        add_blinker(&mut board, IVec2::new(2, 1));

        assert_eq!(board.population(), 4);
    }
}
