//! Error types for torus-life.

use thiserror::Error;

/// Errors from board construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A board dimension was zero, which would make the wrap modulus zero.
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
}
