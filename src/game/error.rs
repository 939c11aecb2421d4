//! Game errors

use thiserror::Error;

/// Errors raised by the game core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// Grid has no room for a snake and a target
    #[error("Invalid grid size: {rows}x{cols} (need at least two cells)")]
    InvalidGrid { rows: usize, cols: usize },

    /// Cell size must be positive
    #[error("Invalid cell size: 0")]
    InvalidCellSize,

    /// Tick rate must be finite and positive
    #[error("Invalid tick rate: {0}")]
    InvalidTickRate(f64),

    /// Speed-up factor must be finite and at least 1.0
    #[error("Invalid speed-up factor: {0}")]
    InvalidSpeedup(f64),

    /// Direction ordinal outside 0..=3
    #[error("Invalid direction ordinal: {0}")]
    InvalidDirection(u8),

    /// A snake needs at least one body cell
    #[error("Snake body must not be empty")]
    EmptySnake,

    /// Every cell is occupied, no target can be placed
    #[error("Grid exhausted: no free cell left on {rows}x{cols} grid")]
    GridExhausted { rows: usize, cols: usize },
}
