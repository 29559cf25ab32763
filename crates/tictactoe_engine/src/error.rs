//! Error types for placement and state strings.

use derive_more::{Display, Error};

/// Reasons a placement or relocation is rejected.
///
/// None of these are fatal; a rejected request leaves the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Row or column outside 0..=2.
    #[display("Cell ({}, {}) is outside the 3x3 grid", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Target cell already holds a piece.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// No cell was referenced.
    #[display("No cell at the requested location")]
    InvalidHolder,

    /// Pieces are never relocated.
    #[display("Pieces cannot be moved once placed")]
    IllegalMove,

    /// The game already reached a terminal phase.
    #[display("Game is already over")]
    GameOver,

    /// The board has not been set up, or the session was stopped.
    #[display("Game is not running")]
    NotStarted,
}

/// A state string that cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum StateStringError {
    /// The string does not have exactly 9 characters.
    #[display("State string must be 9 characters, got {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// A character outside '0', '1', '2'.
    #[display("Invalid character {:?} at index {} (expected '0', '1' or '2')", found, index)]
    InvalidCharacter {
        /// Character offset in the string.
        index: usize,
        /// The offending character.
        found: char,
    },
}
